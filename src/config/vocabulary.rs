// ABOUTME: Activity vocabulary mapping localized record labels onto activity kinds
// ABOUTME: Ships Russian defaults and an English alternative; unknown labels fail validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use fitness_tracker_core::errors::ValidationError;
use fitness_tracker_core::models::ActivityKind;
use serde::{Deserialize, Serialize};

/// Localized tokens recognized as activity labels in training records
///
/// Matching is exact after trimming: the vocabulary is a closed two-entry
/// table, not a fuzzy classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityVocabulary {
    /// Label for [`ActivityKind::Walking`]
    pub walking: String,
    /// Label for [`ActivityKind::Running`]
    pub running: String,
}

impl Default for ActivityVocabulary {
    fn default() -> Self {
        Self::russian()
    }
}

impl ActivityVocabulary {
    /// Create a vocabulary from explicit labels
    pub fn new(walking: impl Into<String>, running: impl Into<String>) -> Self {
        Self {
            walking: walking.into(),
            running: running.into(),
        }
    }

    /// Russian labels ("Ходьба", "Бег")
    #[must_use]
    pub fn russian() -> Self {
        Self::new("Ходьба", "Бег")
    }

    /// English labels ("Walking", "Running")
    #[must_use]
    pub fn english() -> Self {
        Self::new("Walking", "Running")
    }

    /// Map a record label onto an activity kind
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownActivity`] for any label outside the vocabulary
    pub fn resolve(&self, label: &str) -> Result<ActivityKind, ValidationError> {
        let label = label.trim();
        if label == self.walking {
            Ok(ActivityKind::Walking)
        } else if label == self.running {
            Ok(ActivityKind::Running)
        } else {
            Err(ValidationError::unknown_activity(label))
        }
    }

    /// Label used for `kind` in records and summaries
    #[must_use]
    pub fn label(&self, kind: ActivityKind) -> &str {
        match kind {
            ActivityKind::Walking => &self.walking,
            ActivityKind::Running => &self.running,
        }
    }

    /// Labels must be non-empty and distinct
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidVocabulary`] otherwise
    pub fn validate(&self) -> Result<(), ConfigError> {
        let walking = self.walking.trim();
        let running = self.running.trim();
        if walking.is_empty() || running.is_empty() {
            return Err(ConfigError::InvalidVocabulary(
                "activity labels must not be empty",
            ));
        }
        if walking != self.walking || running != self.running {
            return Err(ConfigError::InvalidVocabulary(
                "activity labels must not have surrounding whitespace",
            ));
        }
        if walking == running {
            return Err(ConfigError::InvalidVocabulary(
                "walking and running labels must differ",
            ));
        }
        Ok(())
    }
}
