// ABOUTME: Semantic errors raised at the entry of physiology computations
// ABOUTME: Invalid steps, weight, height, duration, or an activity label outside the vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Semantic failure of otherwise well-formed numeric inputs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Step count must be greater than zero
    #[error("step count must be greater than zero, got {steps}")]
    StepsInvalid {
        /// Offending step count
        steps: u64,
    },

    /// Weight must be a finite positive number of kilograms
    #[error("weight must be a positive number of kilograms, got {weight_kg}")]
    WeightInvalid {
        /// Offending weight
        weight_kg: f64,
    },

    /// Height must be a finite positive number of meters
    #[error("height must be a positive number of meters, got {height_m}")]
    HeightInvalid {
        /// Offending height
        height_m: f64,
    },

    /// Duration must be longer than zero
    #[error("duration must be greater than zero, got {seconds}s")]
    DurationInvalid {
        /// Offending duration in seconds
        seconds: f64,
    },

    /// Activity label is not part of the configured vocabulary
    #[error("unknown activity type: '{label}'")]
    UnknownActivity {
        /// Label as it appeared in the record
        label: String,
    },
}

impl ValidationError {
    /// Create an unknown activity error
    #[must_use]
    pub fn unknown_activity(label: impl Into<String>) -> Self {
        Self::UnknownActivity {
            label: label.into(),
        }
    }

    /// Name of the offending input
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::StepsInvalid { .. } => "steps",
            Self::WeightInvalid { .. } => "weight",
            Self::HeightInvalid { .. } => "height",
            Self::DurationInvalid { .. } => "duration",
            Self::UnknownActivity { .. } => "activity",
        }
    }
}
