// ABOUTME: Activity type enumeration for step-based sessions
// ABOUTME: Closed set of walking and running with canonical names, parsing and display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported activity types
///
/// Localized record labels map onto these variants through the configured
/// activity vocabulary; `FromStr` only understands the canonical English names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Walking: running formula scaled by the walking coefficient
    Walking,
    /// Running: weight x speed x time, no coefficient
    Running,
}

impl ActivityKind {
    /// All supported kinds
    pub const ALL: [Self; 2] = [Self::Walking, Self::Running];

    /// Canonical name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Running => "running",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "walking" | "walk" => Ok(Self::Walking),
            "running" | "run" => Ok(Self::Running),
            _ => Err(ValidationError::unknown_activity(s.trim())),
        }
    }
}
