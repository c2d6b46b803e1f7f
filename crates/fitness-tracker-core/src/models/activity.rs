// ABOUTME: Activity record, person profile and computed activity result models
// ABOUTME: Plain data carriers passed between the record parser and the physiology engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One parsed exercise session
///
/// Produced by the record parser only after every field has been checked, so
/// `steps` and `duration` are always positive when a record comes out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    /// Number of steps taken
    pub steps: u64,
    /// Activity label exactly as written in the record (training form only)
    pub activity: Option<String>,
    /// Elapsed time of the session
    pub duration: Duration,
}

impl ActivityRecord {
    /// Create a step-only record
    #[must_use]
    pub const fn new(steps: u64, duration: Duration) -> Self {
        Self {
            steps,
            activity: None,
            duration,
        }
    }

    /// Create a training record carrying an activity label
    #[must_use]
    pub fn with_activity(steps: u64, activity: impl Into<String>, duration: Duration) -> Self {
        Self {
            steps,
            activity: Some(activity.into()),
            duration,
        }
    }

    /// Activity label, or an empty string for step-only records
    #[must_use]
    pub fn activity_label(&self) -> &str {
        self.activity.as_deref().unwrap_or_default()
    }
}

/// Physical attributes of the person the activity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Body height in meters
    pub height_m: f64,
}

impl PersonProfile {
    /// Create a profile from weight (kg) and height (m)
    #[must_use]
    pub const fn new(weight_kg: f64, height_m: f64) -> Self {
        Self {
            weight_kg,
            height_m,
        }
    }
}

/// Numbers derived from one record and one profile
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ActivityResult {
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Mean speed over the whole duration in km/h
    pub mean_speed_kmh: f64,
    /// Energy spent in kilocalories
    pub calories_kcal: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_label() {
        let steps_only = ActivityRecord::new(10, Duration::from_secs(60));
        assert_eq!(steps_only.activity_label(), "");

        let training = ActivityRecord::with_activity(10, "Бег", Duration::from_secs(60));
        assert_eq!(training.activity_label(), "Бег");
    }

    #[test]
    fn test_result_serializes_with_snake_case_fields() {
        let result = ActivityResult {
            distance_km: 0.7875,
            mean_speed_kmh: 1.89,
            calories_kcal: 27.5625,
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["distance_km"], 0.7875);
        assert_eq!(json["mean_speed_kmh"], 1.89);
    }
}
