// ABOUTME: Report models pairing computed results with the record they came from
// ABOUTME: Day-steps and training reports consumed by summary formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ActivityKind, ActivityRecord, ActivityResult};
use crate::constants::units::duration_hours;
use serde::{Deserialize, Serialize};

/// Outcome of a step-only record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayStepsReport {
    /// Number of steps taken
    pub steps: u64,
    /// Distance in kilometers from the fixed step length
    pub distance_km: f64,
    /// Calories spent walking
    pub calories_kcal: f64,
}

impl DayStepsReport {
    /// Build a report from a parsed record and its computed result
    #[must_use]
    pub const fn new(record: &ActivityRecord, result: &ActivityResult) -> Self {
        Self {
            steps: record.steps,
            distance_km: result.distance_km,
            calories_kcal: result.calories_kcal,
        }
    }
}

/// Outcome of a training record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Resolved activity type
    pub activity: ActivityKind,
    /// Activity label as written in the record
    pub label: String,
    /// Number of steps taken
    pub steps: u64,
    /// Duration in fractional hours
    pub duration_hours: f64,
    /// Distance in kilometers from the height-based stride
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Calories spent
    pub calories_kcal: f64,
}

impl TrainingReport {
    /// Build a report from a parsed record, its resolved kind and computed result
    #[must_use]
    pub fn new(record: &ActivityRecord, activity: ActivityKind, result: &ActivityResult) -> Self {
        Self {
            activity,
            label: record.activity_label().to_owned(),
            steps: record.steps,
            duration_hours: duration_hours(record.duration),
            distance_km: result.distance_km,
            mean_speed_kmh: result.mean_speed_kmh,
            calories_kcal: result.calories_kcal,
        }
    }
}
