// ABOUTME: Physiology engine computing distance, mean speed and calories from step counts
// ABOUTME: Height-based stride distance, walking and running calorie formulas, activity dispatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiology Engine
//!
//! Pure, stateless calculations over step counts and body measurements.
//!
//! # Formulas
//!
//! - Stride length (m) = `stride_length_coefficient` x height (m)
//! - Distance (km) = steps x stride length / 1000
//! - Mean speed (km/h) = distance / duration (h)
//! - Running calories (kcal) = weight (kg) x mean speed (km/h) x duration (min) / 60
//! - Walking calories (kcal) = running calories x `walking_calories_coefficient`
//!
//! Every calorie computation validates its inputs first and fails fast with a
//! [`ValidationError`] naming the offending input. Nothing here logs; errors
//! are returned to the caller.

use crate::config::{ActivityVocabulary, PhysiologyConfig, TrackerConfig};
use fitness_tracker_core::constants::units::{
    duration_hours, duration_minutes, METERS_PER_KM, MINUTES_PER_HOUR,
};
use fitness_tracker_core::errors::ValidationError;
use fitness_tracker_core::models::{ActivityKind, ActivityRecord, ActivityResult, PersonProfile};
use std::time::Duration;

/// Stateless calculator for step-based activities
///
/// Holds only immutable configuration, so a single engine can be shared
/// freely across threads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PhysiologyEngine {
    physiology: PhysiologyConfig,
    vocabulary: ActivityVocabulary,
}

impl PhysiologyEngine {
    /// Create an engine from physiology coefficients and an activity vocabulary
    #[must_use]
    pub const fn new(physiology: PhysiologyConfig, vocabulary: ActivityVocabulary) -> Self {
        Self {
            physiology,
            vocabulary,
        }
    }

    /// Create an engine from a loaded tracker configuration
    #[must_use]
    pub fn from_config(config: TrackerConfig) -> Self {
        Self::new(config.physiology, config.vocabulary)
    }

    /// Distance in kilometers covered by `steps` strides of a person `height_m` tall
    #[must_use]
    pub fn distance_km(&self, steps: u64, height_m: f64) -> f64 {
        let stride_length = self.physiology.stride_length_coefficient * height_m;
        steps as f64 * stride_length / METERS_PER_KM
    }

    /// Distance in kilometers using the fixed average step length
    #[must_use]
    pub fn step_distance_km(&self, steps: u64) -> f64 {
        steps as f64 * self.physiology.step_length_m / METERS_PER_KM
    }

    /// Mean speed in km/h over the whole duration
    ///
    /// A zero duration yields `0.0` instead of a division by zero. The calorie
    /// formulas reject zero durations before they get here.
    #[must_use]
    pub fn mean_speed_kmh(&self, steps: u64, height_m: f64, duration: Duration) -> f64 {
        if duration.is_zero() {
            return 0.0;
        }
        self.distance_km(steps, height_m) / duration_hours(duration)
    }

    /// Calories spent walking
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if steps, weight, height or duration is not positive
    pub fn calories_walking(
        &self,
        steps: u64,
        weight_kg: f64,
        height_m: f64,
        duration: Duration,
    ) -> Result<f64, ValidationError> {
        let running = self.calories_running(steps, weight_kg, height_m, duration)?;
        Ok(running * self.physiology.walking_calories_coefficient)
    }

    /// Calories spent running
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if steps, weight, height or duration is not positive
    pub fn calories_running(
        &self,
        steps: u64,
        weight_kg: f64,
        height_m: f64,
        duration: Duration,
    ) -> Result<f64, ValidationError> {
        validate_inputs(steps, weight_kg, height_m, duration)?;

        let mean_speed = self.mean_speed_kmh(steps, height_m, duration);
        Ok(weight_kg * mean_speed * duration_minutes(duration) / MINUTES_PER_HOUR)
    }

    /// Calories for the given activity kind
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if steps, weight, height or duration is not positive
    pub fn calories(
        &self,
        kind: ActivityKind,
        steps: u64,
        weight_kg: f64,
        height_m: f64,
        duration: Duration,
    ) -> Result<f64, ValidationError> {
        match kind {
            ActivityKind::Walking => self.calories_walking(steps, weight_kg, height_m, duration),
            ActivityKind::Running => self.calories_running(steps, weight_kg, height_m, duration),
        }
    }

    /// Resolve the record's activity label and compute the full result
    ///
    /// Distance and mean speed are derived from the height-based stride.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::UnknownActivity`] if the label is missing or not in
    ///   the vocabulary
    /// - any precondition failure of the selected calorie formula
    pub fn compute_activity(
        &self,
        record: &ActivityRecord,
        profile: &PersonProfile,
    ) -> Result<ActivityResult, ValidationError> {
        self.compute_activity_with_kind(record, profile)
            .map(|(_, result)| result)
    }

    /// Like [`Self::compute_activity`], also returning the resolved kind
    ///
    /// # Errors
    ///
    /// See [`Self::compute_activity`]
    pub fn compute_activity_with_kind(
        &self,
        record: &ActivityRecord,
        profile: &PersonProfile,
    ) -> Result<(ActivityKind, ActivityResult), ValidationError> {
        let distance_km = self.distance_km(record.steps, profile.height_m);
        let mean_speed_kmh = self.mean_speed_kmh(record.steps, profile.height_m, record.duration);

        let kind = self.vocabulary.resolve(record.activity_label())?;
        let calories_kcal = self.calories(
            kind,
            record.steps,
            profile.weight_kg,
            profile.height_m,
            record.duration,
        )?;

        Ok((
            kind,
            ActivityResult {
                distance_km,
                mean_speed_kmh,
                calories_kcal,
            },
        ))
    }

    /// Compute the result of a step-only record
    ///
    /// The activity is always walking. Distance uses the fixed step length,
    /// while mean speed and calories use the height-based stride.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if steps, weight, height or duration is not positive
    pub fn compute_day_steps(
        &self,
        record: &ActivityRecord,
        profile: &PersonProfile,
    ) -> Result<ActivityResult, ValidationError> {
        let calories_kcal = self.calories_walking(
            record.steps,
            profile.weight_kg,
            profile.height_m,
            record.duration,
        )?;

        Ok(ActivityResult {
            distance_km: self.step_distance_km(record.steps),
            mean_speed_kmh: self.mean_speed_kmh(record.steps, profile.height_m, record.duration),
            calories_kcal,
        })
    }
}

/// Fail fast on the first invalid input, checked in argument order
fn validate_inputs(
    steps: u64,
    weight_kg: f64,
    height_m: f64,
    duration: Duration,
) -> Result<(), ValidationError> {
    if steps == 0 {
        return Err(ValidationError::StepsInvalid { steps });
    }
    if !is_positive(weight_kg) {
        return Err(ValidationError::WeightInvalid { weight_kg });
    }
    if !is_positive(height_m) {
        return Err(ValidationError::HeightInvalid { height_m });
    }
    if duration.is_zero() {
        return Err(ValidationError::DurationInvalid {
            seconds: duration.as_secs_f64(),
        });
    }
    Ok(())
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
