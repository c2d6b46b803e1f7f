// ABOUTME: Activity service turning raw records into reports and localized summaries
// ABOUTME: Parses, computes, formats, and logs every failure before returning it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::TrackerConfig;
use crate::formatters::{Locale, Summary};
use crate::intelligence::PhysiologyEngine;
use crate::parser::RecordParser;
use fitness_tracker_core::errors::{AppError, AppResult};
use fitness_tracker_core::models::{DayStepsReport, PersonProfile, TrainingReport};
use std::time::Duration;
use tracing::{debug, warn};

/// Processes day-steps and training records for one person at a time
#[derive(Debug, Clone, Default)]
pub struct ActivityService {
    engine: PhysiologyEngine,
    locale: Locale,
}

impl ActivityService {
    /// Create a service around an engine, rendering summaries in `locale`
    #[must_use]
    pub const fn new(engine: PhysiologyEngine, locale: Locale) -> Self {
        Self { engine, locale }
    }

    /// Create a service from a loaded configuration
    #[must_use]
    pub fn from_config(config: TrackerConfig, locale: Locale) -> Self {
        Self::new(PhysiologyEngine::from_config(config), locale)
    }

    /// Parse a `steps,duration` record and compute walking distance and calories
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not parse or the profile is invalid
    pub fn day_steps(&self, data: &str, profile: &PersonProfile) -> AppResult<DayStepsReport> {
        let record = RecordParser::steps_only()
            .parse(data)
            .map_err(|e| log_failure("day_steps", data, e.into()))?;
        let result = self
            .engine
            .compute_day_steps(&record, profile)
            .map_err(|e| log_failure("day_steps", data, e.into()))?;

        debug!(
            record.steps = record.steps,
            result.distance_km = result.distance_km,
            result.calories_kcal = result.calories_kcal,
            "Day steps computed"
        );
        Ok(DayStepsReport::new(&record, &result))
    }

    /// Parse a `steps,activity,duration` record and compute the full training result
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not parse, the activity label is
    /// unknown, or the profile is invalid
    pub fn training(&self, data: &str, profile: &PersonProfile) -> AppResult<TrainingReport> {
        let record = RecordParser::training()
            .parse(data)
            .map_err(|e| log_failure("training", data, e.into()))?;
        let (kind, result) = self
            .engine
            .compute_activity_with_kind(&record, profile)
            .map_err(|e| log_failure("training", data, e.into()))?;

        debug!(
            record.steps = record.steps,
            record.activity = %kind,
            result.distance_km = result.distance_km,
            result.mean_speed_kmh = result.mean_speed_kmh,
            result.calories_kcal = result.calories_kcal,
            "Training computed"
        );
        Ok(TrainingReport::new(&record, kind, &result))
    }

    /// Localized day-steps summary, or an empty string if anything fails
    ///
    /// Failures are logged, not returned.
    #[must_use]
    pub fn day_action_info(&self, data: &str, weight_kg: f64, height_m: f64) -> String {
        self.day_steps(data, &PersonProfile::new(weight_kg, height_m))
            .map(|report| report.summary(self.locale))
            .unwrap_or_default()
    }

    /// Localized training summary
    ///
    /// # Errors
    ///
    /// Returns the parse or validation failure after logging it
    pub fn training_info(&self, data: &str, weight_kg: f64, height_m: f64) -> AppResult<String> {
        self.training(data, &PersonProfile::new(weight_kg, height_m))
            .map(|report| report.summary(self.locale))
    }

    /// Calories for an explicit activity kind, bypassing record parsing
    ///
    /// # Errors
    ///
    /// Returns an error if the activity name is unknown or an input is not positive
    pub fn calories(
        &self,
        activity: &str,
        steps: u64,
        profile: &PersonProfile,
        duration: Duration,
    ) -> AppResult<f64> {
        let kind = activity
            .parse()
            .map_err(|e| log_failure("calories", activity, AppError::from(e)))?;
        self.engine
            .calories(kind, steps, profile.weight_kg, profile.height_m, duration)
            .map_err(|e| log_failure("calories", activity, e.into()))
    }
}

/// Record a failure for diagnostics and pass it through
fn log_failure(operation: &'static str, input: &str, error: AppError) -> AppError {
    warn!(
        operation,
        input,
        error.code = %error.code,
        error.message = %error.message,
        "Activity processing failed"
    );
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitness_tracker_core::errors::{ErrorCode, ParseError, ValidationError};
    use fitness_tracker_core::models::ActivityKind;

    #[test]
    fn test_day_steps_report() {
        let service = ActivityService::default();
        let report = service
            .day_steps("500,45m", &PersonProfile::new(60.0, 1.6))
            .unwrap();
        assert_eq!(report.steps, 500);
        assert!((report.distance_km - 0.325).abs() < 1e-9);
        assert!(report.calories_kcal > 0.0);
    }

    #[test]
    fn test_training_report() {
        let service = ActivityService::default();
        let report = service
            .training("1000,Ходьба,25m0s", &PersonProfile::new(70.0, 1.75))
            .unwrap();
        assert_eq!(report.activity, ActivityKind::Walking);
        assert_eq!(report.label, "Ходьба");
        assert!((report.calories_kcal - 27.5625).abs() < 1e-9);
    }

    #[test]
    fn test_day_action_info_is_empty_on_failure() {
        let service = ActivityService::default();
        assert_eq!(service.day_action_info("500", 60.0, 1.6), "");
        assert_eq!(service.day_action_info("500,45m", -60.0, 1.6), "");
        assert!(!service.day_action_info("500,45m", 60.0, 1.6).is_empty());
    }

    #[test]
    fn test_training_info_returns_typed_errors() {
        let service = ActivityService::default();

        let err = service.training_info("1000,Ходьба", 70.0, 1.75).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(err.parse_error(), Some(&ParseError::field_count(3, 2)));

        let err = service
            .training_info("1000,Плавание,1h", 70.0, 1.75)
            .unwrap_err();
        assert_eq!(
            err.validation_error(),
            Some(&ValidationError::unknown_activity("Плавание"))
        );
    }

    #[test]
    fn test_calories_by_activity_name() {
        let service = ActivityService::default();
        let profile = PersonProfile::new(70.0, 1.75);
        let duration = Duration::from_secs(25 * 60);

        let walking = service.calories("walking", 1000, &profile, duration).unwrap();
        let running = service.calories("running", 1000, &profile, duration).unwrap();
        assert!((running - 2.0 * walking).abs() < 1e-9);

        let err = service
            .calories("swimming", 1000, &profile, duration)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
}
