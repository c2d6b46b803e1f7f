// ABOUTME: Tests for tracker and logging configuration loaded from the environment
// ABOUTME: Validates overrides, parse failures and vocabulary validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitness_tracker::config::{
    ActivityVocabulary, ConfigError, TrackerConfig, RUNNING_LABEL_ENV, STEP_LENGTH_ENV,
    STRIDE_COEFFICIENT_ENV, WALKING_COEFFICIENT_ENV, WALKING_LABEL_ENV,
};
use fitness_tracker::errors::{AppError, ErrorCode};
use fitness_tracker::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const TRACKER_VARS: [&str; 5] = [
    STRIDE_COEFFICIENT_ENV,
    STEP_LENGTH_ENV,
    WALKING_COEFFICIENT_ENV,
    WALKING_LABEL_ENV,
    RUNNING_LABEL_ENV,
];

fn clear_tracker_env() {
    for var in TRACKER_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_overrides() {
    clear_tracker_env();

    let config = TrackerConfig::from_env().unwrap();
    assert_eq!(config, TrackerConfig::default());
    assert_eq!(config.vocabulary, ActivityVocabulary::russian());
}

#[test]
#[serial]
fn test_numeric_and_label_overrides() {
    clear_tracker_env();
    env::set_var(STRIDE_COEFFICIENT_ENV, "0.5");
    env::set_var(STEP_LENGTH_ENV, " 0.7 ");
    env::set_var(WALKING_COEFFICIENT_ENV, "0.4");
    env::set_var(WALKING_LABEL_ENV, "Walking");
    env::set_var(RUNNING_LABEL_ENV, "Running");

    let config = TrackerConfig::from_env().unwrap();
    clear_tracker_env();

    assert!((config.physiology.stride_length_coefficient - 0.5).abs() < f64::EPSILON);
    assert!((config.physiology.step_length_m - 0.7).abs() < f64::EPSILON);
    assert!((config.physiology.walking_calories_coefficient - 0.4).abs() < f64::EPSILON);
    assert_eq!(config.vocabulary, ActivityVocabulary::english());
}

#[test]
#[serial]
fn test_unparsable_override_is_rejected() {
    clear_tracker_env();
    env::set_var(STRIDE_COEFFICIENT_ENV, "tall");

    let result = TrackerConfig::from_env();
    clear_tracker_env();

    assert_eq!(
        result,
        Err(ConfigError::Parse(format!("Invalid {STRIDE_COEFFICIENT_ENV}")))
    );
}

#[test]
#[serial]
fn test_non_positive_override_is_rejected() {
    clear_tracker_env();
    env::set_var(WALKING_COEFFICIENT_ENV, "-0.5");

    let result = TrackerConfig::from_env();
    clear_tracker_env();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_identical_labels_are_rejected() {
    clear_tracker_env();
    env::set_var(WALKING_LABEL_ENV, "Бег");

    let error = TrackerConfig::from_env().unwrap_err();
    clear_tracker_env();

    assert!(matches!(error, ConfigError::InvalidVocabulary(_)));
    let app_error = AppError::from(error);
    assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("RUST_LOG", "fitness_tracker=trace");
    env::set_var("SERVICE_NAME", "pedometer");

    let config = LoggingConfig::from_env();

    env::remove_var("LOG_FORMAT");
    env::remove_var("RUST_LOG");
    env::remove_var("SERVICE_NAME");

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, "fitness_tracker=trace");
    assert_eq!(config.service_name, "pedometer");
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_logging_config_falls_back_to_compact() {
    env::set_var("LOG_FORMAT", "fancy");
    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");

    assert_eq!(config.format, LogFormat::Compact);
}
