// ABOUTME: Integration tests for the physiology engine formulas and activity dispatch
// ABOUTME: Covers distance, mean speed, calorie coefficients and end-to-end records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitness_tracker::config::{ActivityVocabulary, PhysiologyConfig};
use fitness_tracker::errors::ValidationError;
use fitness_tracker::intelligence::PhysiologyEngine;
use fitness_tracker::models::{ActivityKind, ActivityRecord, PersonProfile};
use fitness_tracker::parser::{parse_steps_record, parse_training_record};
use std::thread;
use std::time::Duration;

const TOLERANCE: f64 = 1e-9;

fn engine() -> PhysiologyEngine {
    PhysiologyEngine::default()
}

#[test]
fn test_distance_matches_stride_formula() {
    let engine = engine();
    for steps in [0_u64, 1, 999, 6000, 250_000] {
        for height_m in [0.5, 1.6, 1.75, 2.1] {
            let expected = steps as f64 * 0.45 * height_m / 1000.0;
            assert!(
                (engine.distance_km(steps, height_m) - expected).abs() < TOLERANCE,
                "steps={steps} height={height_m}"
            );
        }
    }
}

#[test]
fn test_running_is_walking_over_coefficient() {
    let engine = engine();
    let durations = [
        Duration::from_secs(1),
        Duration::from_secs(25 * 60),
        Duration::from_secs(3 * 3600),
    ];

    for steps in [1_u64, 1000, 20_000] {
        for weight_kg in [45.0, 70.0, 120.5] {
            for height_m in [1.5, 1.75, 2.0] {
                for duration in durations {
                    let walking = engine
                        .calories_walking(steps, weight_kg, height_m, duration)
                        .unwrap();
                    let running = engine
                        .calories_running(steps, weight_kg, height_m, duration)
                        .unwrap();
                    assert!((running - walking / 0.5).abs() < TOLERANCE);
                }
            }
        }
    }
}

#[test]
fn test_mean_speed_on_zero_duration_is_zero() {
    let engine = engine();
    for steps in [0_u64, 1, 10_000] {
        for height_m in [0.1, 1.75, 3.0] {
            assert!(engine.mean_speed_kmh(steps, height_m, Duration::ZERO).abs() < f64::EPSILON);
        }
    }
}

#[test]
fn test_unknown_activity_returns_no_result() {
    let record = parse_training_record("1000,Плавание,30m").unwrap();
    let result = engine().compute_activity(&record, &PersonProfile::new(70.0, 1.75));

    assert_eq!(result, Err(ValidationError::unknown_activity("Плавание")));
}

#[test]
fn test_end_to_end_walking_training() {
    let record = parse_training_record("1000,Ходьба,25m0s").unwrap();
    let (kind, result) = engine()
        .compute_activity_with_kind(&record, &PersonProfile::new(70.0, 1.75))
        .unwrap();

    assert_eq!(kind, ActivityKind::Walking);
    assert!((result.distance_km - 0.7875).abs() < TOLERANCE);
    assert!((result.mean_speed_kmh - 1.89).abs() < TOLERANCE);
    // 70 x 1.89 x 25 / 60 x 0.5
    assert!((result.calories_kcal - 27.5625).abs() < TOLERANCE);
}

#[test]
fn test_end_to_end_running_training() {
    let record = parse_training_record("3000,Бег,30m").unwrap();
    let result = engine()
        .compute_activity(&record, &PersonProfile::new(80.0, 1.8))
        .unwrap();

    // 3000 x 0.45 x 1.8 / 1000 = 2.43 km over half an hour
    assert!((result.distance_km - 2.43).abs() < TOLERANCE);
    assert!((result.mean_speed_kmh - 4.86).abs() < TOLERANCE);
    assert!((result.calories_kcal - 80.0 * 4.86 * 30.0 / 60.0).abs() < TOLERANCE);
}

#[test]
fn test_end_to_end_day_steps() {
    let record = parse_steps_record("500,45m").unwrap();
    let result = engine()
        .compute_day_steps(&record, &PersonProfile::new(60.0, 1.6))
        .unwrap();

    assert!((result.distance_km - 0.325).abs() < TOLERANCE);
    assert!(result.calories_kcal > 0.0);
}

#[test]
fn test_validation_failures_name_the_field() {
    let engine = engine();
    let duration = Duration::from_secs(600);

    let cases = [
        (0, 70.0, 1.75, duration, "steps"),
        (100, 0.0, 1.75, duration, "weight"),
        (100, -70.0, 1.75, duration, "weight"),
        (100, 70.0, 0.0, duration, "height"),
        (100, 70.0, f64::NAN, duration, "height"),
        (100, 70.0, 1.75, Duration::ZERO, "duration"),
    ];

    for (steps, weight_kg, height_m, duration, field) in cases {
        for kind in ActivityKind::ALL {
            let err = engine
                .calories(kind, steps, weight_kg, height_m, duration)
                .unwrap_err();
            assert_eq!(err.field(), field, "{kind} with {err:?}");
        }
    }
}

#[test]
fn test_profile_is_validated_after_label() {
    let record = ActivityRecord::with_activity(100, "Бег", Duration::from_secs(60));
    assert_eq!(
        engine().compute_activity(&record, &PersonProfile::new(-1.0, 1.7)),
        Err(ValidationError::WeightInvalid { weight_kg: -1.0 })
    );

    let record = ActivityRecord::with_activity(100, "Танцы", Duration::from_secs(60));
    assert!(matches!(
        engine().compute_activity(&record, &PersonProfile::new(-1.0, 1.7)),
        Err(ValidationError::UnknownActivity { .. })
    ));
}

#[test]
fn test_english_vocabulary_engine() {
    let engine = PhysiologyEngine::new(PhysiologyConfig::default(), ActivityVocabulary::english());
    let profile = PersonProfile::new(70.0, 1.75);

    let record = parse_training_record("1000,Running,25m").unwrap();
    assert!(engine.compute_activity(&record, &profile).is_ok());

    let record = parse_training_record("1000,Бег,25m").unwrap();
    assert!(engine.compute_activity(&record, &profile).is_err());
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = engine();
    let profile = PersonProfile::new(70.0, 1.75);
    let record = parse_training_record("1000,Ходьба,25m0s").unwrap();
    let expected = engine.compute_activity(&record, &profile).unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| engine.compute_activity(&record, &profile).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
