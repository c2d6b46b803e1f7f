// ABOUTME: Unit conversion constants for distance and time
// ABOUTME: Named conversion factors plus fractional hour/minute views of a Duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Minutes per hour
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Duration in fractional hours
#[must_use]
pub fn duration_hours(duration: Duration) -> f64 {
    duration.as_secs_f64() / SECONDS_PER_HOUR
}

/// Duration in fractional minutes
#[must_use]
pub fn duration_minutes(duration: Duration) -> f64 {
    duration.as_secs_f64() / SECONDS_PER_MINUTE
}
