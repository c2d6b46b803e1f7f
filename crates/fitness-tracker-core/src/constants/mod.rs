// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for unit conversion and step-based physiology estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion and measurement constants
pub mod units;

/// Stride, step length and calorie coefficients
pub mod physiology;

/// Record delimiter and field layout of textual activity records
pub mod record {
    /// Field separator in textual activity records
    pub const FIELD_DELIMITER: char = ',';

    /// Field count of a step-only record (`steps,duration`)
    pub const STEPS_ONLY_FIELDS: usize = 2;

    /// Field count of a full training record (`steps,activity,duration`)
    pub const TRAINING_FIELDS: usize = 3;
}
