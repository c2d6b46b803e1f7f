// ABOUTME: Physiology coefficients for step-based distance and calorie estimation
// ABOUTME: Stride length from height, fixed step length, and walking calorie multiplier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Step-based physiology constants
//!
//! These are the compile-time defaults. The root crate wraps them in a
//! `PhysiologyConfig` that may be overridden from the environment.

/// Fraction of body height used as the length of a single stride
///
/// Stride length (m) = `STRIDE_LENGTH_COEFFICIENT` x height (m)
pub const STRIDE_LENGTH_COEFFICIENT: f64 = 0.45;

/// Average step length in meters, used when no height is involved
pub const AVERAGE_STEP_LENGTH_M: f64 = 0.65;

/// Multiplier applied to the running calorie formula for walking
///
/// Walking burns roughly half the energy of running at the same
/// weight, mean speed and duration.
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;
