// ABOUTME: Intelligence module for step-based activity analysis
// ABOUTME: Hosts the physiology engine computing distance, speed and calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Activity intelligence
//!
//! Currently a single engine: [`PhysiologyEngine`] turns a parsed record and a
//! person profile into distance, mean speed and calories.

/// Distance, mean speed and calorie calculations
pub mod physiology;

pub use physiology::PhysiologyEngine;
