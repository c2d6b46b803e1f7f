// ABOUTME: Main library entry point for the step-count fitness tracker
// ABOUTME: Parses activity records and estimates distance, speed and calories burned
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Tracker
//!
//! Turns compact activity records reported by a step counter into physical
//! quantities: distance covered, mean speed and calories burned.
//!
//! ## Record Forms
//!
//! - `steps,duration` (for example `"500,45m"`): a day of walking
//! - `steps,activity,duration` (for example `"1000,Ходьба,25m0s"`): a training session
//!
//! ## Architecture
//!
//! - **Parser**: text record to [`models::ActivityRecord`], typed failures
//! - **Intelligence**: the [`intelligence::PhysiologyEngine`] formulas
//! - **Formatters**: localized text and JSON rendering of reports
//! - **Services**: parse, compute and render in one call, logging failures
//! - **Config**: coefficients and activity labels with environment overrides
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitness_tracker::config::TrackerConfig;
//! use fitness_tracker::errors::AppResult;
//! use fitness_tracker::formatters::Locale;
//! use fitness_tracker::services::ActivityService;
//!
//! fn main() -> AppResult<()> {
//!     let config = TrackerConfig::from_env()?;
//!     let service = ActivityService::from_config(config, Locale::Ru);
//!
//!     print!("{}", service.training_info("1000,Ходьба,25m0s", 70.0, 1.75)?);
//!     Ok(())
//! }
//! ```

/// Tracker configuration and activity vocabulary
pub mod config;

/// Output rendering in text and JSON
pub mod formatters;

/// Distance, speed and calorie formulas
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Activity record parsing
pub mod parser;

/// Parse, compute and render pipelines
pub mod services;

// Re-export core crate modules so callers depend on one crate
pub use fitness_tracker_core::{constants, errors, models};
