// ABOUTME: Core data models for step-based activity tracking
// ABOUTME: Re-exports ActivityRecord, PersonProfile, ActivityResult and ActivityKind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! No model outlives a single computation: records are parsed, results are
//! derived, and both are discarded by the caller.
//!
//! - `ActivityRecord`: one parsed exercise session
//! - `PersonProfile`: weight and height supplied per call
//! - `ActivityResult`: distance, mean speed and calories derived from the two
//! - `ActivityKind`: closed set of supported activity types
//! - `DayStepsReport`, `TrainingReport`: results paired with their record for display

mod activity;
mod kind;
mod report;

pub use activity::{ActivityRecord, ActivityResult, PersonProfile};
pub use kind::ActivityKind;
pub use report::{DayStepsReport, TrainingReport};
