// ABOUTME: Core types and constants for the fitness tracker
// ABOUTME: Foundation crate with error handling, physiology constants and activity models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Tracker Core
//!
//! Foundation crate providing shared types and constants for step-based
//! activity tracking. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `ParseError`, `ValidationError` and the unified `AppError`
//! - **constants**: Unit conversions and physiology coefficients
//! - **models**: Activity records, person profiles and computed results

/// Unified error handling system with typed parse and validation errors
pub mod errors;

/// Unit conversions and physiology coefficients
pub mod constants;

/// Core data models (`ActivityRecord`, `PersonProfile`, `ActivityResult`, `ActivityKind`)
pub mod models;
