// ABOUTME: Domain service layer wiring parser, physiology engine and formatters together
// ABOUTME: Provides entry points reusable from the CLI and from library callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! The parser and engine never log. Services are where failures get recorded
//! for diagnostics before being handed back to the caller.

/// Day-steps and training record processing
pub mod activity;

pub use activity::ActivityService;
