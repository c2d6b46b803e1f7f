// ABOUTME: Record parser decoding comma-delimited activity records into typed fields
// ABOUTME: Supports the step-only form (steps,duration) and the training form (steps,activity,duration)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Activity record parsing
//!
//! Records come in two shapes depending on the caller:
//!
//! | Form        | Layout                      | Example             |
//! |-------------|-----------------------------|---------------------|
//! | `StepsOnly` | `steps,duration`            | `500,45m`           |
//! | `Training`  | `steps,activity,duration`   | `1000,Ходьба,25m0s` |
//!
//! Parsing is a pure function of the input text. The activity label is
//! trimmed and passed through untouched; whether it names a known activity is
//! decided later by the physiology engine.

mod duration;

pub use duration::parse_duration;

use fitness_tracker_core::constants::record::{
    FIELD_DELIMITER, STEPS_ONLY_FIELDS, TRAINING_FIELDS,
};
use fitness_tracker_core::errors::{ParseError, RecordField};
use fitness_tracker_core::models::ActivityRecord;

/// Record shape expected by a parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordForm {
    /// `steps,duration`
    StepsOnly,
    /// `steps,activity,duration`
    Training,
}

impl RecordForm {
    /// Number of delimited fields this form requires
    #[must_use]
    pub const fn field_count(&self) -> usize {
        match self {
            Self::StepsOnly => STEPS_ONLY_FIELDS,
            Self::Training => TRAINING_FIELDS,
        }
    }
}

/// Decoder for one record form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordParser {
    form: RecordForm,
}

impl RecordParser {
    /// Create a parser for the given record form
    #[must_use]
    pub const fn new(form: RecordForm) -> Self {
        Self { form }
    }

    /// Parser for `steps,duration` records
    #[must_use]
    pub const fn steps_only() -> Self {
        Self::new(RecordForm::StepsOnly)
    }

    /// Parser for `steps,activity,duration` records
    #[must_use]
    pub const fn training() -> Self {
        Self::new(RecordForm::Training)
    }

    /// Record form this parser accepts
    #[must_use]
    pub const fn form(&self) -> RecordForm {
        self.form
    }

    /// Decode `text` into an [`ActivityRecord`]
    ///
    /// # Errors
    ///
    /// - [`ParseError::FieldCount`] if the field count does not match the form
    /// - [`ParseError::EmptyField`], [`ParseError::NotANumber`] or
    ///   [`ParseError::NonPositive`] for a bad step count
    /// - [`ParseError::BadDuration`] or [`ParseError::NonPositive`] for a bad
    ///   duration literal
    pub fn parse(&self, text: &str) -> Result<ActivityRecord, ParseError> {
        let fields: Vec<&str> = text.split(FIELD_DELIMITER).collect();

        match (self.form, fields.as_slice()) {
            (RecordForm::StepsOnly, [steps, duration]) => {
                let steps = parse_steps(steps)?;
                let duration = parse_duration(duration)?;
                Ok(ActivityRecord::new(steps, duration))
            }
            (RecordForm::Training, [steps, activity, duration]) => {
                let steps = parse_steps(steps)?;
                let duration = parse_duration(duration)?;
                Ok(ActivityRecord::with_activity(
                    steps,
                    activity.trim(),
                    duration,
                ))
            }
            (form, _) => Err(ParseError::field_count(form.field_count(), fields.len())),
        }
    }
}

/// Parse a `steps,duration` record
///
/// # Errors
///
/// See [`RecordParser::parse`]
pub fn parse_steps_record(text: &str) -> Result<ActivityRecord, ParseError> {
    RecordParser::steps_only().parse(text)
}

/// Parse a `steps,activity,duration` record
///
/// # Errors
///
/// See [`RecordParser::parse`]
pub fn parse_training_record(text: &str) -> Result<ActivityRecord, ParseError> {
    RecordParser::training().parse(text)
}

fn parse_steps(raw: &str) -> Result<u64, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyField {
            field: RecordField::Steps,
        });
    }

    let steps: i64 = trimmed.parse().map_err(|_| ParseError::NotANumber {
        field: RecordField::Steps,
        value: trimmed.to_owned(),
    })?;
    if steps <= 0 {
        return Err(ParseError::NonPositive {
            field: RecordField::Steps,
        });
    }
    Ok(steps.unsigned_abs())
}
