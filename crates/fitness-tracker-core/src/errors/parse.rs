// ABOUTME: Structural errors raised while decoding a textual activity record
// ABOUTME: Field count, empty field, non-numeric, malformed duration and non-positive values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use thiserror::Error;

/// Record field a parse error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    /// Step count (first field)
    Steps,
    /// Elapsed duration literal (last field)
    Duration,
}

impl RecordField {
    /// Field name as used in error messages
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::Duration => "duration",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural or syntactic failure of an input record
///
/// Raised before any computation takes place. A record that fails to parse is
/// never constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Record does not split into the expected number of fields
    #[error("invalid field count: expected {expected}, got {actual}")]
    FieldCount {
        /// Field count required by the record form
        expected: usize,
        /// Field count actually found after splitting on the delimiter
        actual: usize,
    },

    /// Field is empty after trimming whitespace
    #[error("{field} field is empty")]
    EmptyField {
        /// Which field was empty
        field: RecordField,
    },

    /// Field is not an integer
    #[error("cannot parse {field} value '{value}' as a number")]
    NotANumber {
        /// Which field failed to parse
        field: RecordField,
        /// Raw (trimmed) field text
        value: String,
    },

    /// Duration literal does not follow the `<number><unit>...` grammar
    #[error("invalid duration '{value}': {reason}")]
    BadDuration {
        /// Raw (trimmed) duration literal
        value: String,
        /// What is wrong with the literal
        reason: String,
    },

    /// Numeric field parsed but is zero or negative
    #[error("{field} must be greater than zero")]
    NonPositive {
        /// Which field was not positive
        field: RecordField,
    },
}

impl ParseError {
    /// Create a field count error
    #[must_use]
    pub const fn field_count(expected: usize, actual: usize) -> Self {
        Self::FieldCount { expected, actual }
    }

    /// Create a malformed duration error
    #[must_use]
    pub fn bad_duration(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BadDuration {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Field the error refers to, if any
    #[must_use]
    pub const fn field(&self) -> Option<RecordField> {
        match self {
            Self::FieldCount { .. } => None,
            Self::EmptyField { field }
            | Self::NotANumber { field, .. }
            | Self::NonPositive { field } => Some(*field),
            Self::BadDuration { .. } => Some(RecordField::Duration),
        }
    }
}
