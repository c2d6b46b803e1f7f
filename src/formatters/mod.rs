// ABOUTME: Output format abstraction for rendering activity reports
// ABOUTME: Supports localized plain-text summaries (default) and JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Reports coming out of the engine are plain numbers; this module turns them
//! into something a person or another program can read.
//!
//! ## Supported Formats
//!
//! - **Text**: Default format, localized multi-line summary
//! - **JSON**: Machine-readable, field names match the report structs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fitness_tracker::formatters::{format_output, Locale, OutputFormat};
//!
//! let output = format_output(&report, OutputFormat::Text, Locale::Ru)?;
//! print!("{}", output.data);
//! ```

mod summary;

pub use summary::{Locale, Summary};

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Localized human-readable summary (default)
    #[default]
    Text,
    /// JSON document
    Json,
}

impl OutputFormat {
    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Json => "application/json",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "Unknown output format: '{other}'. Valid options: text, json"
            )),
        }
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered data as a string
    pub data: String,
    /// The format used for rendering
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

impl From<FormatError> for fitness_tracker_core::errors::AppError {
    fn from(error: FormatError) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Render a report in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_output<T: Serialize + Summary>(
    data: &T,
    format: OutputFormat,
    locale: Locale,
) -> Result<FormattedOutput, FormatError> {
    let rendered = match format {
        OutputFormat::Text => data.summary(locale),
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: format!("JSON serialization failed: {e}"),
            format,
        })?,
    };

    Ok(FormattedOutput {
        data: rendered,
        format,
        content_type: format.content_type(),
    })
}
