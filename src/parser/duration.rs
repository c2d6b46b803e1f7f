// ABOUTME: Duration literal grammar for activity records
// ABOUTME: Parses concatenated number+unit pairs such as "45m", "1h30m" or "1.5h"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Duration literals
//!
//! Grammar: `[+-]? (number unit)+` or the bare literal `0`, where `number` is
//! `digits`, `digits.digits`, `digits.` or `.digits` and `unit` is one of
//! `h`, `m`, `s`, `ms`, `us` (`µs`, `μs`) or `ns`. Pairs concatenate and add up.
//!
//! Negative and zero literals are syntactically valid but rejected as
//! non-positive, since an activity cannot take no time.

use fitness_tracker_core::errors::{ParseError, RecordField};
use std::time::Duration;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

/// Largest representable literal, roughly 292 years
const MAX_NANOS: u64 = i64::MAX as u64;

/// Parse a duration literal into a strictly positive [`Duration`]
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// - [`ParseError::BadDuration`] when the literal does not follow the grammar
///   or overflows
/// - [`ParseError::NonPositive`] when it parses to zero or a negative span
pub fn parse_duration(raw: &str) -> Result<Duration, ParseError> {
    let literal = raw.trim();
    let bad = |reason: &str| ParseError::bad_duration(literal, reason);

    if literal.is_empty() {
        return Err(bad("empty duration"));
    }

    let (negative, mut rest) = match literal.as_bytes()[0] {
        b'-' => (true, &literal[1..]),
        b'+' => (false, &literal[1..]),
        _ => (false, literal),
    };

    if rest == "0" {
        return Err(non_positive());
    }
    if rest.is_empty() {
        return Err(bad("missing number"));
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = take_digits(rest);
        let (fraction, after_fraction) = match after_whole.strip_prefix('.') {
            Some(tail) => take_digits(tail),
            None => ("", after_whole),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(bad("expected a number"));
        }

        let unit_len = after_fraction
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_fraction.len());
        let (unit, tail) = after_fraction.split_at(unit_len);
        if unit.is_empty() {
            return Err(bad("missing unit"));
        }
        let unit_nanos = unit_nanos(unit).ok_or_else(|| bad(&format!("unknown unit '{unit}'")))?;

        let pair_nanos = pair_nanos(whole, fraction, unit_nanos).ok_or_else(|| bad("overflow"))?;
        total = total
            .checked_add(pair_nanos)
            .filter(|nanos| *nanos <= MAX_NANOS)
            .ok_or_else(|| bad("overflow"))?;

        rest = tail;
    }

    if negative || total == 0 {
        return Err(non_positive());
    }
    Ok(Duration::from_nanos(total))
}

const fn non_positive() -> ParseError {
    ParseError::NonPositive {
        field: RecordField::Duration,
    }
}

/// Split the leading ASCII digits off `s`
fn take_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

/// Nanoseconds of one `number unit` pair, `None` on overflow
fn pair_nanos(whole: &str, fraction: &str, unit_nanos: u64) -> Option<u64> {
    let whole_value = if whole.is_empty() {
        0
    } else {
        whole.parse::<u64>().ok()?
    };
    let mut nanos = whole_value.checked_mul(unit_nanos)?;

    // Digits past nanosecond resolution of the unit cannot change the result
    let mut scale = unit_nanos;
    for digit in fraction.bytes() {
        scale /= 10;
        if scale == 0 {
            break;
        }
        nanos = nanos.checked_add(u64::from(digit - b'0') * scale)?;
    }
    Some(nanos)
}
