//! Field rules shared by segment builders
//!
//! Each rule names the segment and element it guards so the error can be
//! traced back to the input record.

use crate::{Error, Result};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());
static D8: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]{8})$").unwrap());
static RD8: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]{8})-([0-9]{8})$").unwrap());

/// Unwrap a required value
///
/// # Errors
///
/// Returns [`Error::RequiredFieldMissing`] when the value is `None`.
pub fn require<T>(segment: &str, field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| Error::required(segment, field))
}

/// Unwrap a required text value, treating blank text as missing
///
/// # Errors
///
/// Returns [`Error::RequiredFieldMissing`] when the value is `None` or blank.
pub fn require_text(segment: &str, field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(Error::required(segment, field)),
    }
}

/// Check a value's length in characters
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] when the length is outside `min..=max`.
pub fn check_length(segment: &str, field: &str, value: &str, min: usize, max: usize) -> Result<()> {
    let length = value.chars().count();
    if length < min || length > max {
        return Err(Error::length(segment, field, length, min, max));
    }
    Ok(())
}

/// Check an optional value's length, ignoring `None`
///
/// # Errors
///
/// Same as [`check_length`].
pub fn check_optional_length(
    segment: &str,
    field: &str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<()> {
    value.map_or(Ok(()), |v| check_length(segment, field, v, min, max))
}

/// Pad a value with trailing spaces to a fixed width
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] when the value is longer than `width`.
pub fn pad_right(segment: &str, field: &str, value: &str, width: usize) -> Result<String> {
    check_length(segment, field, value, 0, width)?;
    Ok(format!("{value:<width$}"))
}

/// Format a number with leading zeros to a fixed width
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] when the number has more digits than `width`.
pub fn zero_pad(segment: &str, field: &str, number: u64, width: usize) -> Result<String> {
    let formatted = format!("{number:0width$}");
    if formatted.len() > width {
        return Err(Error::length(segment, field, formatted.len(), width, width));
    }
    Ok(formatted)
}

/// Check that a value is all digits with a length in `min..=max`
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] for non-digits and
/// [`Error::InvalidLength`] for a bad length.
pub fn check_numeric(
    segment: &str,
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<()> {
    if !DIGITS.is_match(value) {
        return Err(Error::invalid(
            segment,
            field,
            format!("must be numeric, got '{value}'"),
        ));
    }
    check_length(segment, field, value, min, max)
}

/// Check that a value holds exactly one character
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] otherwise.
pub fn check_single_char(segment: &str, field: &str, value: &str) -> Result<()> {
    check_length(segment, field, value, 1, 1)
}

/// Check a date or date range against its DTP02 format qualifier
///
/// `D8` expects `CCYYMMDD`; `RD8` expects `CCYYMMDD-CCYYMMDD` with the start
/// not after the end.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] when the value does not match the format,
/// is not a calendar date, or the format is not a date format.
pub fn check_date_period(segment: &str, field: &str, format: &str, value: &str) -> Result<()> {
    let mismatch = || {
        Error::invalid(
            segment,
            field,
            format!("'{value}' does not match format {format}"),
        )
    };

    match format {
        "D8" => {
            let caps = D8.captures(value).ok_or_else(mismatch)?;
            parse_ccyymmdd(segment, field, &caps[1])?;
        }
        "RD8" => {
            let caps = RD8.captures(value).ok_or_else(mismatch)?;
            let start = parse_ccyymmdd(segment, field, &caps[1])?;
            let end = parse_ccyymmdd(segment, field, &caps[2])?;
            if start > end {
                return Err(Error::invalid(
                    segment,
                    field,
                    format!("range '{value}' ends before it starts"),
                ));
            }
        }
        other => {
            return Err(Error::invalid(
                segment,
                field,
                format!("unsupported date format qualifier {other}"),
            ));
        }
    }
    Ok(())
}

fn parse_ccyymmdd(segment: &str, field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y%m%d")
        .map_err(|e| Error::invalid(segment, field, format!("'{value}' is not a valid date: {e}")))
}

/// Format a date as `CCYYMMDD`
#[must_use]
pub fn format_ccyymmdd(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Format a date as `YYMMDD` (ISA09)
#[must_use]
pub fn format_yymmdd(date: NaiveDate) -> String {
    date.format("%y%m%d").to_string()
}

/// Format a time as `HHMM`
#[must_use]
pub fn format_hhmm(time: NaiveTime) -> String {
    time.format("%H%M").to_string()
}

/// Format a date range as `CCYYMMDD-CCYYMMDD`
#[must_use]
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{}-{}", format_ccyymmdd(start), format_ccyymmdd(end))
}
