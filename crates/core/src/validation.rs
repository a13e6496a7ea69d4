//! Field validators shared by every document type.
//!
//! Each validator returns [`CoreError::Validation`] with a message naming the
//! offending field, which the API layer maps to HTTP 400.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use regex::Regex;
use validator::ValidateEmail;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Chilean RUT: 7-8 digits, optional dash, then a digit or `k`/`K` check character.
pub const RUT_PATTERN: &str = r"^\d{7,8}-?[\dkK]$";

static RUT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(RUT_PATTERN).expect("valid regex"));

/// Naive formats accepted for timestamps, interpreted as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Unwrap a required field or report it as missing.
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("Field '{field}' is required")))
}

/// Check that `value` is one of the `allowed` strings.
pub fn validate_choice(field: &str, value: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "Invalid value '{value}' for field '{field}'. Must be one of: {}",
        allowed.join(", ")
    )))
}

/// Same as [`validate_choice`] for a field that may be absent.
pub fn validate_optional_choice(
    field: &str,
    value: Option<&str>,
    allowed: &[&str],
) -> Result<(), CoreError> {
    match value {
        Some(v) => validate_choice(field, v, allowed),
        None => Ok(()),
    }
}

/// Validate the format of a Chilean RUT.
pub fn validate_rut(value: &str) -> Result<(), CoreError> {
    if RUT_RE.is_match(value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Field 'rut' has an invalid format: '{value}'"
        )))
    }
}

/// Validate an email address.
pub fn validate_email(value: &str) -> Result<(), CoreError> {
    if value.validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Field 'email' is not a valid email address: '{value}'"
        )))
    }
}

/// Parse a client-supplied timestamp.
///
/// Accepts RFC 3339, a naive date-time (read as UTC) or a bare `YYYY-MM-DD`
/// date (midnight UTC).
pub fn parse_timestamp(field: &str, value: &str) -> Result<Timestamp, CoreError> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(CoreError::Validation(format!(
        "Field '{field}' is not a valid date: '{value}'"
    )))
}

/// Parse an optional timestamp field.
pub fn parse_optional_timestamp(
    field: &str,
    value: Option<&str>,
) -> Result<Option<Timestamp>, CoreError> {
    value.map(|v| parse_timestamp(field, v)).transpose()
}
