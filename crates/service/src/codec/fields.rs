//! Field-level helpers shared by the entity codecs.
//!
//! Absent and `null` are treated alike everywhere: optional readers return
//! `None`, required readers fail with [`DecodeError::MissingField`].

use chrono::NaiveDate;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use super::DecodeError;

/// `yyyy/MM/dd` in chrono syntax.
pub const DATE_PATTERN: &str = "%Y/%m/%d";

#[derive(Debug, Error)]
pub enum DateParseError {
    #[error("expected yyyy/MM/dd")]
    Pattern,
    #[error(transparent)]
    Calendar(#[from] chrono::ParseError),
}

/// Parse a zero-padded `yyyy/MM/dd` date.
///
/// Chrono alone accepts unpadded months and days, so the shape is checked first.
pub fn parse_date(text: &str) -> Result<NaiveDate, DateParseError> {
    let bytes = text.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'/',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(DateParseError::Pattern);
    }
    Ok(NaiveDate::parse_from_str(text, DATE_PATTERN)?)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_PATTERN).to_string()
}

pub fn object(value: &Value) -> Result<&Map<String, Value>, DecodeError> {
    value.as_object().ok_or(DecodeError::NotAnObject)
}

fn present<'a>(obj: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    obj.get(field).filter(|v| !v.is_null())
}

fn int(value: &Value, field: &'static str) -> Result<i32, DecodeError> {
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or(DecodeError::InvalidType { field, expected: "a 32-bit integer" })
}

/// Entity identity: absent, `null` and `0` all mean "not persisted yet".
pub fn optional_id(obj: &Map<String, Value>, field: &'static str) -> Result<Option<i32>, DecodeError> {
    match present(obj, field) {
        None => Ok(None),
        Some(v) => int(v, field).map(|id| (id != 0).then_some(id)),
    }
}

pub fn required_int(obj: &Map<String, Value>, field: &'static str) -> Result<i32, DecodeError> {
    present(obj, field).ok_or(DecodeError::MissingField(field)).and_then(|v| int(v, field))
}

pub fn optional_str(obj: &Map<String, Value>, field: &'static str) -> Result<Option<String>, DecodeError> {
    match present(obj, field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(DecodeError::InvalidType { field, expected: "a string" }),
    }
}

pub fn required_str(obj: &Map<String, Value>, field: &'static str) -> Result<String, DecodeError> {
    optional_str(obj, field)?.ok_or(DecodeError::MissingField(field))
}

pub fn required_object<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Map<String, Value>, DecodeError> {
    present(obj, field)
        .ok_or(DecodeError::MissingField(field))?
        .as_object()
        .ok_or(DecodeError::InvalidType { field, expected: "an object" })
}

/// Required date field in `yyyy/MM/dd` form. Parse failures are logged before being returned.
pub fn required_date(obj: &Map<String, Value>, field: &'static str) -> Result<NaiveDate, DecodeError> {
    let text = required_str(obj, field)?;
    parse_date(&text).map_err(|source| {
        warn!(field, value = %text, error = %source, "date field rejected");
        DecodeError::InvalidDate { field, value: text, source }
    })
}
