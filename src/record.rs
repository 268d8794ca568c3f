//! Record construction contract shared by every type that crosses the
//! backend/UI boundary.
//!
//! A record is built either from JSON text or from an already parsed field
//! mapping. Field extraction follows a silent-default policy: an absent or
//! wrongly typed field becomes the zero value of its declared type, with no
//! coercion between strings and numbers. Only the textual path can fail.

use serde::Serialize;
use serde_json::Value;

use crate::types::errors::RecordError;

/// Loosely typed key/value mapping used as the exchange representation.
pub type FieldMap = serde_json::Map<String, Value>;

/// Where a record is constructed from.
#[derive(Debug, Clone, Copy)]
pub enum RecordSource<'a> {
    /// Serialized JSON text that must parse into an object.
    Text(&'a str),
    /// An already structured mapping.
    Fields(&'a FieldMap),
}

/// Trait implemented by every boundary record.
pub trait Record: Sized + Serialize {
    /// Builds the record field by field. Never fails.
    fn from_fields(fields: &FieldMap) -> Self;

    /// Parses JSON text into a mapping, then builds the record from it.
    fn parse_from_text(text: &str) -> Result<Self, RecordError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| RecordError::Parse(e.to_string()))?;
        match value {
            Value::Object(fields) => Ok(Self::from_fields(&fields)),
            other => Err(RecordError::Parse(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    fn construct(source: RecordSource<'_>) -> Result<Self, RecordError> {
        match source {
            RecordSource::Text(text) => Self::parse_from_text(text),
            RecordSource::Fields(fields) => Ok(Self::from_fields(fields)),
        }
    }

    /// Builds the record, treating a missing source as an empty mapping.
    fn create_from(source: Option<&FieldMap>) -> Self {
        match source {
            Some(fields) => Self::from_fields(fields),
            None => Self::from_fields(&FieldMap::new()),
        }
    }

    /// Builds the record from a JSON value received over the wire.
    ///
    /// A string is parsed as text and an object is read as fields; any other
    /// value cannot describe a record.
    fn from_value(value: &Value) -> Result<Self, RecordError> {
        match value {
            Value::String(text) => Self::construct(RecordSource::Text(text)),
            Value::Object(fields) => Self::construct(RecordSource::Fields(fields)),
            other => Err(RecordError::Parse(format!(
                "expected a JSON object or text, got {}",
                json_kind(other)
            ))),
        }
    }

    /// Serializes the record with its wire field names.
    fn to_text(&self) -> Result<String, RecordError> {
        serde_json::to_string(self).map_err(|e| RecordError::Serialization(e.to_string()))
    }
}

/// Reads a string field, defaulting to `""`.
pub fn string_field(fields: &FieldMap, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

/// Reads a numeric field as `f64`, defaulting to `0.0`.
pub fn number_field(fields: &FieldMap, key: &str) -> f64 {
    fields.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Reads an integral numeric field, defaulting to `0`.
///
/// Fractional numbers are not truncated; they count as wrongly typed.
pub fn integer_field(fields: &FieldMap, key: &str) -> i64 {
    fields.get(key).and_then(Value::as_i64).unwrap_or(0)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
