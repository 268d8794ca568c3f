use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::{integer_field, number_field, string_field, FieldMap, Record};

/// A single recognized span of speech, with times in seconds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "FieldMap")]
pub struct Segment {
    pub index: i64,
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl Record for Segment {
    fn from_fields(fields: &FieldMap) -> Self {
        Self {
            index: integer_field(fields, "index"),
            start: number_field(fields, "start"),
            end: number_field(fields, "end"),
            text: string_field(fields, "text"),
        }
    }
}

impl From<FieldMap> for Segment {
    fn from(fields: FieldMap) -> Self {
        Self::from_fields(&fields)
    }
}

/// All segments recognized for one source file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "FieldMap")]
pub struct TranscriptionResult {
    pub file_path: String,
    pub language: String,
    pub segments: Vec<Segment>,
}

impl Record for TranscriptionResult {
    fn from_fields(fields: &FieldMap) -> Self {
        // Entries that are not objects cannot be segments and are dropped.
        let segments = fields
            .get("segments")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_object)
                    .map(Segment::from_fields)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            file_path: string_field(fields, "filePath"),
            language: string_field(fields, "language"),
            segments,
        }
    }
}

impl From<FieldMap> for TranscriptionResult {
    fn from(fields: FieldMap) -> Self {
        Self::from_fields(&fields)
    }
}
