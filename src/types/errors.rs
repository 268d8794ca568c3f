use thiserror::Error;

// === RecordError ===

/// Errors raised while building a record from its exchange representation.
///
/// Only the textual path can fail; field extraction from an already parsed
/// mapping never does.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The text is not JSON, or is JSON but not an object.
    #[error("Record parse error: {0}")]
    Parse(String),
    /// The record could not be written back to text.
    #[error("Record serialization error: {0}")]
    Serialization(String),
}

// === ValidationError ===

/// Errors raised when a raw wire value does not belong to its closed set,
/// or when a record breaks a lifecycle rule.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// The status string is not a known lifecycle state.
    #[error("Unknown file status: {0}")]
    UnknownStatus(String),
    /// The output format string is not a supported format.
    #[error("Unknown output format: {0}")]
    UnknownOutputFormat(String),
    /// The language code is not offered by the catalog.
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),
    /// Two options in one listing share a code.
    #[error("Duplicate language code: {0}")]
    DuplicateLanguageCode(String),
    /// The requested status change is not allowed from the current state.
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
    /// The record's fields contradict each other.
    #[error("Inconsistent file record: {0}")]
    Inconsistent(String),
}

// === FileError ===

/// Errors related to inspecting source files on disk.
#[derive(Debug, Error)]
pub enum FileError {
    /// The path does not exist.
    #[error("File not found: {0}")]
    NotFound(String),
    /// The path exists but is not a regular file.
    #[error("Not a regular file: {0}")]
    NotAFile(String),
    /// Reading file metadata failed.
    #[error("File I/O error: {0}")]
    Io(String),
}

// === FormatError ===

/// Errors related to rendering and writing transcription output.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The result could not be serialized.
    #[error("Output serialization error: {0}")]
    Serialization(String),
    /// Writing the output file failed.
    #[error("Output I/O error: {0}")]
    Io(String),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    Io(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    Serialization(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}
