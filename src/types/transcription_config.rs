use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::record::{string_field, FieldMap, Record};
use crate::types::errors::ValidationError;
use crate::types::lang_option::{LanguageCatalog, AUTO_DETECT};

/// Output file format of a transcription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Txt,
    Srt,
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn all() -> [OutputFormat; 4] {
        [
            OutputFormat::Txt,
            OutputFormat::Srt,
            OutputFormat::Json,
            OutputFormat::Markdown,
        ]
    }

    /// Wire representation, also the file extension without the dot.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Srt => "srt",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "md",
        }
    }

    /// Label shown in the format picker.
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Txt => "TXT",
            OutputFormat::Srt => "SRT",
            OutputFormat::Json => "JSON",
            OutputFormat::Markdown => "Markdown",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "txt" => Ok(OutputFormat::Txt),
            "srt" => Ok(OutputFormat::Srt),
            "json" => Ok(OutputFormat::Json),
            "md" => Ok(OutputFormat::Markdown),
            other => Err(ValidationError::UnknownOutputFormat(other.to_string())),
        }
    }
}

/// Job parameters chosen by the user for a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "FieldMap")]
pub struct TranscriptionConfig {
    pub language: String,
    pub output_format: String,
}

impl Record for TranscriptionConfig {
    fn from_fields(fields: &FieldMap) -> Self {
        Self {
            language: string_field(fields, "language"),
            output_format: string_field(fields, "outputFormat"),
        }
    }
}

impl From<FieldMap> for TranscriptionConfig {
    fn from(fields: FieldMap) -> Self {
        Self::from_fields(&fields)
    }
}

/// A configuration whose values have been checked against the closed sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    pub language: String,
    pub output_format: OutputFormat,
}

impl ValidatedConfig {
    /// Language handed to the recognizer; `None` requests auto-detection.
    pub fn recognizer_language(&self) -> Option<&str> {
        if self.language == AUTO_DETECT {
            None
        } else {
            Some(&self.language)
        }
    }
}

impl TranscriptionConfig {
    pub fn new(language: &str, output_format: OutputFormat) -> Self {
        Self {
            language: language.to_string(),
            output_format: output_format.as_str().to_string(),
        }
    }

    /// Auto-detected language written as plain text.
    pub fn recommended() -> Self {
        Self::new(AUTO_DETECT, OutputFormat::Txt)
    }

    pub fn output_format(&self) -> Result<OutputFormat, ValidationError> {
        self.output_format.parse()
    }

    /// Checks the language against `catalog` and the output format against
    /// the supported set.
    pub fn validate(&self, catalog: &LanguageCatalog) -> Result<ValidatedConfig, ValidationError> {
        if !catalog.contains(&self.language) {
            return Err(ValidationError::UnknownLanguage(self.language.clone()));
        }
        let output_format = self.output_format()?;
        Ok(ValidatedConfig {
            language: self.language.clone(),
            output_format,
        })
    }
}
