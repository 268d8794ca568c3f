use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::record::{string_field, FieldMap, Record};
use crate::types::errors::ValidationError;

/// Code meaning "let the recognizer detect the language".
pub const AUTO_DETECT: &str = "auto";

const BUILTIN_LANGUAGES: &[(&str, &str)] = &[
    (AUTO_DETECT, "Auto-detect"),
    ("ru", "Russian"),
    ("en", "English"),
    ("de", "German"),
    ("fr", "French"),
    ("es", "Spanish"),
    ("zh", "Chinese"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("uk", "Ukrainian"),
    ("pl", "Polish"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("tr", "Turkish"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
];

/// One selectable transcription language.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "FieldMap")]
pub struct LangOption {
    pub code: String,
    pub name: String,
}

impl Record for LangOption {
    fn from_fields(fields: &FieldMap) -> Self {
        Self {
            code: string_field(fields, "code"),
            name: string_field(fields, "name"),
        }
    }
}

impl From<FieldMap> for LangOption {
    fn from(fields: FieldMap) -> Self {
        Self::from_fields(&fields)
    }
}

impl LangOption {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }
}

/// An ordered listing of language options with unique codes.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageCatalog {
    options: Vec<LangOption>,
}

impl LanguageCatalog {
    /// The languages offered by the desktop UI, auto-detect first.
    pub fn builtin() -> Self {
        Self {
            options: BUILTIN_LANGUAGES
                .iter()
                .map(|(code, name)| LangOption::new(code, name))
                .collect(),
        }
    }

    /// Builds a catalog, rejecting listings that repeat a code.
    pub fn from_options(options: Vec<LangOption>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::new();
        for option in &options {
            if !seen.insert(option.code.as_str()) {
                return Err(ValidationError::DuplicateLanguageCode(option.code.clone()));
            }
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &[LangOption] {
        &self.options
    }

    pub fn find(&self, code: &str) -> Option<&LangOption> {
        self.options.iter().find(|o| o.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
