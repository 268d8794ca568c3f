use serde::{Deserialize, Serialize};

use super::transcription_config::TranscriptionConfig;

/// Top-level application settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    #[serde(default = "TranscriptionConfig::recommended")]
    pub transcription: TranscriptionConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            transcription: TranscriptionConfig::recommended(),
            log_level: default_log_level(),
        }
    }
}

impl AppSettings {
    /// Parses `log_level`, falling back to `Info` for unknown names.
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
