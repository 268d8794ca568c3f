//! App Core for Transcript Bridge.
//!
//! Holds the state the RPC surface needs: persisted settings, which also own
//! the language catalog offered to the UI.

use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::SettingsError;

pub struct App {
    pub settings_engine: SettingsEngine,
}

impl App {
    /// Creates the app and loads settings from `config_path`, or from the
    /// platform config directory when `None`.
    pub fn new(config_path: Option<String>) -> Result<Self, SettingsError> {
        let mut settings_engine = SettingsEngine::new(config_path);
        settings_engine.load()?;
        log::debug!("settings loaded from {}", settings_engine.get_config_path());

        Ok(Self { settings_engine })
    }
}
