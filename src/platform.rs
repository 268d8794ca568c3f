// Transcript Bridge platform paths
// Config: $TRANSCRIPT_BRIDGE_CONFIG_DIR, else <platform config dir>/transcript-bridge
// Logs:   $TRANSCRIPT_BRIDGE_LOG_DIR, else <platform data dir>/transcript-bridge/logs

use std::env;
use std::path::PathBuf;

const APP_DIR_NAME: &str = "transcript-bridge";

pub const CONFIG_DIR_ENV: &str = "TRANSCRIPT_BRIDGE_CONFIG_DIR";
pub const LOG_DIR_ENV: &str = "TRANSCRIPT_BRIDGE_LOG_DIR";

/// Returns the configuration directory.
///
/// - **Linux**: `$XDG_CONFIG_HOME/transcript-bridge` or `~/.config/transcript-bridge`
/// - **macOS**: `~/Library/Application Support/transcript-bridge`
/// - **Windows**: `%APPDATA%/transcript-bridge`
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .unwrap_or_else(env::temp_dir)
        .join(APP_DIR_NAME)
}

/// Returns the directory log files are written to.
pub fn get_log_dir() -> PathBuf {
    if let Ok(dir) = env::var(LOG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::data_local_dir()
        .unwrap_or_else(env::temp_dir)
        .join(APP_DIR_NAME)
        .join("logs")
}

/// Path of the settings file inside the configuration directory.
pub fn get_settings_path() -> PathBuf {
    get_config_dir().join("settings.json")
}
