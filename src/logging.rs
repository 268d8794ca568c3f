//! Logger setup for the RPC binary.
//!
//! Records go to stderr because stdout carries the protocol. A log file can
//! be chained in addition.

use std::path::Path;

use log::LevelFilter;

/// Environment variable overriding the configured level (`debug`, `warn`, ...).
pub const LOG_LEVEL_ENV: &str = "TRANSCRIPT_BRIDGE_LOG";

/// Resolves the effective level: the environment wins over `configured`.
pub fn resolve_level(configured: LevelFilter) -> LevelFilter {
    std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(configured)
}

/// Installs the global logger. Fails if one is already installed.
pub fn init_logger(level: LevelFilter, log_file: Option<&Path>) -> Result<(), fern::InitError> {
    let format = |out: fern::FormatCallback<'_>, message: &std::fmt::Arguments<'_>, record: &log::Record| {
        out.finish(format_args!(
            "[{}][{}][{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.target(),
            record.level(),
            message
        ))
    };

    let mut dispatch = fern::Dispatch::new()
        .format(format)
        .level(level)
        .chain(std::io::stderr());

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        dispatch = dispatch.chain(fern::log_file(path)?);
    }

    dispatch.apply()?;
    Ok(())
}
