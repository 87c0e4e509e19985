//! File logging setup.
//!
//! The library only talks to the `log` facade. The binary calls [`init`] once
//! at startup to route records to a file when logging is enabled.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;

const LOG_FILE_NAME: &str = "taskgate.log";

/// `<data dir>/taskgate/taskgate.log`
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("taskgate").join(LOG_FILE_NAME))
}

/// Install the global logger. Does nothing when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = get_log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    dispatch(config.level_filter()?)
        .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?)
        .apply()
        .context("Logger already initialized")?;

    log::info!("Logging to {}", path.display());
    Ok(())
}

/// Formatter shared by every sink: `[HH:MM:SS.mmm LEVEL target] message`.
pub fn dispatch(level: log::LevelFilter) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // reqwest and its pool are noisy at debug
        .level_for("hyper_util", log::LevelFilter::Warn)
        .level_for("reqwest", log::LevelFilter::Warn)
}
