//! File-based logging using simplelog.
//!
//! The terminal is owned by the game while it runs, so log records go to a
//! file: `tick-snake.log` in the platform cache directory unless a path is
//! given on the command line.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::error::Result;

const APP_DIR_NAME: &str = "tick-snake";
const LOG_FILE_NAME: &str = "tick-snake.log";

/// Returns the default log file location.
#[must_use]
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
}

/// Installs the global logger writing to `path`.
///
/// `LevelFilter::Off` skips installation and leaves no file behind.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let file = File::create(path)?;

    WriteLogger::init(level, config, file)?;
    Ok(())
}
