use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the terminal host around the game core.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("score file {} is not valid: {source}", .path.display())]
    ScoreFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("logger could not be installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
