use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "tick-snake";
const SCORE_FILE_NAME: &str = "scores.json";

/// Keyed scalar storage used for the persisted high score.
///
/// Reads default to zero; writes are fire-and-forget.
pub trait ScoreStore {
    fn get(&self, key: &str) -> u32;
    fn set(&mut self, key: &str, value: u32);
}

/// In-memory store, useful for tests and for running without a score file.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    values: HashMap<String, u32>,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `value` under `key`.
    #[must_use]
    pub fn with_value(key: &str, value: u32) -> Self {
        let mut store = Self::new();
        store.set(key, value);
        store
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self, key: &str) -> u32 {
        self.values.get(key).copied().unwrap_or(0)
    }

    fn set(&mut self, key: &str, value: u32) {
        self.values.insert(key.to_owned(), value);
    }
}

/// On-disk layout: a flat JSON object of key to score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct ScoreFile {
    values: BTreeMap<String, u32>,
}

/// Store backed by a small JSON object on disk.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
    file: ScoreFile,
}

impl JsonScoreStore {
    /// Opens the store at `path`.
    ///
    /// A missing file yields an empty store. Returns `Err` when the file
    /// exists but cannot be read or parsed, so the caller can surface a
    /// warning before entering raw terminal mode.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = load_file(&path)?;

        Ok(Self { path, file })
    }

    /// Creates an empty store that will write to `path`.
    #[must_use]
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: ScoreFile::default(),
        }
    }

    /// Returns the file this store writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.file).map_err(|source| {
            Error::ScoreFile {
                path: self.path.clone(),
                source,
            }
        })?;

        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl ScoreStore for JsonScoreStore {
    fn get(&self, key: &str) -> u32 {
        self.file.values.get(key).copied().unwrap_or(0)
    }

    fn set(&mut self, key: &str, value: u32) {
        self.file.values.insert(key.to_owned(), value);

        if let Err(error) = self.save() {
            log::warn!("failed to save {key}={value}: {error}");
        }
    }
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

fn load_file(path: &Path) -> Result<ScoreFile> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ScoreFile::default()),
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str(&raw).map_err(|source| Error::ScoreFile {
        path: path.to_path_buf(),
        source,
    })
}
