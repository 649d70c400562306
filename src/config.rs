// Storage configuration - where the memo library keeps its files.
//
// Loaded from an optional settings.json-style file; every field has a
// default so a missing or partial file still yields a working config.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths::{self, PathError};

fn default_db_file() -> String {
    "memos.db".to_string()
}

fn default_blob_dir() -> String {
    "blobs".to_string()
}

/// Error loading storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),
    #[error("Failed to parse config file: {0}")]
    ParseError(String),
    #[error(transparent)]
    Path(#[from] PathError),
}

/// Configuration for the memo library's on-disk layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageConfig {
    /// Base directory for all persisted state. Defaults to the platform
    /// data directory (see `paths::default_data_dir`).
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Metadata database file name, relative to `data_dir`.
    #[serde(default = "default_db_file")]
    pub db_file: String,
    /// Blob store directory name, relative to `data_dir`.
    #[serde(default = "default_blob_dir")]
    pub blob_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            db_file: default_db_file(),
            blob_dir: default_blob_dir(),
        }
    }
}

impl StorageConfig {
    /// Create a config rooted at an explicit directory.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file.
    ///
    /// A missing file is not an error; it yields the default config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            crate::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Ok(config)
    }

    /// The effective base directory for persisted state.
    pub fn resolved_data_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(paths::default_data_dir()?),
        }
    }

    /// Full path to the metadata database file.
    pub fn db_path(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.resolved_data_dir()?.join(&self.db_file))
    }

    /// Full path to the blob store directory.
    pub fn blob_dir_path(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.resolved_data_dir()?.join(&self.blob_dir))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
