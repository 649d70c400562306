// Filesystem path resolution for the memo library.

use std::path::PathBuf;

const APP_DIR_NAME: &str = "memovault";

/// Error resolving storage paths.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("App data directory not found")]
    DataDirNotFound,
}

/// Get the default directory where the memo library lives.
/// Returns {app_data_dir}/memovault/
pub fn default_data_dir() -> Result<PathBuf, PathError> {
    let data_dir = dirs::data_dir().ok_or(PathError::DataDirNotFound)?;
    Ok(data_dir.join(APP_DIR_NAME))
}

#[cfg(test)]
#[path = "paths_test.rs"]
mod tests;
