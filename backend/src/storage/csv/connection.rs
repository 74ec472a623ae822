//! Connection handle for the CSV storage backend.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Handle to the data directory holding one CSV file per entity.
///
/// Cloning is cheap; repositories share the handle and derive their file
/// paths from it.
#[derive(Debug, Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a connection rooted at `base_directory`, creating the
    /// directory if it does not exist yet.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();
        fs::create_dir_all(&base_directory)?;
        Ok(Self { base_directory })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the CSV file backing `file_name`.
    pub fn data_file(&self, file_name: &str) -> PathBuf {
        self.base_directory.join(file_name)
    }
}
