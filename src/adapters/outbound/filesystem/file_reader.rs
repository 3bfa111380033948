use crate::ports::outbound::DatasetReader;
use crate::shared::error::QuasarError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading uploaded CSV documents from disk
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetReader for FileSystemReader {
    fn read_dataset(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| {
            QuasarError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
