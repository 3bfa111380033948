use crate::shared::Result;
use std::path::Path;

/// DatasetReader port for loading uploaded CSV documents
///
/// This port abstracts where the raw CSV text comes from so the use case
/// can be tested without touching the file system.
pub trait DatasetReader {
    /// Reads the raw text of an uploaded dataset
    ///
    /// # Arguments
    /// * `path` - Location of the uploaded CSV document
    ///
    /// # Errors
    /// Returns an error if the file cannot be read
    fn read_dataset(&self, path: &Path) -> Result<String>;
}
