use std::path::Path;

use quasar::prelude::*;

/// Mock DatasetReader for testing
pub struct MockDatasetReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockDatasetReader {
    pub fn new(content: String) -> Self {
        Self {
            content,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl DatasetReader for MockDatasetReader {
    fn read_dataset(&self, _path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock dataset read failure");
        }
        Ok(self.content.clone())
    }
}
