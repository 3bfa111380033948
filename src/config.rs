use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::{QuasarError, Result};

pub const CONFIG_FILENAME: &str = "quasar.config.yml";

const KNOWN_FORMATS: [&str; 3] = ["json", "markdown", "md"];
const KNOWN_MODES: [&str; 3] = ["combined", "upload-only", "uploadonly"];

/// Optional YAML config file (`quasar.config.yml`) supplying defaults
/// that command-line flags override.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub mode: Option<String>,
    pub seed: Option<u64>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Validates the recognized fields, returning an error for values that
    /// would silently misconfigure a run.
    pub fn validate(&self) -> Result<()> {
        if let Some(format) = &self.format {
            if !KNOWN_FORMATS.contains(&format.to_lowercase().as_str()) {
                return Err(QuasarError::InvalidConfig {
                    details: format!(
                        "unsupported format '{}' (expected 'json' or 'markdown')",
                        format
                    ),
                }
                .into());
            }
        }
        if let Some(mode) = &self.mode {
            if !KNOWN_MODES.contains(&mode.to_lowercase().as_str()) {
                return Err(QuasarError::InvalidConfig {
                    details: format!(
                        "unsupported mode '{}' (expected 'combined' or 'upload-only')",
                        mode
                    ),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Warns on stderr about fields the tool does not recognize.
    pub fn warn_unknown_fields(&self) {
        for key in self.unknown_fields.keys() {
            eprintln!("⚠️  Ignoring unknown config field: {}", key);
        }
    }
}

/// Loads and validates a config file from an explicit path.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| QuasarError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;
    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| QuasarError::InvalidConfig {
            details: e.to_string(),
        })?;
    config.validate()?;
    config.warn_unknown_fields();
    Ok(config)
}

/// Looks for `quasar.config.yml` in the given directory. A missing file is
/// not an error; a malformed one is.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let candidate: PathBuf = dir.join(CONFIG_FILENAME);
    if !candidate.is_file() {
        return Ok(None);
    }
    load_config_from_path(&candidate).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILENAME);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_config_with_all_fields() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "format: markdown\nmode: upload-only\nseed: 42\n");

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.format.as_deref(), Some("markdown"));
        assert_eq!(config.mode.as_deref(), Some("upload-only"));
        assert_eq!(config.seed, Some(42));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_load_config_collects_unknown_fields() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "format: json\ncolor: blue\n");

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
        assert!(config.unknown_fields.contains_key("color"));
    }

    #[test]
    fn test_load_config_rejects_unknown_format() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "format: xml\n");

        let error = load_config_from_path(&path).unwrap_err();
        assert!(error.to_string().contains("unsupported format"));
    }

    #[test]
    fn test_load_config_rejects_unknown_mode() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "mode: streaming\n");

        let error = load_config_from_path(&path).unwrap_err();
        assert!(error.to_string().contains("unsupported mode"));
    }

    #[test]
    fn test_load_config_rejects_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "format: [unclosed\n");

        assert!(load_config_from_path(&path).is_err());
    }

    #[test]
    fn test_discover_config_missing_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_discover_config_finds_file() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "seed: 7\n");

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_load_config_missing_file_is_read_error() {
        let error = load_config_from_path(Path::new("/nonexistent/quasar.config.yml")).unwrap_err();
        assert!(error.to_string().contains("Failed to read"));
    }
}
