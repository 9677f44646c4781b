//! Config management use case

use crate::error::{EdenError, Result};
use crate::infrastructure::Config;
use std::path::PathBuf;

/// Service for reading and writing config.toml
pub struct ConfigService {
    app_dir: PathBuf,
}

impl ConfigService {
    /// Create a config service for the given application directory
    pub fn new(app_dir: PathBuf) -> Self {
        ConfigService { app_dir }
    }

    /// Get a single config value ("" when unset)
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.list()?;

        match key {
            "default_journal" => Ok(config.default_journal.unwrap_or_default()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value. An empty value clears the key.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.list()?;

        match key {
            "default_journal" => {
                let value = value.trim();
                config.default_journal = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            _ => return Err(unknown_key(key)),
        }

        config.save_to_dir(&self.app_dir)
    }

    /// Load the full config
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.app_dir)
    }
}

fn unknown_key(key: &str) -> EdenError {
    EdenError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: default_journal",
        key
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_unset() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().to_path_buf());
        assert_eq!(service.get("default_journal").unwrap(), "");
    }

    #[test]
    fn test_set_get_and_clear() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().to_path_buf());

        service.set("default_journal", "Work").unwrap();
        assert_eq!(service.get("default_journal").unwrap(), "Work");

        service.set("default_journal", "").unwrap();
        assert_eq!(service.list().unwrap().default_journal, None);
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().to_path_buf());

        match service.set("editor", "vim") {
            Err(EdenError::Config(msg)) => assert!(msg.contains("Unknown config key: 'editor'")),
            other => panic!("Expected Config error, got {:?}", other),
        }
        assert!(service.get("editor").is_err());
    }
}
