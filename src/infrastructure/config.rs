//! User settings stored in `config.toml`

use crate::error::{EdenError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Journal used by `eden add` when none is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_journal: Option<String>,
}

impl Config {
    /// Load config from config.toml in the given directory.
    /// A missing file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE_NAME);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(EdenError::Io(e)),
        };

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.join(CONFIG_FILE_NAME), contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_config_gives_default() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_journal, None);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            default_journal: Some("Work".to_string()),
        };

        config.save_to_dir(temp.path()).unwrap();
        let contents = fs::read_to_string(temp.path().join("config.toml")).unwrap();
        assert!(contents.contains("default_journal = \"Work\""));

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.toml"), "default_journal = [").unwrap();

        match Config::load_from_dir(temp.path()) {
            Err(EdenError::TomlDeserialize(_)) => {}
            other => panic!("Expected TomlDeserialize error, got {:?}", other),
        }
    }
}
