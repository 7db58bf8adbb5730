use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PER_PAGE: usize = 5;

/// Configuration for the phonebook, stored in config.json next to the data
/// file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhonebookConfig {
    /// Contacts shown per listing page
    #[serde(default = "default_per_page")]
    pub per_page: usize,

    /// Backing-file override; the platform data directory is used when unset
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

fn default_per_page() -> usize {
    DEFAULT_PER_PAGE
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            data_file: None,
        }
    }
}

impl PhonebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PhonebookConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Set the page size; a page never holds fewer than one contact.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_page_size_is_five() {
        let config = PhonebookConfig::default();
        assert_eq!(config.per_page(), 5);
    }

    #[test]
    fn set_per_page_floors_at_one() {
        let mut config = PhonebookConfig::default();
        config.set_per_page(0);
        assert_eq!(config.per_page(), 1);
    }

    #[test]
    fn load_missing_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = PhonebookConfig::load(dir.path()).unwrap();
        assert_eq!(config, PhonebookConfig::default());
    }

    #[test]
    fn save_and_load_roundtrips() {
        let dir = TempDir::new().unwrap();

        let mut config = PhonebookConfig::default();
        config.set_per_page(10);
        config.save(dir.path()).unwrap();

        let loaded = PhonebookConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.per_page(), 10);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();

        let config = PhonebookConfig::load(dir.path()).unwrap();
        assert_eq!(config.per_page(), 5);
        assert!(config.data_file.is_none());
    }
}
