//! Configuration management

use crate::error::{ClialgoError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the metadata directory inside a workspace root
pub const META_DIR: &str = ".clialgo";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Export folder, relative to the workspace root
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    /// Note data file, relative to the metadata directory
    #[serde(default = "default_data_file")]
    pub data_file: String,
    pub created: DateTime<Utc>,
}

fn default_export_dir() -> String {
    "export".to_string()
}

fn default_data_file() -> String {
    "notes.toml".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            export_dir: default_export_dir(),
            data_file: default_data_file(),
            created: Utc::now(),
        }
    }

    /// Load config from .clialgo/config.toml in the given directory.
    /// Returns `None` when the file does not exist.
    pub fn load_from_dir(path: &Path) -> Result<Option<Self>> {
        let config_path = path.join(META_DIR).join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ClialgoError::Io(e)),
        };

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ClialgoError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(Some(config))
    }

    /// Save config to .clialgo/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let meta_dir = path.join(META_DIR);
        let config_path = meta_dir.join(CONFIG_FILE);

        if !meta_dir.exists() {
            fs::create_dir_all(&meta_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| ClialgoError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Load the config, writing defaults first if there is none
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if let Some(config) = Self::load_from_dir(path)? {
            return Ok(config);
        }

        let config = Self::new();
        config.save_to_dir(path)?;
        tracing::info!(root = %path.display(), "Created default configuration");
        Ok(config)
    }

    /// Absolute path of the note data file for a workspace root
    pub fn data_path(&self, root: &Path) -> PathBuf {
        root.join(META_DIR).join(&self.data_file)
    }

    /// Absolute path of the export folder for a workspace root
    pub fn export_path(&self, root: &Path) -> PathBuf {
        root.join(&self.export_dir)
    }

    fn validate(&self) -> Result<()> {
        if self.export_dir.trim().is_empty() {
            return Err(ClialgoError::Config(
                "export_dir must not be empty".to_string(),
            ));
        }
        if self.data_file.trim().is_empty() {
            return Err(ClialgoError::Config(
                "data_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_defaults() {
        let config = Config::new();
        assert_eq!(config.export_dir, "export");
        assert_eq!(config.data_file, "notes.toml");
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.export_dir = "out".to_string();

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".clialgo/config.toml").exists());
        let loaded = Config::load_from_dir(temp.path()).unwrap().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_config_is_none() {
        let temp = TempDir::new().unwrap();
        assert!(Config::load_from_dir(temp.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let temp = TempDir::new().unwrap();

        let created = Config::load_or_create(temp.path()).unwrap();
        assert!(temp.path().join(".clialgo/config.toml").exists());

        let again = Config::load_or_create(temp.path()).unwrap();
        assert_eq!(again.created, created.created);
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".clialgo")).unwrap();
        fs::write(
            temp.path().join(".clialgo/config.toml"),
            "created = \"2025-01-17T10:00:00Z\"\n",
        )
        .unwrap();

        let config = Config::load_from_dir(temp.path()).unwrap().unwrap();
        assert_eq!(config.export_dir, "export");
        assert_eq!(config.data_file, "notes.toml");
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".clialgo")).unwrap();
        fs::write(temp.path().join(".clialgo/config.toml"), "export_dir = [").unwrap();

        match Config::load_from_dir(temp.path()) {
            Err(ClialgoError::Config(msg)) => assert!(msg.contains("config.toml")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_export_dir_rejected() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".clialgo")).unwrap();
        fs::write(
            temp.path().join(".clialgo/config.toml"),
            "export_dir = \"\"\ncreated = \"2025-01-17T10:00:00Z\"\n",
        )
        .unwrap();

        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(ClialgoError::Config(_))
        ));
    }

    #[test]
    fn test_paths_are_resolved_against_root() {
        let config = Config::new();
        let root = Path::new("/tmp/notes");
        assert_eq!(
            config.data_path(root),
            PathBuf::from("/tmp/notes/.clialgo/notes.toml")
        );
        assert_eq!(config.export_path(root), PathBuf::from("/tmp/notes/export"));
    }
}
