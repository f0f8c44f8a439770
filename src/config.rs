//! Configuration persistence for tottepost settings

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::collaborators::SettingsStore;

/// One row of the settings panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingOption {
    /// Stable key persisted as the selection
    pub id: String,
    /// Text shown in the row
    pub label: String,
}

impl SettingOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Application configuration persisted between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TottepostConfig {
    /// Ordered options listed in the settings panel
    #[serde(default = "default_options")]
    pub options: Vec<SettingOption>,
    /// Id of the last selected option
    #[serde(default)]
    pub selected_option: Option<String>,
    /// Whether submitted photos are also cross-posted through the login hook
    #[serde(default)]
    pub cross_post: bool,
    /// Folder the image picker hands out photos from
    #[serde(default = "default_picker_dir")]
    pub picker_dir: PathBuf,
    /// Folder the save pipeline writes submitted photos into
    #[serde(default = "default_save_dir")]
    pub save_dir: PathBuf,
}

fn default_options() -> Vec<SettingOption> {
    vec![
        SettingOption::new("camera-roll", "Camera Roll"),
        SettingOption::new("facebook", "Facebook"),
        SettingOption::new("twitter", "Twitter"),
        SettingOption::new("flickr", "Flickr"),
        SettingOption::new("dropbox", "Dropbox"),
    ]
}

fn pictures_dir() -> PathBuf {
    dirs::picture_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_picker_dir() -> PathBuf {
    pictures_dir().join("tottepost").join("inbox")
}

fn default_save_dir() -> PathBuf {
    pictures_dir().join("tottepost").join("posted")
}

impl TottepostConfig {
    /// Directory name under the user config dir
    pub const ID: &'static str = "tottepost";

    /// Default location of the config file
    pub fn path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("No user config directory")?;
        Ok(dir.join(Self::ID).join("config.json"))
    }

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        match Self::path() {
            Ok(path) => Self::load_from(&path),
            Err(err) => {
                log::warn!("Could not locate config file: {:?}", err);
                Self::default()
            }
        }
    }

    /// Load configuration from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::read(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Error loading config, using defaults: {:?}", err);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = serde_json::from_str(&json)
            .with_context(|| format!("Malformed config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to `path`, creating its directory
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

impl Default for TottepostConfig {
    fn default() -> Self {
        Self {
            options: default_options(),
            // Nothing selected until the user picks a row
            selected_option: None,
            cross_post: false,
            picker_dir: default_picker_dir(),
            save_dir: default_save_dir(),
        }
    }
}

/// Settings collaborator backed by the config file
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    config: TottepostConfig,
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(config: TottepostConfig, path: impl Into<PathBuf>) -> Self {
        Self {
            config,
            path: path.into(),
        }
    }
}

impl SettingsStore for JsonSettingsStore {
    fn options(&self) -> Vec<SettingOption> {
        self.config.options.clone()
    }

    fn persist_selection(&mut self, option: &SettingOption) -> Result<()> {
        if self.config.selected_option.as_deref() == Some(option.id.as_str()) {
            return Ok(());
        }
        let mut updated = self.config.clone();
        updated.selected_option = Some(option.id.clone());
        // Only remember what reached the disk
        updated.save_to(&self.path)?;
        self.config = updated;
        Ok(())
    }

    fn cross_post_enabled(&self) -> bool {
        self.config.cross_post
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = TottepostConfig {
            selected_option: Some("flickr".to_string()),
            cross_post: true,
            ..TottepostConfig::default()
        };
        config.save_to(&path).unwrap();

        let loaded = TottepostConfig::load_from(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = TottepostConfig::load_from(&dir.path().join("absent.json"));
        assert_eq!(loaded, TottepostConfig::default());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(TottepostConfig::load_from(&path), TottepostConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "cross_post": true }"#).unwrap();

        let loaded = TottepostConfig::load_from(&path);
        assert!(loaded.cross_post);
        assert_eq!(loaded.options, default_options());
        assert_eq!(loaded.selected_option, None);
    }

    #[test]
    fn test_store_persists_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut store = JsonSettingsStore::new(TottepostConfig::default(), &path);

        let option = store.options()[1].clone();
        store.persist_selection(&option).unwrap();

        let loaded = TottepostConfig::load_from(&path);
        assert_eq!(loaded.selected_option.as_deref(), Some("facebook"));
        assert!(!store.cross_post_enabled());
    }

    #[test]
    fn test_store_retries_failed_write() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"not a dir").unwrap();
        let path = blocker.join("config.json");
        let mut store = JsonSettingsStore::new(TottepostConfig::default(), &path);

        let option = store.options()[1].clone();
        assert!(store.persist_selection(&option).is_err());
        // Same option again must try the write again, not report success
        assert!(store.persist_selection(&option).is_err());
        assert!(!path.exists());

        std::fs::remove_file(&blocker).unwrap();
        store.persist_selection(&option).unwrap();
        let loaded = TottepostConfig::load_from(&path);
        assert_eq!(loaded.selected_option.as_deref(), Some("facebook"));
    }
}
