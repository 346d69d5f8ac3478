//! Group positioner settings shared with the browser-side extension.
//!
//! The settings live in a single JSON file. A missing file reads as the
//! defaults; writes replace the whole file (last writer wins).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::paths::resolve_data_dir;
use crate::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "group_positioner.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionerConfig {
    pub group_name: String,
    pub shortcut_key: String,
    pub enabled: bool,
    pub debug_mode: bool,
}

impl Default for PositionerConfig {
    fn default() -> Self {
        Self {
            group_name: "MyGroup".to_string(),
            shortcut_key: "F8".to_string(),
            enabled: true,
            debug_mode: false,
        }
    }
}

impl PositionerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.group_name.trim().is_empty() {
            return Err(Error::InvalidConfig("group name must not be empty".to_string()));
        }
        if self.shortcut_key.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "shortcut key must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn status_line(&self) -> String {
        let mut status = format!(
            "Group positioner configured: {} -> {} ({})",
            self.group_name,
            self.shortcut_key,
            if self.enabled { "enabled" } else { "disabled" }
        );
        if self.debug_mode {
            status.push_str(" [DEBUG ON]");
        }
        status
    }
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigPatch {
    pub group_name: Option<String>,
    pub shortcut_key: Option<String>,
    pub enabled: Option<bool>,
    pub debug_mode: Option<bool>,
}

impl ConfigPatch {
    pub fn is_empty(&self) -> bool {
        self == &ConfigPatch::default()
    }

    pub fn apply(&self, config: &mut PositionerConfig) {
        if let Some(group_name) = &self.group_name {
            config.group_name = group_name.clone();
        }
        if let Some(shortcut_key) = &self.shortcut_key {
            config.shortcut_key = shortcut_key.clone();
        }
        if let Some(enabled) = self.enabled {
            config.enabled = enabled;
        }
        if let Some(debug_mode) = self.debug_mode {
            config.debug_mode = debug_mode;
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(CONFIG_FILE_NAME))
    }

    pub fn at_default_location() -> Result<Self> {
        Ok(Self::in_dir(&resolve_data_dir(None)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> Result<PositionerConfig> {
        if !self.path.exists() {
            log::debug!(
                "{} not found, using default positioner config",
                self.path.display()
            );
            return Ok(PositionerConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let config: PositionerConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, config: &PositionerConfig) -> Result<()> {
        config.validate()?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)?;
        log::debug!("saved positioner config to {}", self.path.display());
        Ok(())
    }

    pub fn update(&self, patch: &ConfigPatch) -> Result<PositionerConfig> {
        let mut config = self.load()?;
        patch.apply(&mut config);
        self.save(&config)?;
        Ok(config)
    }

    /// Remove the stored file so reads fall back to the defaults.
    pub fn reset(&self) -> Result<PositionerConfig> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(PositionerConfig::default())
    }
}
