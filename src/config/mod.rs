//! Configuration module for menufind
//!
//! Manages engine tunables and keybinds. Configuration is stored in the
//! user's config directory (`~/.config/menufind/config.toml` on Linux); a
//! missing file means defaults.

use crate::keybinds::KeybindConfig;
use crate::search::{MAX_SUGGESTIONS, ScrollBlock, SearchOptions};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MenufindConfig {
    /// Maximum number of dropdown suggestions
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    /// Milliseconds between losing focus and hiding the dropdown
    #[serde(default = "default_blur_grace_ms")]
    pub blur_grace_ms: u64,

    /// Alignment used when scrolling to a chosen suggestion
    #[serde(default)]
    pub scroll_block: ScrollBlock,

    /// Simulated send time of the contact form, in milliseconds
    #[serde(default = "default_contact_send_delay_ms")]
    pub contact_send_delay_ms: u64,

    /// Color palette of the terminal browser
    #[serde(default)]
    pub theme: ThemeName,

    /// Dropdown navigation keybinds
    #[serde(default)]
    pub keybinds: KeybindConfig,
}

/// Palette selector for `menufind browse`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

const fn default_max_suggestions() -> usize {
    MAX_SUGGESTIONS
}

const fn default_blur_grace_ms() -> u64 {
    150
}

const fn default_contact_send_delay_ms() -> u64 {
    1500
}

impl Default for MenufindConfig {
    fn default() -> Self {
        Self {
            max_suggestions: default_max_suggestions(),
            blur_grace_ms: default_blur_grace_ms(),
            scroll_block: ScrollBlock::default(),
            contact_send_delay_ms: default_contact_send_delay_ms(),
            theme: ThemeName::default(),
            keybinds: KeybindConfig::default(),
        }
    }
}

impl MenufindConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                ConfigError::Message("Could not determine config directory".to_string())
            })?;

        Ok(config_dir.join("menufind").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::debug!("no config at {}, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| {
                    ConfigError::Message(format!("Failed to create config directory: {e}"))
                })?;
        }

        fs::write(path, self.to_toml()?)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Serialize to pretty TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_suggestions == 0 {
            return Err(ConfigError::Message(
                "max_suggestions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Engine options derived from this configuration
    #[must_use]
    pub const fn search_options(&self) -> SearchOptions {
        SearchOptions {
            max_suggestions: self.max_suggestions,
            blur_grace: Duration::from_millis(self.blur_grace_ms),
            scroll_block: self.scroll_block,
        }
    }

    /// Contact form send delay
    #[must_use]
    pub const fn contact_send_delay(&self) -> Duration {
        Duration::from_millis(self.contact_send_delay_ms)
    }
}
