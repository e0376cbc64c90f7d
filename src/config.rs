use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::KeyboardResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// When false the keyboard renders nothing and ignores input
    pub visible: bool,
    pub search: SearchConfig,
    pub compat: CompatConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatConfig {
    /// Unicode tier for Android versions missing from the support table
    pub fallback_unicode_version: f64,
    /// iOS version assumed when the device reports something unparseable
    pub fallback_ios_version: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Replace the built-in catalog with this JSON file
    pub path: Option<PathBuf>,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            visible: true,
            search: SearchConfig::default(),
            compat: CompatConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 200 }
    }
}

impl Default for CompatConfig {
    fn default() -> Self {
        Self {
            fallback_unicode_version: 7.0,
            // First iOS release with Unicode 7.0 emoji
            fallback_ios_version: 8.3,
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl KeyboardConfig {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("emoji-keyboard")
            .join("config.toml")
    }

    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`; unreadable or invalid files yield defaults
    pub fn load_from(path: &Path) -> Self {
        let mut config = if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match Self::from_toml_str(&content) {
                    Ok(config) => config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config {}: {}", path.display(), e);
                        Self::default()
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config {}: {}", path.display(), e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.validate();
        config
    }

    /// Parse config from TOML text, clamping values into range
    pub fn from_toml_str(content: &str) -> KeyboardResult<Self> {
        let mut config: Self = toml::from_str(content)?;
        config.validate();
        Ok(config)
    }

    /// Validate and clamp config values to acceptable ranges
    fn validate(&mut self) {
        self.search.debounce_ms = self.search.debounce_ms.min(2000);

        let defaults = CompatConfig::default();
        if !self.compat.fallback_unicode_version.is_finite()
            || self.compat.fallback_unicode_version < 0.0
        {
            self.compat.fallback_unicode_version = defaults.fallback_unicode_version;
        }
        if !self.compat.fallback_ios_version.is_finite() || self.compat.fallback_ios_version < 0.0
        {
            self.compat.fallback_ios_version = defaults.fallback_ios_version;
        }
    }
}
