//! Persisted settings: which categories to clean, the process whitelist and
//! per-category age overrides. Stored as TOML under the user config dir.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::utils;

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "SYSCLEANER_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Invalid max age for {category}: {reason}")]
    InvalidAge { category: String, reason: String },
}

/// One switch per cleanup category plus the global dry-run flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    pub system_temp: bool,
    pub user_temp: bool,
    pub prefetch: bool,
    pub thumbnail_cache: bool,
    pub chrome_cache: bool,
    pub firefox_cache: bool,
    pub edge_cache: bool,
    pub recycle_bin: bool,
    pub event_logs: bool,
    pub steam_cache: bool,
    pub epic_cache: bool,
    pub dry_run: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            system_temp: true,
            user_temp: true,
            prefetch: true,
            thumbnail_cache: true,
            chrome_cache: true,
            firefox_cache: true,
            edge_cache: true,
            recycle_bin: false,
            event_logs: false,
            steam_cache: false,
            epic_cache: false,
            dry_run: false,
        }
    }
}

impl CleanOptions {
    /// Every category switched off.
    pub fn none() -> Self {
        Self {
            system_temp: false,
            user_temp: false,
            prefetch: false,
            thumbnail_cache: false,
            chrome_cache: false,
            firefox_cache: false,
            edge_cache: false,
            recycle_bin: false,
            event_logs: false,
            steam_cache: false,
            epic_cache: false,
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Processes whose running instances protect the categories they own.
    pub process_whitelist: Vec<String>,
    pub active_profile: String,
    pub default_clean_options: CleanOptions,
    /// Category name to age string ("7d", "12h"), replacing the built-in age.
    pub max_age_overrides: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            process_whitelist: Vec::new(),
            active_profile: "default".to_string(),
            default_clean_options: CleanOptions::default(),
            max_age_overrides: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load from [`config_path`], falling back to defaults if the file is absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parsed age overrides, keyed by category name.
    pub fn age_overrides(&self) -> Result<BTreeMap<String, Duration>, ConfigError> {
        self.max_age_overrides
            .iter()
            .map(|(category, raw)| {
                utils::parse_age(raw)
                    .map(|age| (category.clone(), age))
                    .map_err(|reason| ConfigError::InvalidAge {
                        category: category.clone(),
                        reason,
                    })
            })
            .collect()
    }
}

/// `$SYSCLEANER_CONFIG`, or `<config dir>/syscleaner/config.toml`.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join("syscleaner").join("config.toml"))
        .ok_or(ConfigError::NoConfigDir)
}
