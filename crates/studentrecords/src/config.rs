//! Configuration management for studentrecords.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory name under the platform config directory.
const CONFIG_DIR_NAME: &str = "studentrecords";

/// Default backing file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "students.csv";

/// Default heading printed above the menu.
pub const DEFAULT_BANNER: &str = "== Student Management ==";

/// Prefix for configuration environment variables.
const ENV_PREFIX: &str = "STUDREC_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `STUDREC_`, nested keys split on `__`)
/// 2. TOML config file at `~/.config/studentrecords/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Shell configuration.
    pub shell: ShellConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the backing file.
    pub data_file: PathBuf,
}

/// Shell-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Heading printed above the menu on every iteration.
    pub banner: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            banner: DEFAULT_BANNER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// `config_path` replaces the default config file location. A missing
    /// config file is not an error; defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.storage.data_file.as_os_str().is_empty() {
            return Err(Error::ConfigValidation {
                message: "storage.data_file must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Get the backing file path.
    #[must_use]
    pub fn data_file(&self) -> &Path {
        &self.storage.data_file
    }
}
