//! Configuration management for contactbook.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "contactbook";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "CONTACTBOOK_";

/// Default session title.
const DEFAULT_TITLE: &str = "Contact Management System";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `CONTACTBOOK_`, `__` between keys)
/// 2. TOML config file at `~/.config/contactbook/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Menu configuration.
    pub menu: MenuConfig,
    /// Display configuration.
    pub display: DisplayConfig,
}

/// Menu-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Print the title once when the session starts.
    pub show_banner: bool,
    /// Session title, used in the banner and the farewell message.
    pub title: String,
}

/// Display-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Print the total count after listing contacts.
    pub show_total: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { show_total: true }
    }
}

impl Config {
    /// Load configuration from all sources, reading the TOML file at
    /// `config_path` or the default path.
    ///
    /// A config file that does not exist is skipped.
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
        if self.menu.title.contains(['\n', '\r']) {
            return Err(Error::config_validation(
                "menu.title must be a single line",
            ));
        }

        if self.menu.show_banner && self.menu.title.trim().is_empty() {
            return Err(Error::config_validation(
                "menu.title must not be empty when menu.show_banner is enabled",
            ));
        }

        Ok(())
    }

    /// Render the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The session title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.menu.title
    }
}
