//! # desk-config
//!
//! Layered configuration loading for desk using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DESK_*` prefix, `__` as separator)
//! 2. Project-level `.desk/config.toml`
//! 3. User-level `~/.config/desk/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags sit above all of these; the CLI applies them after
//! loading.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DESK_DATA__USERS_FILE` -> `data.users_file`,
//! `DESK_GENERAL__SHOW_RELATED` -> `general.show_related`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use desk_config::DeskConfig;
//!
//! let config = DeskConfig::load_with_dotenv().expect("config");
//! let paths = config.data.paths().expect("data files configured");
//! println!("users from {}", paths.users.display());
//! ```

mod data;
mod error;
mod general;

pub use data::DataConfig;
pub use error::ConfigError;
pub use general::{GeneralConfig, OUTPUT_FORMATS};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".desk/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl DeskConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`DeskConfig::load_with_dotenv`] for
    /// `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse or
    /// extract, and [`ConfigError::InvalidValue`] if a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load `.env` from the working directory (if any), then [`DeskConfig::load`].
    ///
    /// # Errors
    ///
    /// See [`DeskConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is normal.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// See [`DeskConfig::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.general.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect it or layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("DESK_").split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("desk").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_is_usable() {
        let config = DeskConfig::default();
        assert!(config.data.is_configured());
        assert!(config.general.show_related);
        assert_eq!(config.general.default_format, "json");
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config = DeskConfig::from_figment(&DeskConfig::figment())
                .map_err(|e| e.to_string())?;
            assert_eq!(config.data.organizations_file, "organizations.json");
            Ok(())
        });
    }
}
