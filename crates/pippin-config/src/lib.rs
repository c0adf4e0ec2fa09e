//! # pippin-config
//!
//! Layered configuration loading for Pippin using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PIPPIN_*` prefix, `__` as separator)
//! 2. Legacy flat variables (`ACCOUNT_ID`, `SPRINT_LENGTH_DAYS`, `SPRINT_EPOCH`, `COZY_THEME`)
//! 3. Project-level `.pippin/config.toml`
//! 4. User-level `~/.config/pippin/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PIPPIN_BOARD__SPRINT_EPOCH` -> `board.sprint_epoch`,
//! `PIPPIN_DATABASE__PATH` -> `database.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use pippin_config::PippinConfig;
//!
//! let config = PippinConfig::load_with_dotenv().expect("config");
//! let settings = config.settings().expect("validated at load");
//! println!("sprints of {} days", settings.sprint_length_days);
//! ```

mod board;
mod database;
mod error;

pub use board::BoardConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use pippin_core::settings::Settings;
use pippin_core::tenant::TenantId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Flat variables understood by earlier deployments, and the config path
/// each one feeds.
const LEGACY_ENV: [(&str, &str); 4] = [
    ("ACCOUNT_ID", "board.account_id"),
    ("SPRINT_LENGTH_DAYS", "board.sprint_length_days"),
    ("SPRINT_EPOCH", "board.sprint_epoch"),
    ("COZY_THEME", "board.theme"),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PippinConfig {
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl PippinConfig {
    /// Load configuration from all sources and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env`
    /// file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or the board section is
    /// invalid (non-positive sprint length, malformed epoch, unknown theme,
    /// blank account id).
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".pippin/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Legacy flat variables
        figment = figment.merge(Self::legacy_env());

        // Layer 4: Prefixed environment variables (highest priority)
        figment.merge(Env::prefixed("PIPPIN_").split("__"))
    }

    /// Check that the board section yields a tenant and runtime settings.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError::InvalidValue` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.tenant()?;
        self.board.settings()?;
        Ok(())
    }

    /// Tenant this process serves.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a blank account id.
    pub fn tenant(&self) -> Result<TenantId, ConfigError> {
        self.board.tenant()
    }

    /// Runtime settings derived from the board section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the board section is invalid.
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        self.board.settings()
    }

    fn legacy_env() -> Env {
        Env::raw()
            .only(&LEGACY_ENV.map(|(var, _)| var))
            .map(|key| {
                LEGACY_ENV
                    .iter()
                    .find(|(var, _)| key.as_str().eq_ignore_ascii_case(var))
                    .map_or_else(|| key.as_str().to_ascii_lowercase().into(), |(_, path)| (*path).into())
            })
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pippin").join("config.toml"))
    }
}
