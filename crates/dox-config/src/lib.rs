//! # dox-config
//!
//! Layered configuration loading for dox using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DOX_*` prefix, `__` as separator)
//! 2. Project-level `.dox/config.toml`
//! 3. User-level `~/.config/dox/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DOX_HEADER__AUTHOR` -> `header.author`,
//! `DOX_PARSER__MAX_LINES` -> `parser.max_lines`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use dox_config::DoxConfig;
//!
//! // Never fails: an unreadable or invalid configuration falls back to defaults.
//! let config = DoxConfig::load_or_default();
//!
//! if config.general.enabled {
//!     println!("tag sigil: {}", config.tag_sigil());
//! }
//! ```

mod error;
mod general;
mod header;
mod parser;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use header::HeaderConfig;
pub use parser::ParserConfig;

use dox_core::TagSigil;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DoxConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub header: HeaderConfig,
    #[serde(default)]
    pub parser: ParserConfig,
}

impl DoxConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    /// Returns `ConfigError` if a source cannot be parsed or a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration, falling back to defaults when it is unavailable.
    ///
    /// Generation must never fail because of settings, so every load or
    /// validation error is logged and replaced by [`DoxConfig::default`].
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|error| {
            tracing::warn!(%error, "configuration unavailable; using defaults");
            Self::default()
        })
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    /// Returns `ConfigError` if extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".dox/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("DOX_").split("__"))
    }

    /// Reject values the snippet renderer cannot honor.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.header.section_line_length < 2 {
            return Err(ConfigError::InvalidValue {
                field: "header.section_line_length".to_string(),
                reason: format!(
                    "banner needs room for both '/' ends, got {}",
                    self.header.section_line_length
                ),
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn tag_sigil(&self) -> TagSigil {
        self.general.tag_sigil()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dox").join("config.toml"))
    }
}
