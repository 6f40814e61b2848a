//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `SALES_DESK`
//! prefix and `__` as the nesting separator; an optional TOML file can
//! layer underneath the environment.
//!
//! # Example
//!
//! ```no_run
//! use sales_desk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;

pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

use crate::i18n;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Catalog language for user-facing messages
    #[serde(default = "default_language")]
    pub language: String,

    /// Rust log filter directive
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// 1. Loads `.env` if present (development)
    /// 2. Layers an optional config file (path in `SALES_DESK_CONFIG`)
    /// 3. Reads environment variables with the `SALES_DESK` prefix,
    ///    `__` separating nested values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Ok(path) = std::env::var("SALES_DESK_CONFIG") {
            builder = builder.add_source(config::File::with_name(&path).required(false));
        }
        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("SALES_DESK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !i18n::supports(&self.language) {
            return Err(ValidationError::UnsupportedLanguage(self.language.clone()));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ValidationError::EmptyLogFilter);
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            log_filter: default_log_filter(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_log_filter() -> String {
    "sales_desk=info".to_string()
}
