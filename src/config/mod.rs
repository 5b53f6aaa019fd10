//! Service configuration.
//!
//! Settings come from `MERGINGTON__<SECTION>__<KEY>` environment variables,
//! optionally seeded from a `.env` file. Every key has a default, so an empty
//! environment yields a development server on `0.0.0.0:8000` serving
//! `./static`.
//!
//! # Example
//!
//! ```no_run
//! use mergington_activities::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod server;
mod static_files;

pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use static_files::{StaticFilesConfig, STATIC_MOUNT};

use serde::Deserialize;

/// Env var prefix; nested keys are joined with [`SEPARATOR`].
const PREFIX: &str = "MERGINGTON";
const SEPARATOR: &str = "__";

/// All settings, grouped by section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

impl AppConfig {
    /// Read settings from `.env` (if present) and the process environment.
    ///
    /// `MERGINGTON__SERVER__PORT=8080` sets `server.port`;
    /// `MERGINGTON__STATIC_FILES__DIR=/srv/www` sets `static_files.dir`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` if a value has the wrong type. Values
    /// that parse but make no sense are left to [`AppConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(PREFIX)
                    .separator(SEPARATOR),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Check every section, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.static_files.validate()
    }
}
