//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables.
//!
//! See [`LoaderConfig`](datadeck_integration::LoaderConfig) for the
//! integration service settings.

use datadeck_integration::LoaderConfig;
use serde::Deserialize;

/// Server configuration composed from library configs.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Integration service configuration.
    #[serde(default)]
    pub loader: LoaderConfig,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// `LOADER__BASE_URL` and `LOADER__TIMEOUT_SECS` are recognized.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is present but invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_defaults_when_unset() {
        let config: ServerConfig = config::Config::builder()
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize");
        assert_eq!(config.loader, LoaderConfig::default());
    }

    #[test]
    fn loader_overrides_apply() {
        let config: ServerConfig = config::Config::builder()
            .set_override("loader.base_url", "http://integrations:9000")
            .expect("override")
            .set_override("loader.timeout_secs", 30)
            .expect("override")
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize");
        assert_eq!(config.loader.base_url, "http://integrations:9000");
        assert_eq!(config.loader.timeout_secs, Some(30));
    }
}
