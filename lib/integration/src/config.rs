//! Loader configuration.
//!
//! Fields with defaults can be omitted when loading from environment variables.

use serde::{Deserialize, Serialize};

/// Where and how to reach the integration service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Base URL of the integration service.
    /// Default: "http://localhost:8000"
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl LoaderConfig {
    /// Creates a configuration for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
