//! Error handling foundation for datadeck.
//!
//! This module provides the `Result` type alias using rootcause, plus the
//! single failure type a load can produce. Each crate defines its own
//! construction errors and wraps them in a `Report` as they propagate.

use rootcause::Report;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Result type alias using rootcause's Report for error handling.
///
/// Each layer adds its own context via `.context()` as errors propagate.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

/// Why a load did not produce an item list.
///
/// Serializable so it can cross the server-function boundary unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadError {
    /// The request never produced a response.
    Transport { reason: String },
    /// The integration service answered with a non-success status.
    Server { status: u16, detail: Option<String> },
    /// A success response whose body is not an item array.
    Decode { reason: String },
}

impl LoadError {
    /// Builds a server failure from the status and raw response body.
    ///
    /// The `detail` field of a JSON object body becomes the message. String
    /// details are taken as-is; any other JSON value keeps its JSON text.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| match value.get("detail")? {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Null => None,
                other => Some(other.to_string()),
            });
        Self::Server { status, detail }
    }

    /// The server-provided detail message, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Server { detail, .. } => detail.as_deref(),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }

    /// Message shown to the user: the server detail, or empty.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.detail().unwrap_or_default().to_string()
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { reason } => write!(f, "load request failed: {reason}"),
            Self::Server {
                status,
                detail: Some(detail),
            } => write!(f, "integration service returned {status}: {detail}"),
            Self::Server {
                status,
                detail: None,
            } => write!(f, "integration service returned {status}"),
            Self::Decode { reason } => write!(f, "malformed load response: {reason}"),
        }
    }
}

impl std::error::Error for LoadError {}
