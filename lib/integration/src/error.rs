//! Error types for the integration crate.
//!
//! Load failures are [`LoadError`](datadeck_core::LoadError) so they can
//! reach the UI unchanged. `ClientError` covers setting the client up and
//! is wrapped in a rootcause `Report`.

use std::fmt;

/// Errors from constructing a [`LoadClient`](crate::LoadClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The configured base URL is not a valid absolute URL.
    InvalidBaseUrl { url: String, reason: String },
    /// The HTTP client could not be built.
    BuildFailed { reason: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBaseUrl { url, reason } => {
                write!(f, "invalid integration service url '{url}': {reason}")
            }
            Self::BuildFailed { reason } => {
                write!(f, "failed to build http client: {reason}")
            }
        }
    }
}

impl std::error::Error for ClientError {}
