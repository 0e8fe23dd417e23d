//! Error conversions at the server-function boundary.
//!
//! Load failures travel inside a successful server-function response, so
//! a `ServerFnError` only means the call itself did not complete.

use datadeck_core::LoadError;
use leptos::server_fn::error::ServerFnError;

/// Converts a failed server-function call into a load failure.
pub fn load_error_from_server_fn(err: ServerFnError) -> LoadError {
    LoadError::Transport {
        reason: err.to_string(),
    }
}
