//! Integration service client for datadeck.
//!
//! This crate provides:
//!
//! - **Load client**: posts credentials to the integration service and
//!   decodes the returned items
//! - **Loader configuration**: base URL and optional timeout

pub mod client;
pub mod config;
pub mod error;

pub use client::LoadClient;
pub use config::LoaderConfig;
pub use error::ClientError;
