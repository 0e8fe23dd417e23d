//! HTTP client for the integration service.

use crate::config::LoaderConfig;
use crate::error::ClientError;
use async_trait::async_trait;
use datadeck_core::{IntegrationKind, ItemLoader, LoadError, LoadRequest, LoadedItem};
use reqwest::multipart::Form;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Form field carrying the JSON-encoded credentials.
const CREDENTIALS_FIELD: &str = "credentials";

/// Loads integration items over HTTP.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct LoadClient {
    http: reqwest::Client,
    base_url: String,
}

impl LoadClient {
    /// Creates a client for the configured integration service.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or the HTTP client
    /// cannot be built.
    pub fn new(config: &LoaderConfig) -> datadeck_core::Result<Self, ClientError> {
        reqwest::Url::parse(&config.base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| ClientError::BuildFailed {
            reason: e.to_string(),
        })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the load endpoint for an integration.
    #[must_use]
    pub fn endpoint(&self, kind: IntegrationKind) -> String {
        format!("{}{}", self.base_url, kind.load_path())
    }

    /// Posts the credentials and decodes the returned items.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Transport`] when no response arrives,
    /// [`LoadError::Server`] for non-success statuses, and
    /// [`LoadError::Decode`] when a success body is not an item array.
    #[instrument(skip(self, request), fields(integration = %request.kind))]
    pub async fn fetch(&self, request: &LoadRequest) -> Result<Vec<LoadedItem>, LoadError> {
        let url = self.endpoint(request.kind);
        let form = Form::new().text(CREDENTIALS_FIELD, request.credentials.to_json_string());

        debug!(endpoint = %url, "Loading integration items");

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, endpoint = %url, "Load request failed");
                LoadError::Transport {
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!(error = %e, endpoint = %url, "Failed to read load response");
            LoadError::Transport {
                reason: e.to_string(),
            }
        })?;

        if !status.is_success() {
            let err = LoadError::from_response(status.as_u16(), &body);
            warn!(status = %status, error = %err, "Integration service rejected load");
            return Err(err);
        }

        let items: Vec<LoadedItem> = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "Load response is not an item list");
            LoadError::Decode {
                reason: e.to_string(),
            }
        })?;

        info!(item_count = items.len(), "Loaded integration items");

        Ok(items)
    }
}

#[async_trait]
impl ItemLoader for LoadClient {
    async fn load(&self, request: &LoadRequest) -> Result<Vec<LoadedItem>, LoadError> {
        self.fetch(request).await
    }
}
