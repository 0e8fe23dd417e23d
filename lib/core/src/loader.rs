//! The seam between the form and whatever performs the network call.

use crate::error::LoadError;
use crate::item::{Credentials, LoadedItem};
use crate::kind::IntegrationKind;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Everything needed to perform one load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadRequest {
    pub kind: IntegrationKind,
    pub credentials: Credentials,
}

impl LoadRequest {
    #[must_use]
    pub fn new(kind: IntegrationKind, credentials: Credentials) -> Self {
        Self { kind, credentials }
    }
}

/// Fetches the items for one integration.
#[async_trait]
pub trait ItemLoader: Send + Sync {
    /// Performs the load. Exactly one request is issued per call.
    async fn load(&self, request: &LoadRequest) -> Result<Vec<LoadedItem>, LoadError>;
}
