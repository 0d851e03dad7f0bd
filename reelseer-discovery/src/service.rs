//! Service seam between the HTTP client and the state holders.

use async_trait::async_trait;

use reelseer_model::{BackendStatus, MediaKind, RequestOutcome, SearchPage};

use crate::client::DiscoveryClient;
use crate::error::DiscoveryError;

/// The discovery operations the state holders depend on.
///
/// [`DiscoveryClient`] is the production implementation and always returns
/// `Ok` — it absorbs failures into its result shapes. The `Result` is for
/// other implementations (stubs, decorators); the state holders defend
/// against `Err` rather than letting it escape to the rendering layer.
#[async_trait]
pub trait DiscoveryService: Send + Sync {
    /// See [`DiscoveryClient::check_status`].
    async fn check_status(&self) -> BackendStatus;

    /// See [`DiscoveryClient::search`].
    async fn search(&self, query: &str, page: u32)
    -> Result<Option<SearchPage>, DiscoveryError>;

    /// See [`DiscoveryClient::request_media`].
    async fn request_media(
        &self,
        kind: MediaKind,
        media_id: u64,
    ) -> Result<RequestOutcome, DiscoveryError>;
}

#[async_trait]
impl DiscoveryService for DiscoveryClient {
    async fn check_status(&self) -> BackendStatus {
        DiscoveryClient::check_status(self).await
    }

    async fn search(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Option<SearchPage>, DiscoveryError> {
        Ok(DiscoveryClient::search(self, query, page).await)
    }

    async fn request_media(
        &self,
        kind: MediaKind,
        media_id: u64,
    ) -> Result<RequestOutcome, DiscoveryError> {
        Ok(DiscoveryClient::request_media(self, kind, media_id).await)
    }
}
