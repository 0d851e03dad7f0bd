//! HTTP client for the discovery/request backend.

use std::sync::Arc;

use log::{debug, info, warn};
use reqwest::{Client, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};

use reelseer_model::{
    BackdropSize, BackendStatus, MediaKind, PosterSize, RequestOutcome, SearchPage,
};

use crate::config::DiscoveryConfig;
use crate::error::DiscoveryError;
use crate::session::SessionProvider;

/// Header carrying the media-server session token.
const TOKEN_HEADER: &str = "X-Emby-Token";

/// Client for the discovery/request backend.
///
/// Best-effort by contract: the public async operations never return errors.
/// Transport and decode failures are caught here and folded into the
/// operation's result shape.
#[derive(Clone)]
pub struct DiscoveryClient {
    http: Client,
    base_url: String,
    image_base_url: String,
    session: Arc<dyn SessionProvider>,
}

impl std::fmt::Debug for DiscoveryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoveryClient")
            .field("base_url", &self.base_url)
            .field("image_base_url", &self.image_base_url)
            .field("has_token", &self.session.access_token().is_some())
            .finish()
    }
}

impl DiscoveryClient {
    /// Create a new client from `config`, reading auth tokens from `session`.
    pub fn new(config: DiscoveryConfig, session: Arc<dyn SessionProvider>) -> Self {
        let base_url = config.normalized_base_url();
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        info!(
            "[DiscoveryClient] Creating new client with base URL: {}",
            base_url
        );

        Self {
            http,
            base_url,
            image_base_url: config.normalized_image_base_url(),
            session,
        }
    }

    /// Backend base URL (normalized).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Attach common headers. The session token is read per call, never
    /// cached, so a login or logout between calls is honored.
    fn build_request(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header(reqwest::header::CONTENT_TYPE, "application/json");
        match self.session.access_token() {
            Some(token) => builder.header(TOKEN_HEADER, token),
            None => builder,
        }
    }

    /// Send a request and decode its JSON body.
    ///
    /// Non-2xx statuses and decode failures on 2xx both come back as
    /// [`DiscoveryError`]; callers fold it into their result shape.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, DiscoveryError> {
        let response = self.build_request(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(DiscoveryError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|err| DiscoveryError::Malformed(err.to_string()))
    }

    /// Ask the backend whether it is connected and configured.
    ///
    /// Never errors out; any failure is reported as a disconnected status.
    pub async fn check_status(&self) -> BackendStatus {
        let url = format!("{}/status", self.base_url);
        match self.execute(self.http.get(&url)).await {
            Ok(status) => status,
            Err(err) => BackendStatus::disconnected(err.to_string()),
        }
    }

    /// Search the backend for `query`.
    ///
    /// Best-effort: any failure is logged and yields `None`, never an error.
    pub async fn search(&self, query: &str, page: u32) -> Option<SearchPage> {
        let url = format!("{}/search", self.base_url);
        debug!("[DiscoveryClient] GET {} query='{}' page={}", url, query, page);

        let request = self
            .http
            .get(&url)
            .query(&[("query", query), ("page", &page.to_string())]);

        match self.execute(request).await {
            Ok(page) => Some(page),
            Err(err) => {
                warn!("[DiscoveryClient] Search '{}' failed: {}", query, err);
                None
            }
        }
    }

    /// Request `media_id` on the backend.
    ///
    /// Failures fold into `{success: false, error}` rather than erroring out.
    pub async fn request_media(&self, kind: MediaKind, media_id: u64) -> RequestOutcome {
        let url = format!("{}/request", self.base_url);
        let body = MediaRequestBody {
            media_type: kind,
            media_id,
        };

        match self.execute(self.http.post(&url).json(&body)).await {
            Ok(outcome) => outcome,
            Err(err) => RequestOutcome::failure(err.to_string()),
        }
    }

    /// CDN URL for a poster path. `None` path means no poster, so no URL.
    pub fn poster_url(&self, path: Option<&str>, size: PosterSize) -> Option<String> {
        let path = path?;
        Some(format!("{}/{}{}", self.image_base_url, size.as_str(), path))
    }

    /// CDN URL for a backdrop path. `None` path means no backdrop.
    pub fn backdrop_url(&self, path: Option<&str>, size: BackdropSize) -> Option<String> {
        let path = path?;
        Some(format!("{}/{}{}", self.image_base_url, size.as_str(), path))
    }
}

/// POST body of the `/request` endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MediaRequestBody {
    media_type: MediaKind,
    media_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::NoSession;

    fn client() -> DiscoveryClient {
        DiscoveryClient::new(DiscoveryConfig::default(), Arc::new(NoSession))
    }

    #[test]
    fn poster_url_composes_cdn_size_and_path() {
        let client = client();
        assert_eq!(
            client.poster_url(Some("/abc.jpg"), PosterSize::default()),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg".to_string())
        );
        assert_eq!(client.poster_url(None, PosterSize::default()), None);
    }

    #[test]
    fn backdrop_url_defaults_to_w1280() {
        let client = client();
        assert_eq!(
            client.backdrop_url(Some("/wide.jpg"), BackdropSize::default()),
            Some("https://image.tmdb.org/t/p/w1280/wide.jpg".to_string())
        );
        assert_eq!(client.backdrop_url(None, BackdropSize::default()), None);
    }

    #[test]
    fn request_body_uses_backend_field_names() {
        let body = MediaRequestBody {
            media_type: MediaKind::Tv,
            media_id: 1399,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"mediaType":"tv","mediaId":1399}"#
        );
    }
}
