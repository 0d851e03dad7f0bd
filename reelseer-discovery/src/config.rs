//! Client configuration: where the backend and its artwork CDN live.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "http://localhost:8096/jellyseerr";
const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`crate::DiscoveryClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Mount path of the discovery backend, including the host.
    pub base_url: String,
    /// Base of the third-party poster/backdrop CDN.
    pub image_base_url: String,
    /// Transport timeout in seconds; a timeout surfaces as an ordinary
    /// transport failure.
    pub timeout_secs: u64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl DiscoveryConfig {
    /// Backend base URL with a scheme and without a trailing slash.
    pub fn normalized_base_url(&self) -> String {
        normalize(&self.base_url)
    }

    /// CDN base URL without a trailing slash.
    pub fn normalized_image_base_url(&self) -> String {
        self.image_base_url.trim().trim_end_matches('/').to_string()
    }

    /// Transport timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// Many deployments configure "host:port/jellyseerr" without a scheme, which
// reqwest rejects. Add http:// if missing and trim a trailing slash to
// prevent double slashes in built URLs.
fn normalize(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };
    if with_scheme != raw {
        log::warn!(
            "[DiscoveryConfig] Normalized base URL from '{}' to '{}'",
            raw,
            with_scheme
        );
    }
    with_scheme
}
