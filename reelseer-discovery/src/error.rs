//! Failure taxonomy for the discovery-client boundary.

use thiserror::Error;

/// Failures normalized at the [`crate::DiscoveryClient`] boundary.
///
/// None of these escape the client's public operations; they are folded into
/// `Option` / outcome shapes there. The enum exists for the internal fetch
/// path and for service stubs that exercise the state holders' defensive
/// branches.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Non-2xx response from the backend.
    #[error("HTTP {status}: {status_text}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        status_text: String,
    },

    /// Network-level failure before a status was received.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 2xx response whose body failed to decode.
    #[error("Malformed response: {0}")]
    Malformed(String),
}
