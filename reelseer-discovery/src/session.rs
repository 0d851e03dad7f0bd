//! Session-token capability injected into the client.

use std::sync::Arc;

use parking_lot::RwLock;

/// Hands out the current session's access token.
///
/// The client reads the token fresh on every call rather than caching it at
/// construction, so implementations are free to rotate or drop it as the
/// user logs in and out.
pub trait SessionProvider: Send + Sync {
    /// The current access token, if a session is active.
    fn access_token(&self) -> Option<String>;
}

/// Provider for anonymous use: never yields a token.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSession;

impl SessionProvider for NoSession {
    fn access_token(&self) -> Option<String> {
        None
    }
}

/// Shared, swappable session token.
///
/// Clones observe the same token; setting or clearing it takes effect on the
/// next client call.
#[derive(Debug, Default, Clone)]
pub struct SharedSession {
    token: Arc<RwLock<Option<String>>>,
}

impl SharedSession {
    /// Session starting with `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.into()))),
        }
    }

    /// Replace the current token.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    /// Drop the current token; subsequent calls go out unauthenticated.
    pub fn clear(&self) {
        *self.token.write() = None;
    }
}

impl SessionProvider for SharedSession {
    fn access_token(&self) -> Option<String> {
        self.token.read().clone()
    }
}
