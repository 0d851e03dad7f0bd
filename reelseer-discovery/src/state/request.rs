//! Per-item media-request state.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::warn;

use reelseer_model::MediaKind;

use crate::service::DiscoveryService;

/// Reactive holder for requesting one media item.
///
/// Scoped per call site: each card or button owns its own instance, so
/// concurrent requests for different items never share an in-flight flag.
/// Clones of one instance do share it — a clone is the same call site.
#[derive(Clone)]
pub struct RequestState {
    service: Arc<dyn DiscoveryService>,
    requesting: Arc<AtomicBool>,
}

impl std::fmt::Debug for RequestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestState")
            .field("requesting", &self.requesting())
            .finish()
    }
}

impl RequestState {
    /// New idle holder.
    pub fn new(service: Arc<dyn DiscoveryService>) -> Self {
        Self {
            service,
            requesting: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a request is currently in flight.
    pub fn requesting(&self) -> bool {
        self.requesting.load(Ordering::SeqCst)
    }

    /// Request `media_id` and report whether the backend accepted it.
    ///
    /// The in-flight flag is always reset before returning, on success,
    /// backend-reported failure, and service error alike. A failed request
    /// resolves to `false`; retrying is just calling again.
    pub async fn request_media(&self, kind: MediaKind, media_id: u64) -> bool {
        self.requesting.store(true, Ordering::SeqCst);
        let outcome = self.service.request_media(kind, media_id).await;
        self.requesting.store(false, Ordering::SeqCst);

        match outcome {
            Ok(outcome) => {
                if let Some(error) = &outcome.error {
                    warn!(
                        "[Request] {} {} rejected: {}",
                        kind.as_str(),
                        media_id,
                        error
                    );
                }
                outcome.success
            }
            Err(err) => {
                warn!("[Request] {} {} failed: {}", kind.as_str(), media_id, err);
                false
            }
        }
    }
}
