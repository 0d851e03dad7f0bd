//! Search-as-you-type state with supersession.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;
use parking_lot::RwLock;

use reelseer_model::DiscoveredMedia;

use crate::service::DiscoveryService;

/// Most results a session ever holds; backends may return more per page.
pub const MAX_RESULTS: usize = 12;

/// Observable snapshot of the current search session.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    /// Query the session reflects.
    pub query: String,
    /// Results for that query, at most [`MAX_RESULTS`] entries.
    pub results: Vec<DiscoveredMedia>,
    /// Whether a search is in flight.
    pub loading: bool,
    /// Failure message from the last completed search, if any.
    pub error: Option<String>,
}

/// Reactive holder for search-as-you-type.
///
/// Every [`set_query`](Self::set_query) call supersedes the previous one:
/// each triggered search carries a generation number and only the response
/// matching the latest generation may commit results. A stale response is
/// dropped on arrival, so the observable session always reflects the most
/// recently issued query regardless of network completion order. Nothing is
/// cancelled at the transport level.
#[derive(Clone)]
pub struct SearchState {
    service: Arc<dyn DiscoveryService>,
    session: Arc<RwLock<SearchSession>>,
    generation: Arc<AtomicU64>,
}

impl std::fmt::Debug for SearchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchState")
            .field("session", &*self.session.read())
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish()
    }
}

impl SearchState {
    /// New holder with an empty session.
    pub fn new(service: Arc<dyn DiscoveryService>) -> Self {
        Self {
            service,
            session: Arc::new(RwLock::new(SearchSession::default())),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Current session snapshot.
    pub fn snapshot(&self) -> SearchSession {
        self.session.read().clone()
    }

    /// Drive the session from a changed `(query, enabled)` pair.
    ///
    /// An empty query or a disabled search clears the results immediately
    /// without touching `error` and issues no request; `loading` drops back
    /// to false, since any search still in flight is orphaned by this call
    /// and its completion will not be allowed to write it. Otherwise a
    /// search is triggered and its outcome committed only if no newer call
    /// has superseded it in the meantime.
    pub async fn set_query(&self, query: impl Into<String>, enabled: bool) {
        let query = query.into();
        // Bumped unconditionally so an in-flight response cannot resurrect
        // results after the query was cleared or disabled.
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if query.is_empty() || !enabled {
            let mut session = self.session.write();
            session.query = query;
            session.results.clear();
            session.loading = false;
            return;
        }

        {
            let mut session = self.session.write();
            session.query = query.clone();
            session.loading = true;
            session.error = None;
        }

        let outcome = self.service.search(&query, 1).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            // A newer call owns the session; this response is stale.
            debug!("[Search] Dropping superseded response for '{}'", query);
            return;
        }

        let mut session = self.session.write();
        match outcome {
            Ok(Some(page)) => {
                session.results = page.results.into_iter().take(MAX_RESULTS).collect();
            }
            // The client already absorbed and logged the failure.
            Ok(None) => session.results.clear(),
            Err(err) => {
                session.error = Some(err.to_string());
                session.results.clear();
            }
        }
        session.loading = false;
    }
}
