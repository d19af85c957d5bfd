use crate::core::engine::SearchEngine;
use crate::core::session::{reduce, SessionEvent, SessionState};
use crate::domain::model::Venue;
use crate::domain::ports::Geocoder;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub request_id: u64,
    /// False when a newer search was submitted before this one resolved.
    pub committed: bool,
    pub venues: Vec<Venue>,
}

/// Owns the session state and sequences overlapping searches.
pub struct SearchController<G: Geocoder> {
    engine: Arc<SearchEngine<G>>,
    state: Mutex<SessionState>,
}

impl<G: Geocoder> SearchController<G> {
    pub fn new(engine: Arc<SearchEngine<G>>) -> Self {
        let initial = SessionState::new(engine.catalog().all().to_vec());
        Self {
            engine,
            state: Mutex::new(initial),
        }
    }

    pub async fn dispatch(&self, event: SessionEvent) {
        let mut state = self.state.lock().await;
        let current = std::mem::take(&mut *state);
        *state = reduce(current, event);
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    /// Runs the current form as a search. The lock is released while the
    /// engine awaits the geocoder.
    pub async fn submit(&self) -> SearchOutcome {
        let (request_id, query) = {
            let mut state = self.state.lock().await;
            let current = std::mem::take(&mut *state);
            *state = reduce(current, SessionEvent::SearchSubmitted);
            (state.latest_request, state.query())
        };

        tracing::debug!(
            "🔍 Search #{} started (mode={}, term='{}')",
            request_id,
            query.mode,
            query.trimmed_term()
        );
        let venues = self.engine.search(&query).await;

        let mut state = self.state.lock().await;
        let current = std::mem::take(&mut *state);
        *state = reduce(
            current,
            SessionEvent::ResultsResolved {
                request_id,
                venues: venues.clone(),
            },
        );
        let committed = state.committed_request == request_id;

        tracing::info!(
            "Search #{} resolved with {} venues{}",
            request_id,
            venues.len(),
            if committed { "" } else { " (superseded)" }
        );

        SearchOutcome {
            request_id,
            committed,
            venues,
        }
    }
}
