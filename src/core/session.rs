use crate::domain::capacity::CapacityBracket;
use crate::domain::model::{SearchMode, SearchQuery, Venue};

/// Request-scoped UI state: the search form inputs and the committed result list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub mode: SearchMode,
    pub term: String,
    pub capacity: Option<CapacityBracket>,
    pub results: Vec<Venue>,
    /// Id of the most recently submitted search.
    pub latest_request: u64,
    /// Id of the search whose results are currently shown.
    pub committed_request: u64,
}

impl SessionState {
    pub fn new(initial_results: Vec<Venue>) -> Self {
        Self {
            results: initial_results,
            ..Self::default()
        }
    }

    pub fn query(&self) -> SearchQuery {
        SearchQuery {
            mode: self.mode,
            term: self.term.clone(),
            capacity: self.capacity,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    SwitchMode(SearchMode),
    EditTerm(String),
    SelectCapacity(Option<CapacityBracket>),
    SearchSubmitted,
    ResultsResolved { request_id: u64, venues: Vec<Venue> },
}

pub fn reduce(state: SessionState, event: SessionEvent) -> SessionState {
    match event {
        // 切換分頁時清空輸入，避免混用不同欄位的條件
        SessionEvent::SwitchMode(mode) => SessionState {
            mode,
            term: String::new(),
            ..state
        },
        SessionEvent::EditTerm(term) => SessionState { term, ..state },
        SessionEvent::SelectCapacity(capacity) => SessionState { capacity, ..state },
        SessionEvent::SearchSubmitted => SessionState {
            latest_request: state.latest_request + 1,
            ..state
        },
        SessionEvent::ResultsResolved { request_id, venues } => {
            if request_id != state.latest_request {
                tracing::debug!(
                    "Dropping stale results of search #{} (latest is #{})",
                    request_id,
                    state.latest_request
                );
                return state;
            }
            SessionState {
                results: venues,
                committed_request: request_id,
                ..state
            }
        }
    }
}
