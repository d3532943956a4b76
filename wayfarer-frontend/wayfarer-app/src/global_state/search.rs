use leptos::prelude::*;
use leptos::task::spawn_local;
use wayfarer_api_types::search::{SearchQuery, SearchResponse};

use crate::api;
use crate::error::{AppError, AppResult, SEARCH_FAILED_MESSAGE};

/// Where the results area currently is in its lifecycle. Errors are not a
/// phase: they live in the modal signal so an earlier result set survives a
/// failed follow-up query being dismissed.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
    Loaded(SearchResponse),
}

/// Context owning the search box text, the results lifecycle and the error
/// modal. One instance is provided at the app root.
#[derive(Clone, Copy)]
pub struct SearchState {
    /// Current contents of the search input.
    pub input: RwSignal<String>,
    pub phase: RwSignal<SearchPhase>,
    /// Message for the error modal; `None` hides it.
    pub error: RwSignal<Option<String>>,
    /// Submission counter. Responses carry the value they were issued under
    /// and are dropped when a newer submission has superseded them.
    generation: RwSignal<u64>,
}

pub fn provide_search_state() {
    provide_context(SearchState::new());
}

pub fn use_search_state() -> SearchState {
    expect_context::<SearchState>()
}

impl SearchState {
    fn new() -> Self {
        Self {
            input: RwSignal::new(String::new()),
            phase: RwSignal::new(SearchPhase::default()),
            error: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase.get(), SearchPhase::Loading)
    }

    /// Submits whatever is in the search box. A blank query short-circuits to
    /// the validation message without touching the network.
    pub fn submit(&self) {
        let query = match SearchQuery::new(self.input.get_untracked()).normalized() {
            Some(query) => query.query,
            None => {
                self.error.set(Some(AppError::EmptyQuery.user_message()));
                return;
            }
        };
        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);
        self.phase.set(SearchPhase::Loading);

        let state = *self;
        spawn_local(async move {
            let outcome = api::search(&query).await;
            if state.generation.get_untracked() != generation {
                log::debug!("dropping stale response for query {query:?}");
                return;
            }
            state.finish(outcome);
        });
    }

    /// Fills the search box with a suggestion and runs it immediately.
    pub fn submit_suggestion(&self, suggestion: &str) {
        self.input.set(suggestion.to_string());
        self.submit();
    }

    fn finish(&self, outcome: AppResult<SearchResponse>) {
        match classify(outcome) {
            Ok(response) => self.phase.set(SearchPhase::Loaded(response)),
            Err(err) => {
                if let AppError::System(cause) = &err {
                    log::error!("search request failed: {cause}");
                }
                self.phase.set(SearchPhase::Idle);
                self.error.set(Some(err.user_message()));
            }
        }
    }

    pub fn dismiss_error(&self) {
        self.error.set(None);
    }
}

/// Folds the backend's `success` flag into the error taxonomy: a transport
/// `Err` stays as-is, a `success:false` body becomes an application error
/// with the backend's message (or the stock fallback).
fn classify(outcome: AppResult<SearchResponse>) -> AppResult<SearchResponse> {
    let response = outcome?;
    if response.success {
        Ok(response)
    } else {
        Err(AppError::Search(
            response
                .error
                .unwrap_or_else(|| SEARCH_FAILED_MESSAGE.to_string()),
        ))
    }
}
