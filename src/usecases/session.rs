//! Lead session: the three form inputs plus the search lifecycle.
//!
//! Owns the only mutable state in the application. Every transition replaces
//! `SearchState` as a whole.

use crate::domain::{
    BusinessContact, DEFAULT_RESULTS_COUNT, DomainError, SearchParams, SearchState, SearchView,
};
use crate::usecases::LeadSearchService;
use tracing::{debug, info};

/// Shown when a failure carries no message.
const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

#[derive(Debug, Clone)]
pub struct LeadSession {
    niche: String,
    location: String,
    /// Raw count as entered; clamped on submit.
    results_count: i64,
    state: SearchState,
}

impl Default for LeadSession {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadSession {
    pub fn new() -> Self {
        Self {
            niche: String::new(),
            location: String::new(),
            results_count: DEFAULT_RESULTS_COUNT,
            state: SearchState::Idle,
        }
    }

    pub fn niche(&self) -> &str {
        &self.niche
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn results_count(&self) -> i64 {
        self.results_count
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn view(&self) -> SearchView<'_> {
        self.state.view()
    }

    /// Leads from the last successful search (empty otherwise).
    pub fn results(&self) -> &[BusinessContact] {
        self.state.data()
    }

    pub fn set_niche(&mut self, niche: impl Into<String>) {
        self.niche = niche.into();
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn set_results_count(&mut self, count: i64) {
        self.results_count = count;
    }

    /// Submit is enabled only with both text fields filled and no request in flight.
    pub fn can_submit(&self) -> bool {
        !self.niche.is_empty() && !self.location.is_empty() && !self.state.is_loading()
    }

    /// Enter Loading and hand back clamped params. `None` (and no change) when submit is disabled.
    pub fn begin_search(&mut self) -> Option<SearchParams> {
        if !self.can_submit() {
            debug!("submit ignored: inputs incomplete or search in flight");
            return None;
        }
        let params = SearchParams::new(&self.niche, &self.location, self.results_count);
        self.state = self.state.loading();
        Some(params)
    }

    /// Leave Loading with the outcome. Failure drops any previous results.
    pub fn complete_search(&mut self, outcome: Result<Vec<BusinessContact>, DomainError>) {
        self.state = match outcome {
            Ok(data) => SearchState::Success(data),
            Err(e) => {
                let message = e.to_string();
                if message.is_empty() {
                    SearchState::Failed(UNEXPECTED_ERROR_MESSAGE.to_string())
                } else {
                    SearchState::Failed(message)
                }
            }
        };
    }

    /// Full submit: begin, call the service, complete. Returns false when submit was disabled.
    pub async fn search(&mut self, service: &LeadSearchService) -> bool {
        self.search_with(service, |_| (), |_| ()).await
    }

    /// Like [`search`](Self::search), with hooks around the request.
    ///
    /// `on_start` runs after Loading is entered and its value is handed to
    /// `on_done` once the outcome is known, before state leaves Loading.
    /// Neither runs when submit is disabled.
    pub async fn search_with<H>(
        &mut self,
        service: &LeadSearchService,
        on_start: impl FnOnce(&SearchParams) -> H,
        on_done: impl FnOnce(H),
    ) -> bool {
        let Some(params) = self.begin_search() else {
            return false;
        };
        let handle = on_start(&params);
        let outcome = service.find_businesses(&params).await;
        on_done(handle);
        if let Err(e) = &outcome {
            info!(error = %e, "search finished with error");
        }
        self.complete_search(outcome);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockSearchAdapter;
    use std::cell::Cell;
    use std::sync::Arc;

    fn lead(name: &str) -> BusinessContact {
        BusinessContact {
            name: name.to_string(),
            website: "https://example.com".to_string(),
            phone: None,
            email: None,
            address: None,
            description: "d".to_string(),
        }
    }

    fn filled() -> LeadSession {
        let mut s = LeadSession::new();
        s.set_niche("Roofers");
        s.set_location("Denver");
        s
    }

    #[test]
    fn test_defaults() {
        let s = LeadSession::new();
        assert_eq!(s.results_count(), 10);
        assert_eq!(s.state(), &SearchState::Idle);
        assert!(!s.can_submit());
    }

    #[test]
    fn test_can_submit_requires_both_fields() {
        let mut s = LeadSession::new();
        s.set_niche("Roofers");
        assert!(!s.can_submit());
        s.set_location("Denver");
        assert!(s.can_submit());
        s.set_niche("");
        assert!(!s.can_submit());
    }

    #[test]
    fn test_whitespace_only_fields_are_submittable() {
        let mut s = LeadSession::new();
        s.set_niche("   ");
        s.set_location("\t");
        assert!(s.can_submit());

        let params = s.begin_search().unwrap();
        assert_eq!(params.niche, "   ");
        assert_eq!(params.location, "\t");
        assert!(s.state().is_loading());
    }

    #[test]
    fn test_begin_search_disabled_is_noop() {
        let mut s = LeadSession::new();
        s.set_niche("Roofers");
        assert!(s.begin_search().is_none());
        assert_eq!(s.state(), &SearchState::Idle);
    }

    #[test]
    fn test_begin_search_clamps_and_blocks_resubmit() {
        for (raw, expected) in [(1, 1), (0, 1), (51, 50), (50, 50), (-7, 1)] {
            let mut s = filled();
            s.set_results_count(raw);
            let params = s.begin_search().unwrap();
            assert_eq!(params.count, expected, "raw {raw}");
            assert!(s.state().is_loading());
            assert!(!s.can_submit());
            assert!(s.begin_search().is_none());
        }
    }

    #[test]
    fn test_complete_search_success_and_failure() {
        let mut s = filled();
        s.begin_search();
        s.complete_search(Ok(vec![lead("A"), lead("B")]));
        assert_eq!(s.results().len(), 2);
        assert!(s.can_submit());

        s.begin_search();
        s.complete_search(Err(DomainError::search_failed()));
        assert!(s.results().is_empty());
        assert!(s.state().search_performed());
        assert_eq!(
            s.state().error(),
            Some("Failed to fetch business data. Please try again.")
        );
    }

    #[test]
    fn test_complete_search_blank_error_message() {
        let mut s = filled();
        s.begin_search();
        s.complete_search(Err(DomainError::Search(String::new())));
        assert_eq!(s.state().error(), Some(UNEXPECTED_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_search_with_runs_hooks_once() {
        let service = LeadSearchService::new(Arc::new(MockSearchAdapter::with_response("[]")));
        let started = Cell::new(0);
        let done = Cell::new(0);

        let mut s = filled();
        let ran = s
            .search_with(
                &service,
                |params| {
                    started.set(started.get() + 1);
                    params.niche.clone()
                },
                |niche| {
                    assert_eq!(niche, "Roofers");
                    done.set(done.get() + 1);
                },
            )
            .await;
        assert!(ran);
        assert_eq!((started.get(), done.get()), (1, 1));
        assert_eq!(s.view(), SearchView::Empty);

        let mut blank = LeadSession::new();
        let ran = blank
            .search_with(&service, |_| started.set(99), |_| done.set(99))
            .await;
        assert!(!ran);
        assert_eq!((started.get(), done.get()), (1, 1));
        assert_eq!(blank.state(), &SearchState::Idle);
    }
}
