//! Search lifecycle. One value, replaced wholesale on every transition.

use super::entities::BusinessContact;

/// State of the current search session.
///
/// Loading never carries an error and a failure never carries data, so the
/// invalid combinations of independent flags cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// Nothing searched yet.
    #[default]
    Idle,
    /// A request is in flight. `previous_search` remembers whether an earlier search completed.
    Loading { previous_search: bool },
    /// The last search completed. May be empty.
    Success(Vec<BusinessContact>),
    /// The last search failed with a user-facing message.
    Failed(String),
}

/// What the renderer shows. Exactly one of these at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchView<'a> {
    Blank,
    Loading,
    Error(&'a str),
    Empty,
    Table(&'a [BusinessContact]),
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SearchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Results currently held. Empty unless the last search succeeded.
    pub fn data(&self) -> &[BusinessContact] {
        match self {
            SearchState::Success(data) => data,
            _ => &[],
        }
    }

    pub fn search_performed(&self) -> bool {
        match self {
            SearchState::Idle => false,
            SearchState::Loading { previous_search } => *previous_search,
            SearchState::Success(_) | SearchState::Failed(_) => true,
        }
    }

    /// Transition into Loading.
    pub fn loading(&self) -> SearchState {
        SearchState::Loading {
            previous_search: self.search_performed(),
        }
    }

    /// Pure mapping from state to view.
    pub fn view(&self) -> SearchView<'_> {
        match self {
            SearchState::Idle => SearchView::Blank,
            SearchState::Loading { .. } => SearchView::Loading,
            SearchState::Failed(message) => SearchView::Error(message),
            SearchState::Success(data) if data.is_empty() => SearchView::Empty,
            SearchState::Success(data) => SearchView::Table(data),
        }
    }
}
