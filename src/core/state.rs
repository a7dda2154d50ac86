//! Pager state as an immutable value.
//!
//! Every transition consumes the current state and returns the next one, so
//! the two views (full list and filtered list) can only change through
//! [`PagerState::showing`], [`PagerState::filtered`] and [`PagerState::cleared`].

use super::entry::{Collection, Entry};

/// Non-empty set of collection indices produced by a search, in collection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    indices: Vec<usize>,
}

impl SearchResult {
    /// Returns `None` for an empty match set.
    pub fn new(indices: Vec<usize>) -> Option<Self> {
        if indices.is_empty() {
            None
        } else {
            Some(Self { indices })
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resolve the indices against the collection they were computed from.
    pub fn entries<'a>(&'a self, collection: &'a Collection) -> impl Iterator<Item = &'a Entry> {
        self.indices
            .iter()
            .filter_map(move |&index| collection.get(index))
    }
}

/// Which list pagination runs over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Full,
    Filtered(SearchResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerState {
    current_page: usize,
    view: View,
}

impl Default for PagerState {
    fn default() -> Self {
        Self::initial()
    }
}

impl PagerState {
    /// Page 1 of the full list.
    pub fn initial() -> Self {
        Self {
            current_page: 1,
            view: View::Full,
        }
    }

    /// Same view, different page. Page 0 is treated as page 1.
    pub fn showing(self, page: usize) -> Self {
        Self {
            current_page: page.max(1),
            ..self
        }
    }

    /// Switch to a search result, starting over at page 1.
    pub fn filtered(self, result: SearchResult) -> Self {
        Self {
            current_page: 1,
            view: View::Filtered(result),
        }
    }

    /// Drop any search result and go back to page 1 of the full list.
    pub fn cleared(self) -> Self {
        Self::initial()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn is_search_active(&self) -> bool {
        matches!(self.view, View::Filtered(_))
    }

    pub fn search_result(&self) -> Option<&SearchResult> {
        match &self.view {
            View::Filtered(result) => Some(result),
            View::Full => None,
        }
    }

    /// Number of entries in the list the current view paginates.
    pub fn source_len(&self, collection: &Collection) -> usize {
        match &self.view {
            View::Full => collection.len(),
            View::Filtered(result) => result.len(),
        }
    }
}
