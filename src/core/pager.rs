use super::entry::{Collection, Entry};
use super::matcher::{QueryMatcher, SearchMode};
use super::state::{PagerState, SearchResult, View};
use crate::display::markup::{self, Binding, Control};
use crate::display::pagination::{clamp_page, page_bounds, page_count_for_len};
use crate::display::surface::{Region, Surface};
use crate::error::PagerError;
use log::{debug, info, warn};

/// Tunables for a [`Pager`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerOptions {
    /// Entries per page
    pub page_size: usize,
    /// Interpretation of multi-character queries
    pub search_mode: SearchMode,
    /// Pull out-of-range pages back to the nearest valid page
    pub clamp_pages: bool,
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self {
            page_size: 10,
            search_mode: SearchMode::Literal,
            clamp_pages: true,
        }
    }
}

impl PagerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_search_mode(mut self, search_mode: SearchMode) -> Self {
        self.search_mode = search_mode;
        self
    }

    pub fn with_clamp_pages(mut self, clamp_pages: bool) -> Self {
        self.clamp_pages = clamp_pages;
        self
    }
}

/// Which branch a search took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank query; nothing happened.
    Ignored,
    /// Nothing matched; the user was notified.
    NoMatch,
    /// Pattern mode could not compile the query; the user was notified.
    InvalidPattern,
    /// The search is active with this many entries.
    Matched { count: usize },
}

/// Paginates a collection into a [`Surface`] and filters it by name.
pub struct Pager<'a, S: Surface> {
    collection: &'a Collection,
    options: PagerOptions,
    state: PagerState,
    bindings: Vec<Binding>,
    surface: S,
}

impl<'a, S: Surface> Pager<'a, S> {
    /// Create a pager on page 1 of the full list. Nothing is rendered until
    /// the first [`Pager::show_page`].
    pub fn new(
        collection: &'a Collection,
        options: PagerOptions,
        surface: S,
    ) -> Result<Self, PagerError> {
        if options.page_size == 0 {
            return Err(PagerError::InvalidPageSize);
        }

        Ok(Self {
            collection,
            options,
            state: PagerState::initial(),
            bindings: Vec::new(),
            surface,
        })
    }

    /// Render `page` of the active list along with fresh controls.
    pub fn show_page(&mut self, page: usize) {
        let total_pages = self.page_count();
        let shown = if self.options.clamp_pages {
            clamp_page(page, total_pages)
        } else {
            page.max(1)
        };
        if shown != page {
            debug!(
                "Requested page {} is outside 1..={}, showing page {}",
                page, total_pages, shown
            );
        }

        self.state = std::mem::take(&mut self.state).showing(shown);

        let entries = self.page_entries(shown);
        debug!(
            "Rendering page {} of {} ({} entries, search active: {})",
            shown,
            total_pages,
            entries.len(),
            self.state.is_search_active()
        );
        let items = markup::render_list_items(entries);
        self.surface.replace_region(Region::List, &items);

        self.render_controls(total_pages);
    }

    /// Re-render the page links and search box for `num_pages`.
    ///
    /// Replaces every binding from the previous render.
    pub fn render_controls(&mut self, num_pages: usize) {
        let controls = markup::render_controls(
            num_pages,
            self.state.current_page(),
            self.state.is_search_active(),
        );
        self.bindings = controls.bindings().cloned().collect();
        self.surface
            .replace_region(Region::Pagination, &controls.pagination);
        self.surface.replace_region(Region::Search, &controls.search);
    }

    /// Filter the collection by name and show page 1 of the matches.
    ///
    /// The query is trimmed before it is classified, so `" A"` searches by
    /// the initial `A` rather than for the text `" A"`. Blank queries are
    /// ignored. When nothing matches the user is notified
    /// and the pager keeps its current view.
    pub fn search_students(&mut self, query: &str) -> SearchOutcome {
        let matcher = match QueryMatcher::compile(query, self.options.search_mode) {
            Ok(Some(matcher)) => matcher,
            Ok(None) => return SearchOutcome::Ignored,
            Err(err) => {
                warn!("Invalid search pattern {:?}: {}", query.trim(), err);
                self.surface.notify(&format!(
                    "\"{}\" is not a valid search pattern",
                    query.trim()
                ));
                return SearchOutcome::InvalidPattern;
            }
        };

        let Some(result) = SearchResult::new(matcher.filter(self.collection)) else {
            info!("Search for {:?} matched no entries", query.trim());
            self.surface.notify(&format!(
                "There is no student with the name of \"{}\"",
                query.trim()
            ));
            return SearchOutcome::NoMatch;
        };

        let count = result.len();
        info!("Search for {:?} matched {} entries", query.trim(), count);
        self.state = std::mem::take(&mut self.state).filtered(result);
        self.show_page(1);
        SearchOutcome::Matched { count }
    }

    /// Leave search mode and show page 1 of the full list.
    pub fn reset_page(&mut self) {
        if self.state.is_search_active() {
            info!("Search cleared");
        }
        self.state = std::mem::take(&mut self.state).cleared();
        self.show_page(1);
    }

    /// Run the control bound to `element_id` in the last render.
    ///
    /// `input` is the current value of the search field; only the search
    /// button reads it.
    pub fn activate(&mut self, element_id: &str, input: &str) -> Result<(), PagerError> {
        let control = self
            .bindings
            .iter()
            .find(|binding| binding.element_id == element_id)
            .map(|binding| binding.control)
            .ok_or_else(|| PagerError::UnknownControl {
                id: element_id.to_string(),
            })?;

        match control {
            Control::Page(page) => self.show_page(page),
            Control::Search => {
                self.search_students(input);
            }
            Control::Reset => self.reset_page(),
        }
        Ok(())
    }

    /// Entries on `page` of the active list, in order.
    pub fn page_entries(&self, page: usize) -> Vec<&'a Entry> {
        let collection = self.collection;
        match self.state.view() {
            View::Full => {
                let entries = collection.entries();
                entries[page_bounds(page, self.options.page_size, entries.len())]
                    .iter()
                    .collect()
            }
            View::Filtered(result) => {
                let indices = result.indices();
                indices[page_bounds(page, self.options.page_size, indices.len())]
                    .iter()
                    .filter_map(|&index| collection.get(index))
                    .collect()
            }
        }
    }

    /// Entries on the current page.
    pub fn visible_entries(&self) -> Vec<&'a Entry> {
        self.page_entries(self.state.current_page())
    }

    /// Pages in the active list.
    pub fn page_count(&self) -> usize {
        page_count_for_len(
            self.state.source_len(self.collection),
            self.options.page_size,
        )
    }

    /// Entries in the active list.
    pub fn source_len(&self) -> usize {
        self.state.source_len(self.collection)
    }

    pub fn state(&self) -> &PagerState {
        &self.state
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn is_search_active(&self) -> bool {
        self.state.is_search_active()
    }

    pub fn page_size(&self) -> usize {
        self.options.page_size
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    pub fn collection(&self) -> &'a Collection {
        self.collection
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
