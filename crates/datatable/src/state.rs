//! Mutable UI state and its transition rules.
//!
//! - Changing the search term or the page size returns to page 1.
//! - Sorting never changes the page.
//! - Previous/next move by exactly one page and stop at the bounds.
//!
//! The page count depends on the filtered set, which this type does not
//! see; callers report it through [`TableState::sync_total`] after each
//! recomputation.

use std::num::NonZeroUsize;

use crate::paginator::Paginator;
use crate::pipeline::SortSpec;

/// Search, sort and pagination state for one table.
#[derive(Debug, Clone)]
pub struct TableState {
    search: String,
    sort: SortSpec,
    paginator: Paginator,
}

impl TableState {
    /// Creates state with an empty search, no sort, on page 1.
    #[must_use]
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            search: String::new(),
            sort: SortSpec::none(),
            paginator: Paginator::new(page_size),
        }
    }

    /// Returns the search term.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns the active sort.
    #[must_use]
    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    /// Returns the paginator.
    #[must_use]
    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Returns a mutable reference to the paginator.
    pub fn paginator_mut(&mut self) -> &mut Paginator {
        &mut self.paginator
    }

    /// Returns the current page (1-indexed).
    #[must_use]
    pub fn page(&self) -> usize {
        self.paginator.page()
    }

    /// Returns the rows per page.
    #[must_use]
    pub fn page_size(&self) -> NonZeroUsize {
        self.paginator.page_size()
    }

    /// Sets the search term. A different term returns to page 1.
    ///
    /// Returns whether the term changed.
    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.search {
            return false;
        }
        tracing::debug!(from = %self.search, to = %term, "Search changed, resetting to page 1");
        self.search = term;
        self.paginator.first_page();
        true
    }

    /// Sets the page size and returns to page 1.
    pub fn set_page_size(&mut self, size: NonZeroUsize) {
        tracing::debug!(page_size = size.get(), "Page size changed, resetting to page 1");
        self.paginator.set_page_size(size);
    }

    /// Applies a header click on `key`. The page is unchanged.
    pub fn sort_by(&mut self, key: &str) {
        self.sort.toggle(key);
        tracing::debug!(key, direction = %self.sort.direction, "Sort changed");
    }

    /// Replaces the sort outright.
    pub fn set_sort(&mut self, spec: SortSpec) {
        self.sort = spec;
    }

    /// Records the size of the filtered set and clamps the page into range.
    pub fn sync_total(&mut self, filtered_len: usize) {
        self.paginator.set_total_pages_from_items(filtered_len);
        let before = self.paginator.page();
        self.paginator.clamp();
        if self.paginator.page() != before {
            tracing::debug!(from = before, to = self.paginator.page(), "Clamped page");
        }
    }

    /// Moves to the next page, if any.
    pub fn next_page(&mut self) {
        self.paginator.next_page();
    }

    /// Moves to the previous page, if any.
    pub fn prev_page(&mut self) {
        self.paginator.prev_page();
    }

    /// Jumps to `page`, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.paginator.set_page(page);
    }
}
