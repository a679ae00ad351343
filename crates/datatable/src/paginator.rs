//! Pagination state and page indicator.
//!
//! Pages are 1-indexed to match what the user sees. The page is kept
//! within `[1, max(total_pages, 1)]` by every navigation method; the pure
//! [`paginate`](crate::pipeline::paginate) stage does not clamp.
//!
//! # Example
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use datatable::paginator::Paginator;
//!
//! let mut paginator = Paginator::new(NonZeroUsize::new(10).unwrap());
//! paginator.set_total_pages_from_items(23);
//!
//! paginator.next_page();
//! assert_eq!(paginator.page(), 2);
//!
//! let (start, end) = paginator.slice_bounds(23);
//! assert_eq!((start, end), (10, 20));
//! ```

use std::num::NonZeroUsize;

use crate::pipeline::{page_bounds, page_count};

/// Page indicator style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// Arabic numerals: "1/5"
    #[default]
    Arabic,
    /// Dot indicators: "●○○○○"
    Dots,
}

/// Pagination model.
#[derive(Debug, Clone)]
pub struct Paginator {
    /// Indicator style.
    pub display_type: Type,
    /// Current page (1-indexed).
    page: usize,
    /// Rows per page.
    page_size: NonZeroUsize,
    /// Total number of pages; zero when there is nothing to show.
    total_pages: usize,
    /// Glyph for the active page in Dots mode.
    pub active_dot: String,
    /// Glyph for inactive pages in Dots mode.
    pub inactive_dot: String,
}

impl Paginator {
    /// Creates a paginator on page 1.
    #[must_use]
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            display_type: Type::Arabic,
            page: 1,
            page_size,
            total_pages: 0,
            active_dot: "●".to_string(),
            inactive_dot: "○".to_string(),
        }
    }

    /// Sets the indicator style (builder pattern).
    #[must_use]
    pub fn display_type(mut self, t: Type) -> Self {
        self.display_type = t;
        self
    }

    /// Returns the current page (1-indexed).
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the rows per page.
    #[must_use]
    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Returns the total number of pages.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Changes the page size and returns to page 1.
    pub fn set_page_size(&mut self, size: NonZeroUsize) {
        self.page_size = size;
        self.page = 1;
    }

    /// Recomputes the page count for `items` rows and returns it.
    ///
    /// The current page is left alone; see [`clamp`](Self::clamp).
    pub fn set_total_pages_from_items(&mut self, items: usize) -> usize {
        self.total_pages = page_count(items, self.page_size);
        self.total_pages
    }

    /// Pulls the current page back into `[1, max(total_pages, 1)]`.
    pub fn clamp(&mut self) {
        self.page = self.page.clamp(1, self.total_pages.max(1));
    }

    /// Sets the current page, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.clamp();
    }

    /// Returns to page 1.
    pub fn first_page(&mut self) {
        self.page = 1;
    }

    /// Jumps to the last page.
    pub fn last_page(&mut self) {
        self.page = self.total_pages.max(1);
    }

    /// Moves back one page; no-op on the first page.
    pub fn prev_page(&mut self) {
        if !self.on_first_page() {
            self.page -= 1;
        }
    }

    /// Moves forward one page; no-op on the last page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Returns whether the current page is the first one.
    #[must_use]
    pub fn on_first_page(&self) -> bool {
        self.page <= 1
    }

    /// Returns whether there is no page after the current one.
    #[must_use]
    pub fn on_last_page(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Returns `[start, end)` of the current page for `len` rows.
    #[must_use]
    pub fn slice_bounds(&self, len: usize) -> (usize, usize) {
        page_bounds(len, self.page_size, self.page)
    }

    /// Renders the page indicator.
    #[must_use]
    pub fn view(&self) -> String {
        match self.display_type {
            Type::Dots => self.dots_view(),
            Type::Arabic => format!("{}/{}", self.page, self.total_pages.max(1)),
        }
    }

    fn dots_view(&self) -> String {
        (1..=self.total_pages.max(1))
            .map(|i| {
                if i == self.page {
                    self.active_dot.as_str()
                } else {
                    self.inactive_dot.as_str()
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paginator(size: usize, items: usize) -> Paginator {
        let mut p = Paginator::new(NonZeroUsize::new(size).unwrap());
        p.set_total_pages_from_items(items);
        p
    }

    #[test]
    fn test_paginator_new() {
        let p = Paginator::new(NonZeroUsize::new(5).unwrap());
        assert_eq!(p.page(), 1);
        assert_eq!(p.page_size().get(), 5);
        assert_eq!(p.total_pages(), 0);
    }

    #[test]
    fn test_navigation_clamps_at_bounds() {
        let mut p = paginator(10, 23);
        assert_eq!(p.total_pages(), 3);
        assert!(p.on_first_page());

        p.prev_page();
        assert_eq!(p.page(), 1);

        p.next_page();
        p.next_page();
        assert_eq!(p.page(), 3);
        assert!(p.on_last_page());

        p.next_page();
        assert_eq!(p.page(), 3);

        p.prev_page();
        assert_eq!(p.page(), 2);
    }

    #[test]
    fn test_no_pages_means_no_navigation() {
        let mut p = paginator(10, 0);
        p.next_page();
        assert_eq!(p.page(), 1);
        assert!(p.on_first_page());
        assert!(p.on_last_page());
    }

    #[test]
    fn test_set_page_clamps() {
        let mut p = paginator(10, 23);
        p.set_page(99);
        assert_eq!(p.page(), 3);
        p.set_page(0);
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn test_first_and_last_page() {
        let mut p = paginator(4, 10);
        p.last_page();
        assert_eq!(p.page(), 3);
        p.first_page();
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut p = paginator(2, 10);
        p.set_page(4);
        p.set_page_size(NonZeroUsize::new(3).unwrap());
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn test_slice_bounds() {
        let mut p = paginator(3, 10);
        assert_eq!(p.slice_bounds(10), (0, 3));
        p.last_page();
        assert_eq!(p.slice_bounds(10), (9, 10));
    }

    #[test]
    fn test_arabic_view() {
        let mut p = paginator(10, 45);
        assert_eq!(p.view(), "1/5");
        p.next_page();
        assert_eq!(p.view(), "2/5");
        assert_eq!(paginator(10, 0).view(), "1/1");
    }

    #[test]
    fn test_dots_view() {
        let mut p = paginator(1, 4).display_type(Type::Dots);
        assert_eq!(p.view(), "●○○○");
        p.next_page();
        assert_eq!(p.view(), "○●○○");
    }
}
