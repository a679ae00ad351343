//! Metadata calculator: page count, display range and navigation flags.

use std::num::NonZeroUsize;

use serde::Serialize;

/// Derived pagination facts for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Size of the filtered set.
    pub total: usize,
    /// Rows per page.
    pub page_size: usize,
    /// 1-indexed current page.
    pub current_page: usize,
    /// `ceil(total / page_size)`; zero when `total` is zero.
    pub page_count: usize,
    /// 1-indexed inclusive `(start, end)` of the rows shown.
    ///
    /// `None` when nothing is shown: the filtered set is empty, or the
    /// current page is past the end.
    pub range: Option<(usize, usize)>,
    /// Whether "previous" is enabled.
    pub has_prev: bool,
    /// Whether "next" is enabled.
    pub has_next: bool,
}

impl PageMeta {
    /// Returns true when the no-data presentation applies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// "Showing X to Y of Z entries", or `None` when nothing is shown.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        self.range
            .map(|(start, end)| format!("Showing {start} to {end} of {} entries", self.total))
    }
}

/// `ceil(total / page_size)`.
#[must_use]
pub fn page_count(total: usize, page_size: NonZeroUsize) -> usize {
    total.div_ceil(page_size.get())
}

/// Computes [`PageMeta`] from the filtered-set size and pagination state.
///
/// # Example
///
/// ```rust
/// use std::num::NonZeroUsize;
/// use datatable::pipeline::page_meta;
///
/// let meta = page_meta(23, NonZeroUsize::new(10).unwrap(), 3);
/// assert_eq!(meta.page_count, 3);
/// assert_eq!(meta.range, Some((21, 23)));
/// assert!(meta.has_prev);
/// assert!(!meta.has_next);
/// ```
#[must_use]
pub fn page_meta(total: usize, page_size: NonZeroUsize, current_page: usize) -> PageMeta {
    let page_count = page_count(total, page_size);
    let size = page_size.get();
    let range = current_page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(size))
        .filter(|&offset| offset < total)
        .map(|offset| (offset + 1, offset.saturating_add(size).min(total)));

    PageMeta {
        total,
        page_size: size,
        current_page,
        page_count,
        range,
        has_prev: current_page > 1,
        has_next: current_page < page_count,
    }
}
