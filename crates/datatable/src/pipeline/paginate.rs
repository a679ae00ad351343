//! Paginate stage: a pure window over the ordered rows.

use std::num::NonZeroUsize;

/// Returns `[start, end)` for 1-indexed `page`, clipped to `len`.
///
/// Out-of-range pages (including page 0) yield an empty range at `len`
/// instead of failing; clamping the page is the caller's job.
#[must_use]
pub fn page_bounds(len: usize, page_size: NonZeroUsize, page: usize) -> (usize, usize) {
    let start = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size.get()));
    match start {
        Some(start) if start < len => (start, start.saturating_add(page_size.get()).min(len)),
        _ => (len, len),
    }
}

/// Returns the rows of 1-indexed `page`.
///
/// # Example
///
/// ```rust
/// use std::num::NonZeroUsize;
/// use datatable::pipeline::paginate;
///
/// let items: Vec<u32> = (1..=23).collect();
/// let size = NonZeroUsize::new(10).unwrap();
/// assert_eq!(paginate(&items, size, 3), &[21, 22, 23]);
/// assert!(paginate(&items, size, 4).is_empty());
/// ```
#[must_use]
pub fn paginate<T>(items: &[T], page_size: NonZeroUsize, page: usize) -> &[T] {
    let (start, end) = page_bounds(items.len(), page_size, page);
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(page_bounds(10, size(3), 1), (0, 3));
        assert_eq!(page_bounds(10, size(3), 2), (3, 6));
        assert_eq!(page_bounds(10, size(3), 4), (9, 10));
    }

    #[test]
    fn test_out_of_range_is_empty() {
        assert_eq!(page_bounds(10, size(3), 5), (10, 10));
        assert_eq!(page_bounds(10, size(3), 0), (10, 10));
        assert_eq!(page_bounds(0, size(3), 1), (0, 0));
        assert_eq!(page_bounds(10, size(usize::MAX), usize::MAX), (10, 10));
    }

    #[test]
    fn test_large_page_size_clips() {
        let items = [1, 2, 3];
        assert_eq!(paginate(&items, size(usize::MAX), 1), &[1, 2, 3]);
    }

    #[test]
    fn test_pages_reassemble_input() {
        let items: Vec<usize> = (0..23).collect();
        let mut joined = Vec::new();
        for page in 1..=3 {
            joined.extend_from_slice(paginate(&items, size(10), page));
        }
        assert_eq!(joined, items);
        assert_eq!(paginate(&items, size(10), 3).len(), 3);
    }
}
