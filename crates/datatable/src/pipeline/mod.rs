//! The presentation pipeline: filter → sort → paginate → metadata.
//!
//! Each stage is a pure function and can be used on its own. [`run`]
//! composes them in the fixed order: sorting only ever sees filtered rows
//! and pagination only ever sees sorted rows.
//!
//! # Example
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use datatable::pipeline::{self, SortSpec};
//! use datatable::record::Record;
//!
//! let rows: Vec<Record> = (0..12)
//!     .map(|i| Record::new().with("n", i))
//!     .collect();
//!
//! let out = pipeline::run(&rows, "1", &SortSpec::none(), NonZeroUsize::new(2).unwrap(), 1);
//! // "1", "10", "11"
//! assert_eq!(out.meta.total, 3);
//! assert_eq!(out.meta.page_count, 2);
//! assert_eq!(out.rows.len(), 2);
//! ```

mod filter;
mod metadata;
mod paginate;
mod sort;

use std::num::NonZeroUsize;

pub use filter::{SearchIndex, filter, matching_indices};
pub use metadata::{PageMeta, page_count, page_meta};
pub use paginate::{page_bounds, paginate};
pub use sort::{SortDirection, SortSpec, compare_records, compare_values, sort, sort_indices};

use crate::record::Record;

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct Output<'a> {
    /// Rows of the requested page.
    pub rows: Vec<&'a Record>,
    /// Pagination metadata.
    pub meta: PageMeta,
}

/// Runs every stage over `records`.
#[must_use]
pub fn run<'a>(
    records: &'a [Record],
    term: &str,
    spec: &SortSpec,
    page_size: NonZeroUsize,
    page: usize,
) -> Output<'a> {
    let filtered = filter(records, term);
    let ordered = sort(&filtered, spec);
    let rows = paginate(&ordered, page_size, page).to_vec();
    let meta = page_meta(filtered.len(), page_size, page);
    tracing::trace!(
        total = records.len(),
        filtered = filtered.len(),
        visible = rows.len(),
        "Pipeline run"
    );
    Output { rows, meta }
}
