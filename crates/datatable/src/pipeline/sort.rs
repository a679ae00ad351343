//! Sort stage: stable single-column ordering.
//!
//! Values compare by their natural order. Absent values compare as the
//! empty string. Because a column can hold a mix of text and numbers, the
//! comparison is made total by ranking kinds first:
//!
//! 1. empty text (and absent values)
//! 2. numbers, numerically
//! 3. non-empty text, lexicographically
//!
//! The sort is stable in both directions: rows with equal keys keep their
//! input order, so re-sorting tied data never reshuffles it.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::{Record, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header indicator glyph.
    #[must_use]
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => f.write_str("ascending"),
            Self::Descending => f.write_str("descending"),
        }
    }
}

/// The active sort: at most one key at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    /// Field to sort by. `None` keeps the filter-stage order.
    pub key: Option<String>,
    /// Direction for `key`.
    pub direction: SortDirection,
}

impl SortSpec {
    /// No active sort.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Sort by `key` in `direction`.
    #[must_use]
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: Some(key.into()),
            direction,
        }
    }

    /// Returns the direction if `key` is the active sort key.
    #[must_use]
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        match &self.key {
            Some(active) if active == key => Some(self.direction),
            _ => None,
        }
    }

    /// Applies a header click on `key`.
    ///
    /// The active ascending key flips to descending. Any other key, or the
    /// active key while descending, becomes ascending.
    pub fn toggle(&mut self, key: &str) {
        if self.direction_for(key) == Some(SortDirection::Ascending) {
            self.direction = SortDirection::Descending;
        } else {
            self.key = Some(key.to_string());
            self.direction = SortDirection::Ascending;
        }
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Absent => 0,
        Value::Text(s) if s.is_empty() => 0,
        Value::Number(_) => 1,
        Value::Text(_) => 2,
    }
}

/// Natural ordering of two values.
#[must_use]
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.total_cmp(y),
        (Value::Text(x), Value::Text(y)) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

/// Compares two records on `key` in `direction`.
#[must_use]
pub fn compare_records(a: &Record, b: &Record, key: &str, direction: SortDirection) -> Ordering {
    let ord = compare_values(a.get(key), b.get(key));
    match direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

/// Returns `rows` ordered per `spec`. Without a key the input order is kept.
///
/// # Example
///
/// ```rust
/// use datatable::pipeline::{sort, SortDirection, SortSpec};
/// use datatable::record::Record;
///
/// let rows = vec![
///     Record::new().with("lastName", "Smith"),
///     Record::new().with("lastName", "Scott"),
/// ];
/// let refs: Vec<&Record> = rows.iter().collect();
/// let sorted = sort(&refs, &SortSpec::by("lastName", SortDirection::Ascending));
/// assert_eq!(sorted[0].get("lastName").display(), "Scott");
/// ```
#[must_use]
pub fn sort<'a>(rows: &[&'a Record], spec: &SortSpec) -> Vec<&'a Record> {
    let mut out = rows.to_vec();
    if let Some(key) = &spec.key {
        out.sort_by(|a, b| compare_records(a, b, key, spec.direction));
    }
    out
}

/// Like [`sort`], but over positions into `records`.
#[must_use]
pub fn sort_indices(records: &[Record], indices: &[usize], spec: &SortSpec) -> Vec<usize> {
    let mut out = indices.to_vec();
    if let Some(key) = &spec.key {
        out.sort_by(|&a, &b| compare_records(&records[a], &records[b], key, spec.direction));
    }
    out
}
