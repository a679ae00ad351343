//! Filter stage: case-insensitive substring search over whole records.

use crate::record::Record;

/// Returns the records whose lowercased value concatenation contains the
/// lowercased `term`, in their original order.
///
/// Every field participates, whether or not a column shows it. An empty
/// term matches everything.
///
/// # Example
///
/// ```rust
/// use datatable::pipeline::filter;
/// use datatable::record::Record;
///
/// let rows = vec![
///     Record::new().with("name", "Alice"),
///     Record::new().with("name", "Bob"),
/// ];
/// let hits = filter(&rows, "ALI");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].get("name").display(), "Alice");
/// ```
#[must_use]
pub fn filter<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    matching_indices(records, term)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

/// Like [`filter`], but returns positions into `records`.
#[must_use]
pub fn matching_indices(records: &[Record], term: &str) -> Vec<usize> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return (0..records.len()).collect();
    }
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.search_text().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

/// Precomputed lowercased haystacks for a fixed record set.
///
/// Produces the same result as [`matching_indices`] without re-stringifying
/// every record on each keystroke.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    haystacks: Vec<String>,
}

impl SearchIndex {
    /// Builds the index for `records`.
    #[must_use]
    pub fn new(records: &[Record]) -> Self {
        Self {
            haystacks: records.iter().map(Record::search_text).collect(),
        }
    }

    /// Returns the number of indexed records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.haystacks.len()
    }

    /// Returns true if no records are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.haystacks.is_empty()
    }

    /// Returns positions of records matching `term`.
    #[must_use]
    pub fn matching(&self, term: &str) -> Vec<usize> {
        let needle = term.to_lowercase();
        self.haystacks
            .iter()
            .enumerate()
            .filter(|(_, hay)| needle.is_empty() || hay.contains(&needle))
            .map(|(i, _)| i)
            .collect()
    }
}
