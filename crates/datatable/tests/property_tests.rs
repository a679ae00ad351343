use std::num::NonZeroUsize;

use datatable::paginator::Paginator;
use datatable::pipeline::{
    SortDirection, SortSpec, filter, matching_indices, page_count, page_meta, paginate, sort,
    sort_indices,
};
use datatable::record::{Record, Value as CellValue};
use proptest::prelude::*;

fn value_strategy() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        "[a-cA-C ]{0,4}".prop_map(CellValue::from),
        (0i32..20).prop_map(CellValue::from),
        Just(CellValue::Absent),
    ]
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (value_strategy(), value_strategy(), 0u32..1000).prop_map(|(a, b, id)| {
        Record::new().with("a", a).with("b", b).with("id", id)
    })
}

fn records_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record_strategy(), 0..40)
}

proptest! {
    #[test]
    fn test_filter_is_sound_and_complete(
        records in records_strategy(),
        term in "[a-cA-C0-9 ]{0,3}"
    ) {
        let hits = matching_indices(&records, &term);
        let needle = term.to_lowercase();
        for (i, record) in records.iter().enumerate() {
            let matches = record.search_text().contains(&needle);
            prop_assert_eq!(hits.contains(&i), matches);
        }
        // original relative order
        prop_assert!(hits.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_term_is_identity(records in records_strategy()) {
        let all = filter(&records, "");
        prop_assert_eq!(all.len(), records.len());
        for (hit, record) in all.iter().zip(&records) {
            prop_assert!(std::ptr::eq(*hit, record));
        }
    }

    #[test]
    fn test_sort_is_stable_permutation(
        records in records_strategy(),
        key in prop_oneof![Just("a"), Just("b"), Just("missing")],
        descending in any::<bool>()
    ) {
        let direction = if descending { SortDirection::Descending } else { SortDirection::Ascending };
        let spec = SortSpec::by(key, direction);
        let input: Vec<usize> = (0..records.len()).collect();
        let out = sort_indices(&records, &input, &spec);

        let mut seen = out.clone();
        seen.sort_unstable();
        prop_assert_eq!(seen, input);

        // ties keep input order
        for w in out.windows(2) {
            let (x, y) = (&records[w[0]], &records[w[1]]);
            if x.get(key) == y.get(key) || (x.get(key).display().is_empty() && y.get(key).display().is_empty()) {
                prop_assert!(w[0] < w[1]);
            }
        }
    }

    #[test]
    fn test_descending_reverses_ascending_without_ties(ids in prop::collection::hash_set(0u32..10_000, 0..40)) {
        let records: Vec<Record> = ids.into_iter().map(|id| Record::new().with("id", id)).collect();
        let refs: Vec<&Record> = records.iter().collect();

        let mut spec = SortSpec::none();
        spec.toggle("id");
        let asc = sort(&refs, &spec);
        spec.toggle("id");
        let desc = sort(&refs, &spec);

        let mut reversed = asc.clone();
        reversed.reverse();
        prop_assert_eq!(desc, reversed);
    }

    #[test]
    fn test_pages_reassemble_ordered_set(len in 0usize..200, size in 1usize..30) {
        let items: Vec<usize> = (0..len).collect();
        let size = NonZeroUsize::new(size).unwrap();
        let pages = page_count(len, size);

        let mut joined = Vec::new();
        for page in 1..=pages {
            let slice = paginate(&items, size, page);
            prop_assert!(!slice.is_empty());
            prop_assert!(slice.len() <= size.get());
            joined.extend_from_slice(slice);
        }
        prop_assert_eq!(joined, items);
        prop_assert!(paginate(&(0..len).collect::<Vec<_>>(), size, pages + 1).is_empty());
    }

    #[test]
    fn test_meta_matches_slice(len in 0usize..200, size in 1usize..30, page in 0usize..20) {
        let size = NonZeroUsize::new(size).unwrap();
        let items: Vec<usize> = (0..len).collect();
        let meta = page_meta(len, size, page);
        let slice = paginate(&items, size, page);

        prop_assert_eq!(meta.page_count, len.div_ceil(size.get()));
        match meta.range {
            Some((start, end)) => {
                prop_assert_eq!(end - start + 1, slice.len());
                prop_assert_eq!(slice[0] + 1, start);
            }
            None => prop_assert!(slice.is_empty()),
        }
        prop_assert_eq!(meta.has_prev, page > 1);
        prop_assert_eq!(meta.has_next, page < meta.page_count);
    }

    #[test]
    fn test_paginator_stays_in_range(
        items in 0usize..500,
        size in 1usize..50,
        moves in prop::collection::vec(0u8..4, 0..30)
    ) {
        let mut p = Paginator::new(NonZeroUsize::new(size).unwrap());
        let pages = p.set_total_pages_from_items(items);
        for m in moves {
            match m {
                0 => p.next_page(),
                1 => p.prev_page(),
                2 => p.last_page(),
                _ => p.first_page(),
            }
            prop_assert!(p.page() >= 1);
            prop_assert!(p.page() <= pages.max(1));
        }
    }
}
