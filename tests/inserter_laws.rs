//! Property-based tests for Inserter.
//!
//! These tests verify that sequences produced by repeated insertion satisfy
//! the expected laws and invariants using proptest.

use proptest::prelude::*;
use sortfold::Inserter;
use std::collections::{BTreeMap, BTreeSet};

/// Strategy for value streams small enough to fold exhaustively.
fn arbitrary_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..50)
}

/// Strategy for keyed pairs with a narrow key range, forcing collisions.
fn arbitrary_keyed_pairs() -> impl Strategy<Value = Vec<(u8, i32)>> {
    prop::collection::vec((0u8..8, -1_000i32..1_000), 0..25)
}

// =============================================================================
// Sortedness Laws
// =============================================================================

proptest! {
    /// Law: a unique-mode fold yields the strictly ascending sequence of
    /// distinct values.
    #[test]
    fn prop_unique_fold_yields_sorted_distinct_values(values in arbitrary_values()) {
        let add: Inserter<i32> = Inserter::new();
        let result = add.accumulate(values.clone());

        let expected: Vec<i32> = values.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
        prop_assert_eq!(result, expected);
    }

    /// Law: a duplicates-mode fold preserves the input as a multiset and
    /// yields it in non-descending order.
    #[test]
    fn prop_duplicates_fold_yields_sorted_multiset(values in arbitrary_values()) {
        let add = Inserter::<i32>::builder().allow_duplicates().build().unwrap();
        let result = add.accumulate(values.clone());

        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(result, expected);
    }
}

// =============================================================================
// Persistence Laws
// =============================================================================

proptest! {
    /// Law: insertion never mutates its input sequence.
    #[test]
    fn prop_insert_leaves_input_unchanged(values in arbitrary_values(), probe: i32) {
        let add: Inserter<i32> = Inserter::new();
        let sequence = add.accumulate(values);
        let snapshot = sequence.clone();

        let _ = add.insert(&sequence, probe);
        prop_assert_eq!(sequence, snapshot);
    }

    /// Law: inserting into the empty seed yields a singleton.
    #[test]
    fn prop_empty_seed_yields_singleton(probe: i32) {
        let unique: Inserter<i32> = Inserter::new();
        let duplicates = Inserter::<i32>::builder().allow_duplicates().build().unwrap();
        let merging = Inserter::<i32>::builder()
            .merge_with(|existing: &i32, incoming: &i32| existing + incoming)
            .build()
            .unwrap();

        prop_assert_eq!(unique.insert(&[], probe), vec![probe]);
        prop_assert_eq!(duplicates.insert(&[], probe), vec![probe]);
        prop_assert_eq!(merging.insert(&[], probe), vec![probe]);
    }
}

// =============================================================================
// Uniqueness Laws
// =============================================================================

proptest! {
    /// Law: re-inserting a value already present in unique mode is a no-op
    /// on the produced sequence.
    #[test]
    fn prop_unique_reinsertion_is_idempotent(values in arbitrary_values(), probe: i32) {
        let add: Inserter<i32> = Inserter::new();
        let once = add.insert(&add.accumulate(values), probe);
        let twice = add.insert(&once, probe);

        prop_assert_eq!(once, twice);
    }

    /// Law: unique-mode length equals the number of distinct keys seen.
    #[test]
    fn prop_unique_length_counts_distinct_keys(pairs in arbitrary_keyed_pairs()) {
        let add = Inserter::builder()
            .key(|pair: &(u8, i32)| pair.0)
            .build()
            .unwrap();

        let distinct: BTreeSet<u8> = pairs.iter().map(|pair| pair.0).collect();
        prop_assert_eq!(add.accumulate(pairs).len(), distinct.len());
    }
}

// =============================================================================
// Merge Laws
// =============================================================================

proptest! {
    /// Law: an additive merge accumulates, per key, the sum of every value
    /// encountered for that key.
    #[test]
    fn prop_additive_merge_sums_per_key(pairs in arbitrary_keyed_pairs()) {
        let add = Inserter::builder()
            .key(|pair: &(u8, i32)| pair.0)
            .merge_with(|existing: &(u8, i32), incoming: &(u8, i32)| {
                (existing.0, existing.1 + incoming.1)
            })
            .build()
            .unwrap();

        let result = add.accumulate(pairs.clone());

        let mut totals: BTreeMap<u8, i32> = BTreeMap::new();
        for (key, value) in pairs {
            *totals.entry(key).or_insert(0) += value;
        }
        let expected: Vec<(u8, i32)> = totals.into_iter().collect();
        prop_assert_eq!(result, expected);
    }
}

// =============================================================================
// Ordering Laws
// =============================================================================

proptest! {
    /// Law: a key extractor and the equivalent explicit comparator produce
    /// identical sequences for the same input.
    #[test]
    fn prop_key_extractor_matches_equivalent_comparator(pairs in arbitrary_keyed_pairs()) {
        let by_key = Inserter::builder()
            .key(|pair: &(u8, i32)| pair.0)
            .build()
            .unwrap();
        let by_comparator = Inserter::builder()
            .ordering(|probe: &(u8, i32), candidate: &(u8, i32)| probe.0.cmp(&candidate.0))
            .build()
            .unwrap();

        prop_assert_eq!(by_key.accumulate(pairs.clone()), by_comparator.accumulate(pairs));
    }

    /// Law: when the probe is absent from the sequence, it is placed at the
    /// partition point — everything before it strictly smaller, everything
    /// after it strictly greater.
    #[test]
    fn prop_absent_probe_lands_on_partition_point(values in arbitrary_values(), probe: i32) {
        let add: Inserter<i32> = Inserter::new();
        let sequence = add.accumulate(values);
        prop_assume!(!sequence.contains(&probe));

        let result = add.insert(&sequence, probe);
        let position = sequence.partition_point(|element| *element < probe);

        prop_assert_eq!(result[position], probe);
        prop_assert!(result[..position].iter().all(|element| *element < probe));
        prop_assert!(result[position + 1..].iter().all(|element| *element > probe));
    }
}
