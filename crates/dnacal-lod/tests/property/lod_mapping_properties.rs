use std::collections::BTreeSet;

use dnacal_lod::{IndexCompaction, LodConstraint, LodMapping};
use proptest::prelude::*;

/// Rows plus a LOD table whose entries all point at existing rows.
fn mapping_parts() -> impl Strategy<Value = (Vec<Vec<u16>>, Vec<u16>)> {
    prop::collection::vec(prop::collection::vec(0u16..512, 0..24), 1..6).prop_flat_map(|rows| {
        let row_count = rows.len() as u16;
        (
            Just(rows),
            prop::collection::vec(0..row_count, 0..8),
        )
    })
}

fn build(rows: &[Vec<u16>], lods: &[u16]) -> LodMapping {
    let mut mapping = LodMapping::new();
    mapping.set_lod_count(lods.len() as u16);
    for (row, values) in rows.iter().enumerate() {
        mapping.add_indices(row as u16, values);
    }
    for (lod, &row) in lods.iter().enumerate() {
        mapping.associate_lod_with_indices(lod as u16, row);
    }
    mapping
}

proptest! {
    #[test]
    fn valid_lod_reads_its_row((rows, lods) in mapping_parts()) {
        let mapping = build(&rows, &lods);
        prop_assert_eq!(mapping.lod_count() as usize, lods.len());
        for (lod, &row) in lods.iter().enumerate() {
            prop_assert_eq!(mapping.indices(lod as u16), rows[row as usize].as_slice());
        }
    }

    #[test]
    fn out_of_range_lod_reads_empty((rows, lods) in mapping_parts(), extra in 0u16..1000) {
        let mapping = build(&rows, &lods);
        prop_assert!(mapping.indices(mapping.lod_count().saturating_add(extra)).is_empty());
    }

    #[test]
    fn add_indices_appends_after_existing(
        (rows, lods) in mapping_parts(),
        appended in prop::collection::vec(any::<u16>(), 0..16),
    ) {
        let mut mapping = build(&rows, &lods);
        mapping.add_indices(0, &appended);
        let mut expected = rows[0].clone();
        expected.extend_from_slice(&appended);
        for (lod, &row) in lods.iter().enumerate() {
            if row == 0 {
                prop_assert_eq!(mapping.indices(lod as u16), expected.as_slice());
            }
        }
    }

    #[test]
    fn map_indices_applies_to_every_read((rows, lods) in mapping_parts(), offset in 0u16..1000) {
        let mut mapping = build(&rows, &lods);
        mapping.map_indices(|i| i.wrapping_add(offset));
        for (lod, &row) in lods.iter().enumerate() {
            let expected: Vec<u16> = rows[row as usize].iter().map(|i| i.wrapping_add(offset)).collect();
            prop_assert_eq!(mapping.indices(lod as u16), expected.as_slice());
        }
    }

    #[test]
    fn filter_indices_is_stable((rows, lods) in mapping_parts(), modulus in 2u16..7) {
        let mut mapping = build(&rows, &lods);
        mapping.filter_indices(|i| i % modulus != 0);
        for (lod, &row) in lods.iter().enumerate() {
            let expected: Vec<u16> = rows[row as usize].iter().copied().filter(|i| i % modulus != 0).collect();
            prop_assert_eq!(mapping.indices(lod as u16), expected.as_slice());
        }
    }

    #[test]
    fn sort_keeps_multiset((rows, lods) in mapping_parts()) {
        let mut mapping = build(&rows, &lods);
        mapping.sort_indices();
        for (lod, &row) in lods.iter().enumerate() {
            let mut expected = rows[row as usize].clone();
            expected.sort_unstable();
            prop_assert_eq!(mapping.indices(lod as u16), expected.as_slice());
        }
    }

    #[test]
    fn combined_is_exact_union((rows, lods) in mapping_parts()) {
        let mapping = build(&rows, &lods);
        let combined: BTreeSet<u16> = mapping.combined_distinct_indices().into_iter().collect();
        let expected: BTreeSet<u16> = rows.iter().flatten().copied().collect();
        prop_assert_eq!(combined, expected);
    }

    #[test]
    fn discard_leaves_no_orphaned_rows((rows, lods) in mapping_parts(), max in 0u16..8, min in 0u16..8) {
        let mut mapping = build(&rows, &lods);
        let constraint = LodConstraint::range(max, min);
        let expected: Vec<Vec<u16>> = lods
            .iter()
            .enumerate()
            .filter(|(lod, _)| constraint.contains(*lod as u16))
            .map(|(_, &row)| rows[row as usize].clone())
            .collect();

        mapping.discard_lods(&constraint);
        prop_assert!(mapping.validate().is_ok());
        prop_assert_eq!(mapping.lod_count() as usize, expected.len());
        for (lod, values) in expected.iter().enumerate() {
            prop_assert_eq!(mapping.indices(lod as u16), values.as_slice());
        }
        let referenced: BTreeSet<u16> = mapping.lod_rows().iter().copied().collect();
        prop_assert_eq!(referenced.len(), mapping.index_list_count() as usize);
    }

    #[test]
    fn compaction_is_dense_and_ordered(
        (rows, lods) in mapping_parts(),
        removed in prop::collection::vec(0u16..512, 0..32),
    ) {
        let mut mapping = build(&rows, &lods);
        let compaction = IndexCompaction::new(removed.iter().copied());
        compaction.apply(&mut mapping);
        for (lod, &row) in lods.iter().enumerate() {
            let expected: Vec<u16> = rows[row as usize].iter().filter_map(|&i| compaction.remap(i)).collect();
            prop_assert_eq!(mapping.indices(lod as u16), expected.as_slice());
        }
        let survivors: BTreeSet<u16> = (0u16..512).filter(|i| !compaction.is_removed(*i)).collect();
        let remapped: Vec<u16> = survivors.iter().filter_map(|&i| compaction.remap(i)).collect();
        let dense: Vec<u16> = (0..survivors.len() as u16).collect();
        prop_assert_eq!(remapped, dense);
    }
}

#[test]
fn reset_then_zero_lods_is_empty() {
    let mut mapping = build(&[vec![1, 2], vec![3]], &[0, 1, 1]);
    mapping.reset();
    mapping.set_lod_count(0);
    assert_eq!(mapping.lod_count(), 0);
    assert_eq!(mapping.index_list_count(), 0);
}
