//! Mapping from LOD levels to shared lists of `u16` indices.
//!
//! A [`LodMapping`] stores index lists ("rows") once and lets any number of
//! LOD levels point at the same row. Consecutive LODs with identical active
//! sets (vertices, joints, blend shapes) therefore cost one list, not many.
//!
//! All operations are fail-soft: out-of-range LODs and rows never panic, they
//! read as empty or are ignored. Structural checks live in
//! [`LodMapping::validate`] and only run where data crosses a boundary.

use std::collections::HashSet;
use std::hash::BuildHasher;

use rustc_hash::{FxBuildHasher, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::constraint::LodConstraint;
use crate::error::LodMappingError;

/// Row sentinel for a LOD that is not associated with any index list.
pub const NO_INDICES: u16 = u16::MAX;

/// Per-LOD index lists with structural sharing.
///
/// Deserialization goes through [`LodMapping::validate`], so any serde format
/// rejects dangling rows and tables too large for `u16` addressing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLodMapping")]
pub struct LodMapping {
    /// `lods[lod]` is the row holding that LOD's indices, or [`NO_INDICES`].
    lods: Vec<u16>,
    /// Ragged matrix of index lists.
    indices: Vec<Vec<u16>>,
}

/// Unchecked wire shape of a [`LodMapping`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawLodMapping {
    lods: Vec<u16>,
    indices: Vec<Vec<u16>>,
}

impl TryFrom<RawLodMapping> for LodMapping {
    type Error = LodMappingError;

    fn try_from(raw: RawLodMapping) -> Result<Self, Self::Error> {
        let mapping = Self {
            lods: raw.lods,
            indices: raw.indices,
        };
        mapping.validate()?;
        Ok(mapping)
    }
}

impl LodMapping {
    /// Create an empty mapping with no LODs and no rows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from one index list per LOD.
    ///
    /// LODs whose lists are identical share a single row. At most
    /// `u16::MAX` lists are consumed.
    pub fn from_lod_lists<I, L>(lists: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u16]>,
    {
        let mut mapping = Self::new();
        for list in lists.into_iter().take(usize::from(NO_INDICES)) {
            let list = list.as_ref();
            let row = match mapping.indices.iter().position(|row| row.as_slice() == list) {
                Some(existing) => existing as u16,
                None => {
                    mapping.indices.push(list.to_vec());
                    (mapping.indices.len() - 1) as u16
                }
            };
            mapping.lods.push(row);
        }
        mapping
    }

    /// Number of LOD levels currently configured.
    #[must_use]
    pub fn lod_count(&self) -> u16 {
        self.lods.len() as u16
    }

    /// Resize the LOD table.
    ///
    /// Shrinking drops trailing LODs; growing appends LODs that are not
    /// associated with any row yet. Rows are left untouched.
    pub fn set_lod_count(&mut self, count: u16) {
        self.lods.resize(usize::from(count), NO_INDICES);
    }

    /// Drop every row. LODs keep their row numbers, which now read as empty.
    pub fn reset_indices(&mut self) {
        self.indices.clear();
    }

    /// Drop every LOD association. Rows stay stored until re-associated.
    pub fn reset_lods(&mut self) {
        self.lods.clear();
    }

    /// Clear both LODs and rows.
    pub fn reset(&mut self) {
        self.reset_lods();
        self.reset_indices();
    }

    /// Keep only the LODs selected by `constraint`, then drop rows no
    /// remaining LOD refers to.
    ///
    /// Surviving LODs are renumbered densely in their original order, and
    /// their row references are rewritten to match the compacted row table.
    pub fn discard_lods(&mut self, constraint: &LodConstraint) {
        let lods_before = self.lods.len();
        let rows_before = self.indices.len();
        constraint.apply_to(&mut self.lods);
        self.cleanup_indices();
        tracing::debug!(
            lods_before,
            lods_after = self.lods.len(),
            rows_before,
            rows_after = self.indices.len(),
            "discarded LODs"
        );
    }

    /// Remove rows that no LOD references and renumber the references.
    ///
    /// References to rows that do not exist become [`NO_INDICES`].
    fn cleanup_indices(&mut self) {
        let mut referenced = vec![false; self.indices.len()];
        for &row in &self.lods {
            if let Some(flag) = referenced.get_mut(usize::from(row)) {
                *flag = true;
            }
        }

        let mut renumbered = vec![NO_INDICES; self.indices.len()];
        let mut next = 0u16;
        for (old, _) in referenced.iter().enumerate().filter(|(_, keep)| **keep) {
            renumbered[old] = next;
            next += 1;
        }

        let mut position = 0;
        self.indices.retain(|_| {
            let keep = referenced[position];
            position += 1;
            keep
        });

        for row in &mut self.lods {
            *row = renumbered
                .get(usize::from(*row))
                .copied()
                .unwrap_or(NO_INDICES);
        }
    }

    /// Indices active at `lod`.
    ///
    /// Returns an empty slice if `lod` is out of range or is not associated
    /// with an existing row.
    #[must_use]
    pub fn indices(&self, lod: u16) -> &[u16] {
        self.row_for_lod(lod)
            .and_then(|row| self.indices.get(usize::from(row)))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Row associated with `lod`, if the LOD exists and its row is stored.
    #[must_use]
    pub fn row_for_lod(&self, lod: u16) -> Option<u16> {
        self.lods
            .get(usize::from(lod))
            .copied()
            .filter(|&row| usize::from(row) < self.indices.len())
    }

    /// Raw LOD-to-row table, one entry per LOD.
    #[must_use]
    pub fn lod_rows(&self) -> &[u16] {
        &self.lods
    }

    /// Number of stored rows. May be lower than [`lod_count`](Self::lod_count)
    /// when LODs share rows.
    #[must_use]
    pub fn index_list_count(&self) -> u16 {
        self.indices.len() as u16
    }

    /// Empty one row in place. Other rows keep their numbers.
    pub fn clear_indices(&mut self, row: u16) {
        if let Some(list) = self.indices.get_mut(usize::from(row)) {
            list.clear();
        }
    }

    /// Append `source` to `row`, creating empty rows up to it if needed.
    pub fn add_indices(&mut self, row: u16, source: &[u16]) {
        if let Some(list) = self.row_mut_or_grow(row) {
            list.reserve(source.len());
            list.extend_from_slice(source);
        }
    }

    /// Iterator form of [`add_indices`](Self::add_indices).
    pub fn extend_indices<I>(&mut self, row: u16, source: I)
    where
        I: IntoIterator<Item = u16>,
    {
        if let Some(list) = self.row_mut_or_grow(row) {
            let source = source.into_iter();
            list.reserve(source.size_hint().0);
            list.extend(source);
        }
    }

    /// Point `lod` at `row`. Several LODs may share a row.
    ///
    /// The row table grows so that `row` exists. LODs outside
    /// [`lod_count`](Self::lod_count) are left alone.
    pub fn associate_lod_with_indices(&mut self, lod: u16, row: u16) {
        if usize::from(lod) >= self.lods.len() {
            tracing::debug!(
                lod,
                row,
                lod_count = self.lods.len(),
                "ignoring association for unknown LOD"
            );
            return;
        }
        self.lods[usize::from(lod)] = row;
        self.row_mut_or_grow(row);
    }

    /// Apply `mapper` to every index of every row, in place.
    pub fn map_indices<F>(&mut self, mut mapper: F)
    where
        F: FnMut(u16) -> u16,
    {
        for value in self.indices.iter_mut().flatten() {
            *value = mapper(*value);
        }
    }

    /// Keep only indices for which `predicate` returns `true`, preserving
    /// the order of what remains in each row.
    pub fn filter_indices<F>(&mut self, mut predicate: F)
    where
        F: FnMut(u16) -> bool,
    {
        for row in &mut self.indices {
            row.retain(|&value| predicate(value));
        }
    }

    /// Sort each row ascending.
    pub fn sort_indices(&mut self) {
        for row in &mut self.indices {
            row.sort_unstable();
        }
    }

    /// Union of all rows, without duplicates.
    #[must_use]
    pub fn combined_distinct_indices(&self) -> FxHashSet<u16> {
        self.combined_distinct_indices_with_hasher(FxBuildHasher::default())
    }

    /// Union of all rows, collected into a set built with `hasher`.
    pub fn combined_distinct_indices_with_hasher<S>(&self, hasher: S) -> HashSet<u16, S>
    where
        S: BuildHasher,
    {
        let capacity = self.indices.iter().map(Vec::len).max().unwrap_or(0);
        let mut combined = HashSet::with_capacity_and_hasher(capacity, hasher);
        for row in &self.indices {
            combined.extend(row.iter().copied());
        }
        combined
    }

    /// Check that every LOD points at a stored row (or [`NO_INDICES`]) and
    /// that both tables fit in `u16` addressing.
    pub fn validate(&self) -> Result<(), LodMappingError> {
        if self.lods.len() > usize::from(u16::MAX) {
            return Err(LodMappingError::TooManyLods(self.lods.len()));
        }
        if self.indices.len() > usize::from(NO_INDICES) {
            return Err(LodMappingError::TooManyRows(self.indices.len()));
        }
        for (lod, &row) in self.lods.iter().enumerate() {
            if row != NO_INDICES && usize::from(row) >= self.indices.len() {
                return Err(LodMappingError::DanglingRow {
                    lod: lod as u16,
                    row,
                    row_count: self.indices.len(),
                });
            }
        }
        Ok(())
    }

    fn row_mut_or_grow(&mut self, row: u16) -> Option<&mut Vec<u16>> {
        if row == NO_INDICES {
            tracing::debug!(row, "ignoring indices for the unassociated-row sentinel");
            return None;
        }
        let row = usize::from(row);
        if row >= self.indices.len() {
            self.indices.resize_with(row + 1, Vec::new);
        }
        self.indices.get_mut(row)
    }
}
