//! Dense renumbering of indices after some of them are removed.
//!
//! Removing joint 3 out of `0..8` leaves `0, 1, 2, 4, 5, 6, 7`; downstream
//! tables expect `0..7`, so every index above a removed one shifts down by
//! the number of removed indices below it.

use crate::mapping::LodMapping;

/// Removal set plus the remapping it implies for surviving indices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexCompaction {
    /// Sorted, duplicate-free.
    removed: Vec<u16>,
}

impl IndexCompaction {
    /// Build a compaction that removes every index in `removed`.
    pub fn new<I>(removed: I) -> Self
    where
        I: IntoIterator<Item = u16>,
    {
        let mut removed: Vec<u16> = removed.into_iter().collect();
        removed.sort_unstable();
        removed.dedup();
        Self { removed }
    }

    #[must_use]
    pub fn is_removed(&self, index: u16) -> bool {
        self.removed.binary_search(&index).is_ok()
    }

    /// Number of distinct indices removed.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    /// New value of `index`, or `None` if it is removed.
    #[must_use]
    pub fn remap(&self, index: u16) -> Option<u16> {
        (!self.is_removed(index)).then(|| self.shifted(index))
    }

    /// Drop removed indices from every row and renumber the rest.
    pub fn apply(&self, mapping: &mut LodMapping) {
        if self.removed.is_empty() {
            return;
        }
        mapping.filter_indices(|index| !self.is_removed(index));
        mapping.map_indices(|index| self.shifted(index));
        tracing::debug!(removed = self.removed.len(), "compacted LOD indices");
    }

    fn shifted(&self, index: u16) -> u16 {
        // At most `index` removed values lie below it, so this cannot underflow.
        index - self.removed.partition_point(|&removed| removed < index) as u16
    }
}
