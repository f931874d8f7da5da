//! Selection of LOD levels to keep when trimming a mapping.

/// A sorted, duplicate-free set of LOD positions to keep.
///
/// LOD 0 is the highest fidelity, so the "max" LOD is the smallest selected
/// number and the "min" LOD the largest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LodConstraint {
    lods: Vec<u16>,
}

impl LodConstraint {
    /// Keep every LOD from `max_lod` through `min_lod` inclusive.
    ///
    /// Swapped bounds are normalised.
    #[must_use]
    pub fn range(max_lod: u16, min_lod: u16) -> Self {
        let (first, last) = if max_lod <= min_lod {
            (max_lod, min_lod)
        } else {
            (min_lod, max_lod)
        };
        Self {
            lods: (first..=last).collect(),
        }
    }

    /// Keep exactly the listed LODs. Order and duplicates in `lods` are ignored.
    #[must_use]
    pub fn from_lods(lods: &[u16]) -> Self {
        let mut lods = lods.to_vec();
        lods.sort_unstable();
        lods.dedup();
        Self { lods }
    }

    /// Highest-fidelity LOD kept, if any.
    #[must_use]
    pub fn max_lod(&self) -> Option<u16> {
        self.lods.first().copied()
    }

    /// Lowest-fidelity LOD kept, if any.
    #[must_use]
    pub fn min_lod(&self) -> Option<u16> {
        self.lods.last().copied()
    }

    /// Number of LODs kept.
    #[must_use]
    pub fn lod_count(&self) -> u16 {
        self.lods.len() as u16
    }

    /// Selected LOD positions, ascending.
    #[must_use]
    pub fn lods(&self) -> &[u16] {
        &self.lods
    }

    /// Whether no LOD is selected at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lods.is_empty()
    }

    /// Whether `lod` is kept.
    #[must_use]
    pub fn contains(&self, lod: u16) -> bool {
        self.lods.binary_search(&lod).is_ok()
    }

    /// Whether applying this constraint to `lod_count` LODs would drop any.
    #[must_use]
    pub fn has_impact_on(&self, lod_count: u16) -> bool {
        (0..lod_count).any(|lod| !self.contains(lod))
    }

    /// Forget selected LODs that do not exist in a mapping of `lod_count` LODs.
    pub fn clamp_to(&mut self, lod_count: u16) {
        self.lods.retain(|&lod| lod < lod_count);
    }

    /// Keep the elements of `values` whose position is selected, preserving order.
    pub fn apply_to<T>(&self, values: &mut Vec<T>) {
        let mut position = 0usize;
        values.retain(|_| {
            let keep = u16::try_from(position).is_ok_and(|lod| self.contains(lod));
            position += 1;
            keep
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_inclusive() {
        let constraint = LodConstraint::range(1, 3);
        assert_eq!(constraint.lods(), &[1, 2, 3]);
        assert_eq!(constraint.max_lod(), Some(1));
        assert_eq!(constraint.min_lod(), Some(3));
        assert_eq!(constraint.lod_count(), 3);
    }

    #[test]
    fn test_range_normalises_swapped_bounds() {
        assert_eq!(LodConstraint::range(4, 2), LodConstraint::range(2, 4));
    }

    #[test]
    fn test_from_lods_sorts_and_dedups() {
        let constraint = LodConstraint::from_lods(&[3, 0, 3, 1]);
        assert_eq!(constraint.lods(), &[0, 1, 3]);
        assert!(constraint.contains(1));
        assert!(!constraint.contains(2));
    }

    #[test]
    fn test_empty_constraint() {
        let constraint = LodConstraint::from_lods(&[]);
        assert!(constraint.is_empty());
        assert_eq!(constraint.max_lod(), None);
        assert_eq!(constraint.min_lod(), None);

        let mut values = vec![1, 2, 3];
        constraint.apply_to(&mut values);
        assert!(values.is_empty());
    }

    #[test]
    fn test_has_impact_on() {
        let constraint = LodConstraint::range(0, 3);
        assert!(!constraint.has_impact_on(4));
        assert!(!constraint.has_impact_on(2));
        assert!(constraint.has_impact_on(5));
        assert!(LodConstraint::range(1, 3).has_impact_on(4));
        assert!(!LodConstraint::range(1, 3).has_impact_on(0));
    }

    #[test]
    fn test_clamp_to() {
        let mut constraint = LodConstraint::range(2, 6);
        constraint.clamp_to(4);
        assert_eq!(constraint.lods(), &[2, 3]);
    }

    #[test]
    fn test_apply_to_keeps_selected_positions() {
        let mut values = vec!['a', 'b', 'c', 'd', 'e'];
        LodConstraint::from_lods(&[1, 3, 9]).apply_to(&mut values);
        assert_eq!(values, vec!['b', 'd']);
    }
}
