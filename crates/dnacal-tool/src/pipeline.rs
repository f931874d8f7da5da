//! Applies the configured edits to a mapping, in a fixed order: discard
//! LODs, remove indices, sort.

use dnacal_config::{ConfigError, LodConfig};
use dnacal_lod::{IndexCompaction, LodConstraint, LodMapping, PersistError};
use tracing::{info, warn};

/// Errors surfaced by the `dnacal` tool.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Persist(#[from] PersistError),

    /// The configured bounds are inverted or start past the last LOD.
    #[error("LOD bounds {max_lod:?}..={min_lod:?} select none of the {lod_count} LODs")]
    EmptyLodSelection {
        max_lod: Option<u16>,
        min_lod: Option<u16>,
        lod_count: u16,
    },
}

/// Shape of a mapping after calibration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub lod_count: u16,
    pub index_list_count: u16,
    /// Size of the union of all index lists.
    pub distinct_indices: usize,
}

impl Summary {
    #[must_use]
    pub fn of(mapping: &LodMapping) -> Self {
        Self {
            lod_count: mapping.lod_count(),
            index_list_count: mapping.index_list_count(),
            distinct_indices: mapping.combined_distinct_indices().len(),
        }
    }
}

/// Constraint implied by `config` for a mapping with `lod_count` LODs.
///
/// Returns `Ok(None)` when no bounds are set or the bounds keep every LOD.
pub fn lod_constraint(
    config: &LodConfig,
    lod_count: u16,
) -> Result<Option<LodConstraint>, ToolError> {
    if !config.has_lod_bounds() || lod_count == 0 {
        return Ok(None);
    }

    let max_lod = config.max_lod.unwrap_or(0);
    let min_lod = config.min_lod.unwrap_or(lod_count - 1);
    if max_lod > min_lod || max_lod >= lod_count {
        return Err(ToolError::EmptyLodSelection {
            max_lod: config.max_lod,
            min_lod: config.min_lod,
            lod_count,
        });
    }

    let mut constraint = LodConstraint::range(max_lod, min_lod);
    constraint.clamp_to(lod_count);
    Ok(constraint.has_impact_on(lod_count).then_some(constraint))
}

/// Apply `config` to `mapping` and summarize the result.
pub fn calibrate(mapping: &mut LodMapping, config: &LodConfig) -> Result<Summary, ToolError> {
    let before = Summary::of(mapping);

    if let Some(constraint) = lod_constraint(config, mapping.lod_count())? {
        mapping.discard_lods(&constraint);
        info!(
            kept = ?constraint.lods(),
            lods = mapping.lod_count(),
            rows = mapping.index_list_count(),
            "discarded LODs outside bounds"
        );
    }

    if !config.remove_indices.is_empty() {
        let compaction = IndexCompaction::new(config.remove_indices.iter().copied());
        let present = mapping.combined_distinct_indices();
        let missing = config
            .remove_indices
            .iter()
            .filter(|&&index| !present.contains(&index))
            .count();
        if missing > 0 {
            warn!(missing, "some indices to remove are not referenced by any LOD");
        }
        compaction.apply(mapping);
    }

    if config.sort_indices {
        mapping.sort_indices();
    }

    let after = Summary::of(mapping);
    info!(
        lods_before = before.lod_count,
        lods_after = after.lod_count,
        rows_before = before.index_list_count,
        rows_after = after.index_list_count,
        distinct_before = before.distinct_indices,
        distinct_after = after.distinct_indices,
        "calibrated LOD mapping"
    );
    Ok(after)
}
