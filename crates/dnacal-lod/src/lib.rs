//! Level-of-detail index mapping for rig calibration data: per-LOD index lists
//! with shared row storage, LOD constraints, index compaction, and RON persistence.

mod compaction;
mod constraint;
mod error;
mod mapping;
mod persist;

pub use compaction::IndexCompaction;
pub use constraint::LodConstraint;
pub use error::{LodMappingError, PersistError};
pub use mapping::{LodMapping, NO_INDICES};
