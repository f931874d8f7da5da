//! Error types for mapping validation and persistence.

/// Structural problems found by [`LodMapping::validate`](crate::LodMapping::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LodMappingError {
    /// A LOD refers to a row that does not exist.
    #[error("LOD {lod} references index list {row}, but only {row_count} lists exist")]
    DanglingRow {
        /// The offending LOD.
        lod: u16,
        /// The row it points at.
        row: u16,
        /// Number of rows actually stored.
        row_count: usize,
    },
    /// More LODs than a `u16` can address.
    #[error("too many LODs: {0} (max 65535)")]
    TooManyLods(usize),
    /// More index lists than a `u16` can address (the last value is reserved).
    #[error("too many index lists: {0} (max 65535)")]
    TooManyRows(usize),
}

/// Errors that can occur when loading or saving a mapping.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Failed to read the mapping file from disk.
    #[error("failed to read LOD mapping: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the mapping file to disk.
    #[error("failed to write LOD mapping: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse LOD mapping: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize the mapping to RON.
    #[error("failed to serialize LOD mapping: {0}")]
    SerializeError(#[source] ron::Error),

    /// The mapping parsed but breaks a structural invariant.
    #[error("invalid LOD mapping: {0}")]
    Invalid(#[from] LodMappingError),
}
