//! Calibration pipeline behind the `dnacal` binary: LOD trimming, index
//! removal, and sorting applied to a loaded [`LodMapping`].

mod pipeline;

pub use pipeline::{Summary, ToolError, calibrate, lod_constraint};

pub use dnacal_lod::LodMapping;
