//! RON persistence for [`LodMapping`].
//!
//! A mapping is stored as its two tables:
//!
//! ```text
//! (
//!     lods: [0, 0, 1, 1],
//!     indices: [[10, 15, 12], [9, 7, 43, 67]],
//! )
//! ```
//!
//! Mappings are validated on both save and load, so anything written can be
//! read back.

use std::path::Path;

use crate::error::PersistError;
use crate::mapping::{LodMapping, RawLodMapping};

impl LodMapping {
    /// Serialize to RON. `pretty` puts each table on its own line.
    pub fn to_ron_string(&self, pretty: bool) -> Result<String, PersistError> {
        self.validate()?;
        if pretty {
            let config = ron::ser::PrettyConfig::new()
                .depth_limit(2)
                .separate_tuple_members(true)
                .enumerate_arrays(false);
            ron::ser::to_string_pretty(self, config).map_err(PersistError::SerializeError)
        } else {
            ron::to_string(self).map_err(PersistError::SerializeError)
        }
    }

    /// Parse and validate a mapping from RON text.
    pub fn from_ron_str(contents: &str) -> Result<Self, PersistError> {
        let raw: RawLodMapping = ron::from_str(contents).map_err(PersistError::ParseError)?;
        Ok(LodMapping::try_from(raw)?)
    }

    /// Load a mapping from a RON file.
    pub fn load(path: &Path) -> Result<Self, PersistError> {
        let contents = std::fs::read_to_string(path).map_err(PersistError::ReadError)?;
        let mapping = Self::from_ron_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            lods = mapping.lod_count(),
            rows = mapping.index_list_count(),
            "loaded LOD mapping"
        );
        Ok(mapping)
    }

    /// Save the mapping to a RON file, creating parent directories.
    pub fn save(&self, path: &Path, pretty: bool) -> Result<(), PersistError> {
        let serialized = self.to_ron_string(pretty)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(PersistError::WriteError)?;
        }
        std::fs::write(path, serialized).map_err(PersistError::WriteError)?;
        tracing::info!(path = %path.display(), "saved LOD mapping");
        Ok(())
    }
}
