//! Tool settings with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const APP_NAME: &str = "dnacal";
const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Which LODs and indices to keep.
    pub lod: LodConfig,
    /// How results are written.
    pub output: OutputConfig,
    /// Logging settings.
    pub debug: DebugConfig,
}

/// LOD trimming settings.
///
/// When either bound is set, LODs outside `max_lod..=min_lod` are discarded.
/// A missing `max_lod` means LOD 0; a missing `min_lod` means the last LOD.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LodConfig {
    /// Highest-fidelity LOD to keep.
    pub max_lod: Option<u16>,
    /// Lowest-fidelity LOD to keep.
    pub min_lod: Option<u16>,
    /// Raw indices to remove; survivors are renumbered densely.
    pub remove_indices: Vec<u16>,
    /// Sort every index list ascending before writing.
    pub sort_indices: bool,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print RON output.
    pub pretty: bool,
}

/// Debug/development settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter (e.g. "debug", "info,dnacal_lod=trace").
    pub log_level: String,
    /// Also write JSON logs to `<config dir>/logs` in debug builds.
    pub log_to_file: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: true,
        }
    }
}

impl LodConfig {
    /// Whether any LOD bound is configured.
    #[must_use]
    pub fn has_lod_bounds(&self) -> bool {
        self.max_lod.is_some() || self.min_lod.is_some()
    }
}

impl Config {
    /// Platform config directory for the tool (`<os config dir>/dnacal`).
    pub fn default_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|base| base.join(APP_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(config_dir.join(CONFIG_FILE), serialized).map_err(ConfigError::WriteError)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
