//! Configuration for the dnacal tool.
//!
//! Settings persist to disk as `config.ron` and can be overridden from the
//! command line via clap. Missing fields fall back to defaults, so older and
//! newer config files both load.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, LodConfig, OutputConfig};
pub use error::ConfigError;
