//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Trim and renumber a LOD index mapping.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "dnacal", about = "LOD index mapping calibration")]
pub struct CliArgs {
    /// LOD mapping to read (RON).
    pub input: PathBuf,

    /// Where to write the result; prints to stdout when omitted.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Highest-fidelity LOD to keep.
    #[arg(long)]
    pub max_lod: Option<u16>,

    /// Lowest-fidelity LOD to keep.
    #[arg(long)]
    pub min_lod: Option<u16>,

    /// Comma-separated raw indices to remove.
    #[arg(long, value_delimiter = ',')]
    pub remove: Vec<u16>,

    /// Sort every index list ascending.
    #[arg(long)]
    pub sort: bool,

    /// Write single-line RON instead of pretty output.
    #[arg(long)]
    pub compact: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(lod) = args.max_lod {
            self.lod.max_lod = Some(lod);
        }
        if let Some(lod) = args.min_lod {
            self.lod.min_lod = Some(lod);
        }
        if !args.remove.is_empty() {
            self.lod.remove_indices = args.remove.clone();
        }
        if args.sort {
            self.lod.sort_indices = true;
        }
        if args.compact {
            self.output.pretty = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
