//! `dnacal`: trim and renumber a LOD index mapping.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p dnacal-tool -- rig.ron --max-lod 1 --remove 4,9 -o out.ron`.

use clap::Parser;
use dnacal_config::{CliArgs, Config};
use dnacal_tool::{LodMapping, Summary, ToolError, calibrate};
use tracing::info;

fn main() {
    let args = CliArgs::parse();
    if let Err(e) = run(&args) {
        eprintln!("dnacal: {e}");
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<Summary, ToolError> {
    let config_dir = match &args.config {
        Some(dir) => dir.clone(),
        None => Config::default_dir()?,
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(args);

    let log_dir = config_dir.join("logs");
    dnacal_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let mut mapping = LodMapping::load(&args.input)?;
    let summary = calibrate(&mut mapping, &config.lod)?;

    match &args.output {
        Some(path) => mapping.save(path, config.output.pretty)?,
        None => println!("{}", mapping.to_ron_string(config.output.pretty)?),
    }

    info!(
        lods = summary.lod_count,
        rows = summary.index_list_count,
        distinct = summary.distinct_indices,
        "done"
    );
    Ok(summary)
}
