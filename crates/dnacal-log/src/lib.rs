//! Structured logging for the dnacal tool.
//!
//! Installs a `tracing` subscriber with a human-readable console layer on
//! stderr (stdout carries the tool's RON output) and, in debug builds, a JSON
//! file layer for post-mortem analysis. The level comes from `RUST_LOG`, then
//! the config's `debug.log_level`, then [`DEFAULT_FILTER`].

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use dnacal_config::Config;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config names one.
pub const DEFAULT_FILTER: &str = "info";

/// File name of the JSON log inside the log directory.
pub const LOG_FILE_NAME: &str = "dnacal.log";

/// Initialize the global tracing subscriber.
///
/// # Arguments
///
/// * `log_dir` - Directory for the JSON log file (debug builds only)
/// * `debug_build` - Whether this is a debug build (enables file logging)
/// * `config` - Optional configuration supplying the level and file toggle
///
/// # Examples
///
/// ```no_run
/// use dnacal_config::Config;
/// use dnacal_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), true, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(config)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    let log_to_file = config.is_none_or(|config| config.debug.log_to_file);
    if debug_build
        && log_to_file
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = File::create(log_dir.join(LOG_FILE_NAME))
    {
        subscriber.with(json_file_layer(log_file)).init();
        return;
    }

    subscriber.init();
}

/// Filter directives from the config, falling back to [`DEFAULT_FILTER`].
#[must_use]
pub fn filter_directives(config: Option<&Config>) -> String {
    config
        .map(|config| config.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// JSON lines, no ANSI codes, one event per line.
fn json_file_layer<S>(log_file: File) -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::uptime())
        .json()
}
