//! Structured logging setup for the isoterra renderer.
//!
//! Thin wrapper over the `tracing` ecosystem: console output with module
//! paths and uptime timestamps, filterable via `RUST_LOG` or the config
//! file's `debug.log_level` setting, plus an optional plain-text file log
//! for post-mortem analysis.

use std::fs::File;
use std::path::Path;

use isoterra_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info";
const LOG_FILE_NAME: &str = "isoterra.log";

/// Initialize the global tracing subscriber.
///
/// Filter precedence: `RUST_LOG` environment variable, then the config's
/// `debug.log_level` when non-empty, then `info`.
///
/// When `log_dir` is given, a second layer writes ANSI-free output to
/// `isoterra.log` inside that directory (created if missing). Failure to
/// open the file falls back to console-only logging.
///
/// # Panics
///
/// Panics if a global subscriber is already installed; call once at
/// startup.
pub fn init_logging(log_dir: Option<&Path>, config: Option<&Config>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(config)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if let Some(log_dir) = log_dir
        && let Ok(log_file) = open_log_file(log_dir)
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime());
        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Filter directives from the config, or the default.
fn filter_directives(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Create `log_dir` if needed and open the log file inside it.
fn open_log_file(log_dir: &Path) -> std::io::Result<File> {
    std::fs::create_dir_all(log_dir)?;
    File::create(log_dir.join(LOG_FILE_NAME))
}
