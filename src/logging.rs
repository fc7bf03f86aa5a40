use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Env var that redirects logs to a file, overriding `logging.file`.
pub const LOG_FILE_ENV: &str = "MAESTRO_LOG";

/// Initialize tracing.
///
/// The filter comes from `RUST_LOG` when set, otherwise from the configured
/// level. Logs go to stderr without colours so stdout stays parseable. Set
/// `MAESTRO_LOG` (or `logging.file`) to a path to log to a file instead;
/// the file name gets a `.{timestamp}.{pid}` suffix so concurrent runs
/// don't clobber each other.
///
/// Must be called at most once per process.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let log_path = std::env::var_os(LOG_FILE_ENV)
        .map(PathBuf::from)
        .or_else(|| config.file.clone());

    let Some(log_path) = log_path else {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(false);
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return;
    };

    let unique_path = unique_log_path(&log_path);
    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path.display());
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn unique_log_path(base: &Path) -> PathBuf {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("{}.{}.{}", base.display(), timestamp, pid))
}
