//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber with a file-backed writer. The demo
//! driver repaints the terminal while the animation runs, so log lines go to
//! a file under the data directory instead of stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::infrastructure::paths;
use crate::Config;

/// Initializes the tracing subscriber with file-based output.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// # File Location
///
/// Logs are appended to `<data-dir>/folio-core-YYYYMMDD.log`, one file per
/// day, under [`paths::data_dir`].
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if the directory or file cannot be created
///   (observability is optional)
/// - Idempotent: safe to call multiple times, only the first call takes effect
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let log_file = data_dir.join(format!(
        "folio-core-{}.log",
        chrono::Utc::now().format("%Y%m%d"),
    ));
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        );

    let _ = subscriber.try_init();
}
