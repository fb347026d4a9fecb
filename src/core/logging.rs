//! Logging initialization.
//!
//! Sets up a tracing subscriber with an `EnvFilter` (honoring `RUST_LOG`),
//! a non-blocking daily-rolling file appender under the data directory,
//! and the `log` crate bridge so `log::` macros flow into tracing. The
//! terminal stays reserved for the TUI; all output goes to the log file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging into `log_dir/promptsmith.log`.
///
/// Returns the appender guard, which must be held for the process
/// lifetime or buffered log lines are dropped. Returns `None` when a
/// subscriber is already installed (tests, embedding).
pub fn init(log_dir: &Path) -> Option<WorkerGuard> {
    // Route `log::` records into tracing; ignore the error if a logger
    // was already installed.
    let _ = tracing_log::LogTracer::init();

    let file_appender = tracing_appender::rolling::daily(log_dir, "promptsmith.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    match tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
    {
        Ok(()) => Some(guard),
        Err(e) => {
            eprintln!("logging already initialized: {e}");
            None
        }
    }
}
