//! File logging for coverplan
//!
//! The terminal belongs to the TUI, so every event goes to a daily-rolling
//! file under the platform data directory instead of stdout.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "COVERPLAN_LOG";

/// Filter used when `COVERPLAN_LOG` is unset or unparsable
pub const DEFAULT_FILTER: &str = "coverplan=info,warn";

/// Prefix of the rolling log files (`coverplan.log.YYYY-MM-DD`)
pub const LOG_FILE_PREFIX: &str = "coverplan.log";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Install the global subscriber.
///
/// ```bash
/// COVERPLAN_LOG=debug coverplan
/// COVERPLAN_LOG=coverplan_app=trace,warn coverplan
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);
    let filter = filter_from(std::env::var(LOG_ENV_VAR).ok().as_deref());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(TIMESTAMP_FORMAT.to_string())),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_dir = %log_dir.display(),
        "coverplan starting"
    );

    Ok(())
}

/// Parse a filter directive, falling back to [`DEFAULT_FILTER`].
fn filter_from(directive: Option<&str>) -> EnvFilter {
    directive
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// `<data_local_dir>/coverplan/logs`, or `./coverplan/logs` when the platform
/// has no data directory.
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("coverplan")
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_is_namespaced() {
        assert!(log_directory().ends_with("coverplan/logs"));
    }

    #[test]
    fn test_filter_defaults_when_unset_or_blank() {
        assert_eq!(filter_from(None).to_string(), EnvFilter::new(DEFAULT_FILTER).to_string());
        assert_eq!(
            filter_from(Some("  ")).to_string(),
            EnvFilter::new(DEFAULT_FILTER).to_string()
        );
    }

    #[test]
    fn test_filter_uses_directive() {
        let filter = filter_from(Some("coverplan_app=trace"));
        assert!(filter.to_string().contains("coverplan_app=trace"));
    }
}
