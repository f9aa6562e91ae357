//! Tracing subscriber setup.
//!
//! Events go to stderr so that stdout carries only the rendered bundle.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable console output.
    Console,
    /// JSON structured logging.
    Json,
}

/// Logging settings resolved from flags and config.
#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Filter directive (e.g. "warn", "debug").
    pub filter: String,
    /// Output format.
    pub format: LogFormat,
}

impl LogSettings {
    /// Resolve the filter from an explicit level, falling back to the `-v`
    /// count.
    pub fn resolve(level: Option<&str>, verbosity: u8, format: LogFormat) -> Self {
        let filter = level.map_or_else(
            || verbosity_filter(verbosity).to_string(),
            str::to_string,
        );
        Self { filter, format }
    }
}

/// Filter directive for a `-v` count.
pub fn verbosity_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
pub fn init(config: &LogSettings) {
    let env_filter =
        EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = match config.format {
        LogFormat::Console => fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .json()
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
