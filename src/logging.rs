//! Logging setup owned by the entry point.
//!
//! Library code only emits `tracing` events. Whoever owns `main` builds a
//! [`LogConfig`] and calls [`init`] once; nothing here is configured at import.

use clap::ValueEnum;
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when neither the config nor `RUST_LOG` names one.
pub const DEFAULT_LEVEL: &str = "info";

/// Line format for emitted events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Timestamp, level, and message on one line.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

/// Explicit logging context, built by the caller and handed to [`init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `utilkit=debug`.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl LogConfig {
    /// Build the filter from `level`; `RUST_LOG` and then [`DEFAULT_LEVEL`]
    /// are used only when `level` does not parse.
    #[must_use]
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    }
}

/// Install a stderr subscriber for `config`.
///
/// Returns `false` if a global subscriber was already installed; the earlier
/// one stays in effect.
pub fn init(config: &LogConfig) -> bool {
    let builder = fmt()
        .with_env_filter(config.filter())
        .with_target(false)
        .with_writer(io::stderr);
    match config.format {
        LogFormat::Compact => builder.compact().try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    }
}
