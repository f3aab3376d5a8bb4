//! Tracing/logging initialization.
//!
//! The filter comes from `RUST_LOG` (default `info`); the output format from
//! `SHELFVIEW_LOG_FORMAT`.

use core::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "SHELFVIEW_LOG_FORMAT";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Compact human-readable lines.
    Text,
}

/// A log format name that is neither `json` nor `text`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{raw:?} is not a known log format (expected json or text)")]
pub struct UnknownLogFormat {
    pub raw: String,
}

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "compact" => Ok(Self::Text),
            _ => Err(UnknownLogFormat { raw: s.to_string() }),
        }
    }
}

impl LogFormat {
    /// Read the format from `SHELFVIEW_LOG_FORMAT`; unset means the default.
    pub fn from_env() -> Result<Self, UnknownLogFormat> {
        Self::from_var(std::env::var(LOG_FORMAT_ENV).ok())
    }

    pub fn from_var(value: Option<String>) -> Result<Self, UnknownLogFormat> {
        value.map_or(Ok(Self::default()), |raw| raw.parse())
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops). Logs go to stderr so
/// they never interleave with rendered tables on stdout.
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Text => builder.compact().without_time().try_init(),
    };
}
