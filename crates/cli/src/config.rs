//! Environment-driven configuration.

use std::path::PathBuf;

use shelfview_observability::{LogFormat, UnknownLogFormat, tracing::LOG_FORMAT_ENV};

/// Directory holding `users.json`, `categories.json` and `products.json`.
pub const DATA_DIR_ENV: &str = "SHELFVIEW_DATA_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// `None` uses the seed data compiled into the binary.
    pub data_dir: Option<PathBuf>,
    pub log_format: LogFormat,
    /// Set when the configured log format was rejected and the default used instead.
    /// Reported once logging is up.
    pub log_format_error: Option<UnknownLogFormat>,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(DATA_DIR_ENV).ok(),
            std::env::var(LOG_FORMAT_ENV).ok(),
        )
    }

    fn from_vars(data_dir: Option<String>, log_format: Option<String>) -> Self {
        let (log_format, log_format_error) = match LogFormat::from_var(log_format) {
            Ok(format) => (format, None),
            Err(e) => (LogFormat::default(), Some(e)),
        };

        Self {
            data_dir: data_dir
                .filter(|d| !d.trim().is_empty())
                .map(PathBuf::from),
            log_format,
            log_format_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_data_dir_means_seed() {
        let config = CliConfig::from_vars(Some("  ".to_string()), None);
        assert_eq!(config.data_dir, None);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_format_error, None);
    }

    #[test]
    fn data_dir_and_format_are_kept() {
        let config = CliConfig::from_vars(Some("/srv/shelf".to_string()), Some("text".to_string()));
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/shelf")));
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn unknown_format_falls_back_and_keeps_the_error() {
        let config = CliConfig::from_vars(None, Some("yaml".to_string()));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(
            config.log_format_error,
            Some(UnknownLogFormat {
                raw: "yaml".to_string()
            })
        );
    }
}
