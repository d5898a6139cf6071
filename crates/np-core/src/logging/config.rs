//! Logging configuration read from NP_LOG and NP_LOG_FORMAT.

use tracing_subscriber::filter::LevelFilter;

pub const ENV_LOG_LEVEL: &str = "NP_LOG";
pub const ENV_LOG_FORMAT: &str = "NP_LOG_FORMAT";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Human,
    /// One JSON object per line, for log capture.
    Jsonl,
}

/// Logging configuration.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Level for the native-panic crates. `None` defers to RUST_LOG.
    pub level: Option<LevelFilter>,
}

impl LogConfig {
    /// Read NP_LOG and NP_LOG_FORMAT, then apply an explicit level override.
    pub fn from_env(level: Option<LevelFilter>) -> Self {
        let mut config = Self::from_vars(
            std::env::var(ENV_LOG_LEVEL).ok().as_deref(),
            std::env::var(ENV_LOG_FORMAT).ok().as_deref(),
        );
        if level.is_some() {
            config.level = level;
        }
        config
    }

    pub(crate) fn from_vars(np_log: Option<&str>, np_log_format: Option<&str>) -> Self {
        let level = np_log.and_then(|val| match val.parse::<LevelFilter>() {
            Ok(level) => Some(level),
            Err(_) => {
                eprintln!("np-core: ignoring invalid {}={:?}", ENV_LOG_LEVEL, val);
                None
            }
        });
        let format = match np_log_format.map(str::to_ascii_lowercase).as_deref() {
            Some("json") | Some("jsonl") => LogFormat::Jsonl,
            _ => LogFormat::Human,
        };
        LogConfig { format, level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_np_log_sets_level() {
        let config = LogConfig::from_vars(Some("error"), None);
        assert_eq!(config.level, Some(LevelFilter::ERROR));
        assert_eq!(config.format, LogFormat::Human);
    }

    #[test]
    fn test_unset_np_log_defers() {
        assert_eq!(LogConfig::from_vars(None, None).level, None);
        assert_eq!(LogConfig::from_vars(Some("loud"), None).level, None);
    }

    #[test]
    fn test_json_format() {
        assert_eq!(LogConfig::from_vars(None, Some("JSON")).format, LogFormat::Jsonl);
        assert_eq!(LogConfig::from_vars(None, Some("jsonl")).format, LogFormat::Jsonl);
        assert_eq!(LogConfig::from_vars(None, Some("xml")).format, LogFormat::Human);
    }
}
