/// Configuration for a ProtoCol front end.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub log: LogConfig,
}

/// Logging configuration consumed by [`crate::logging::init_with`].
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// `tracing-subscriber` env-filter directives, e.g. `"info,protocol_ui=trace"`.
    ///
    /// `RUST_LOG` takes precedence when it is set.
    pub filter: String,
    /// Emit ANSI colour codes.
    pub ansi: bool,
}

impl LogConfig {
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            ..Self::default()
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: "info".to_string(),
            ansi: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let config = Config::default();
        assert_eq!(config.log.filter, "info");
        assert!(config.log.ansi);
    }

    #[test]
    fn test_custom_filter_keeps_ansi_default() {
        let log = LogConfig::new("debug,protocol_ui=trace");
        assert_eq!(log.filter, "debug,protocol_ui=trace");
        assert!(log.ansi);
    }
}
