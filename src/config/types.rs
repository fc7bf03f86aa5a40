use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Accepted values for `logging.level`.
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Diagnostic logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is not set (default: "warn").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Write logs to this file instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// How the resolved configuration is printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output (default: true).
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_pretty() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.logging.level, "warn");
        assert!(config.output.pretty);
    }

    #[test]
    fn partial_sections_fill_missing_fields() {
        let config: Config = toml::from_str("[logging]\nfile = \"/tmp/m.log\"\n").unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/m.log")));
    }
}
