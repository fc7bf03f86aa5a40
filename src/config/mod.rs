//! Optional on-disk settings for the `maestro` binary.
//!
//! Nothing here affects how arguments resolve; it only controls logging
//! and how the resolved configuration is printed.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, OutputConfig, LOG_LEVELS};
