// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub responses: ResponseConfig,
    pub logging: LoggingConfig,
}

/// How emitted responses are turned into HTTP bodies
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ResponseConfig {
    /// Pretty-print JSON bodies
    #[serde(default)]
    pub pretty_json: bool,
    #[serde(default = "default_content_type")]
    pub content_type: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_content_type() -> String {
    "application/json".to_string()
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            pretty_json: false,
            content_type: default_content_type(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Minimum level written (debug, info, warn, error)
    #[serde(default = "default_level")]
    pub level: String,
    /// Entry format (text or json)
    #[serde(default = "default_format")]
    pub format: String,
    /// Info log file path (optional, stdout if not set)
    #[serde(default)]
    pub log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_level() -> String {
    "info".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            log_file: None,
            error_log_file: None,
        }
    }
}
