//! Log entry format module
//!
//! Supports two formats:
//! - `text` (`[TAG] <timestamp> message`)
//! - `json` (one JSON object per line)

use chrono::Local;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Severity of a log entry, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" | "trace" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("Unknown log level: {other}")),
        }
    }
}

/// Output layout of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Unknown log format: {other}")),
        }
    }
}

/// One log line with its structured fields
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub time: chrono::DateTime<Local>,
    pub level: Level,
    /// Short uppercase tag shown in text output (LOG, CHAIN, WARN, ...)
    pub tag: &'static str,
    pub message: String,
    /// Extra fields, only rendered in JSON output
    pub fields: Map<String, Value>,
}

impl LogEntry {
    /// Create a new entry with current timestamp
    pub fn new(level: Level, tag: &'static str, message: impl Into<String>) -> Self {
        Self {
            time: Local::now(),
            level,
            tag,
            message: message.into(),
            fields: Map::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn format(&self, format: LogFormat) -> String {
        match format {
            LogFormat::Text => self.format_text(),
            LogFormat::Json => self.format_json(),
        }
    }

    fn format_text(&self) -> String {
        format!(
            "[{}] {} {}",
            self.tag,
            self.time.format("%Y-%m-%dT%H:%M:%S%.3f%:z"),
            self.message
        )
    }

    fn format_json(&self) -> String {
        let mut object = Map::new();
        object.insert("time".to_string(), Value::String(self.time.to_rfc3339()));
        object.insert("level".to_string(), Value::String(self.level.to_string()));
        object.insert("tag".to_string(), Value::String(self.tag.to_string()));
        object.insert("message".to_string(), Value::String(self.message.clone()));
        for (key, value) in &self.fields {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_entry() -> LogEntry {
        LogEntry::new(Level::Info, "LOG", "body.name = \"ada\"")
            .field("path", json!("body.name"))
            .field("value", json!("ada"))
    }

    #[test]
    fn test_format_text() {
        let log = create_test_entry().format(LogFormat::Text);
        assert!(log.starts_with("[LOG] "));
        assert!(log.ends_with("body.name = \"ada\""));
        // Fields are JSON-only
        assert!(!log.contains("\"value\""));
    }

    #[test]
    fn test_format_json() {
        let log = create_test_entry().format(LogFormat::Json);
        let parsed: Value = serde_json::from_str(&log).unwrap();
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["tag"], "LOG");
        assert_eq!(parsed["path"], "body.name");
        assert_eq!(parsed["value"], "ada");
        assert!(parsed["time"].is_string());
    }

    #[test]
    fn test_level_ordering_and_parse() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Warn < Level::Error);
        assert_eq!("WARNING".parse::<Level>(), Ok(Level::Warn));
        assert!("loud".parse::<Level>().is_err());
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
    }
}
