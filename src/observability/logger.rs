//! Structured JSON event log
//!
//! - One log line = one event
//! - Deterministic key ordering
//! - Explicit severity levels
//! - Errors go to stderr

use std::fmt;

use serde_json::{Map, Value};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info = 0,
    /// Recoverable issues
    Warn = 1,
    /// Operation failures
    Error = 2,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured event logger emitting one JSON object per line
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    ///
    /// Key ordering is deterministic (alphabetical). Error events go
    /// to stderr, everything else to stdout.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        if severity >= Severity::Error {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    /// Render an event to its JSON line
    ///
    /// `serde_json::Map` is BTree-backed, so serialization order is
    /// alphabetical by key without any extra sorting here.
    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut map = Map::new();
        map.insert("event".to_string(), Value::String(event.to_string()));
        map.insert(
            "severity".to_string(),
            Value::String(severity.as_str().to_string()),
        );

        for (key, value) in fields {
            map.insert((*key).to_string(), Value::String((*value).to_string()));
        }

        Value::Object(map).to_string()
    }
}
