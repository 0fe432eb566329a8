//! Textual formats for spec files.
//!
//! A project uses one [`RecordFormat`] for every spec it reads and writes.
//! The choice is made once when the configuration is built; both formats
//! share the same encode/decode interface:
//! - **YAML** (default): human-editable, `*.yaml` files
//! - **JSON**: pretty-printed, `*.json` files

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::Record;

/// Serialization format for spec records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// YAML via `serde_yaml`.
    #[default]
    Yaml,
    /// Pretty-printed JSON via `serde_json`.
    Json,
}

impl RecordFormat {
    /// File extension (without dot) for spec files in this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }

    /// Serialize a record. Unicode is written unescaped and key order kept.
    pub fn encode(self, record: &Record) -> Result<String, String> {
        match self {
            Self::Yaml => serde_yaml::to_string(record).map_err(|e| e.to_string()),
            Self::Json => serde_json::to_string_pretty(record)
                .map(|mut s| {
                    s.push('\n');
                    s
                })
                .map_err(|e| e.to_string()),
        }
    }

    /// Parse a record. Blank input and an explicit null are empty records;
    /// any other non-mapping document is rejected.
    pub fn decode(self, source: &str) -> Result<Record, String> {
        if source.trim().is_empty() {
            return Ok(Record::new());
        }
        let value: Value = match self {
            Self::Yaml => serde_yaml::from_str(source).map_err(|e| e.to_string())?,
            Self::Json => serde_json::from_str(source).map_err(|e| e.to_string())?,
        };
        match value {
            Value::Null => Ok(Record::new()),
            Value::Object(map) => Ok(Record::from(map)),
            other => Err(format!(
                "expected a mapping at the top level, found {}",
                value_kind(&other)
            )),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for RecordFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown record format: {other}")),
        }
    }
}
