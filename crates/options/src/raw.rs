//! Raw option values
//!
//! Values arrive untyped from the command line, the environment or the
//! project file. A raw value keeps the shape it arrived in until an option
//! parses it.

use std::fmt;
use serde::{Deserialize, Serialize};

/// An unparsed option value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Observed input kind of a raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RawValueKind {
    Boolean,
    Integer,
    Float,
    String,
}

impl RawValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RawValueKind::Boolean => "boolean",
            RawValueKind::Integer => "integer",
            RawValueKind::Float => "float",
            RawValueKind::String => "string",
        }
    }
}

impl fmt::Display for RawValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RawValue {
    pub fn kind(&self) -> RawValueKind {
        match self {
            RawValue::Boolean(_) => RawValueKind::Boolean,
            RawValue::Integer(_) => RawValueKind::Integer,
            RawValue::Float(_) => RawValueKind::Float,
            RawValue::Text(_) => RawValueKind::String,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Boolean(b) => write!(f, "{}", b),
            RawValue::Integer(n) => write!(f, "{}", n),
            RawValue::Float(n) => write!(f, "{}", n),
            RawValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Integer(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Boolean(value)
    }
}
