//! Severity levels for emitted events.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Unrecognized severity level name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized severity level: {0}")]
pub struct UnknownLevel(pub String);

/// Named logging rank used for filtering and routing by the logging backend.
///
/// The numeric ranks are fixed for compatibility with consumers expecting
/// them: critical=50, error=40, warning=30, info=20, debug=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Critical,
    Error,
    Warning,
    Info,
    Debug,
}

impl Severity {
    /// Numeric rank forwarded to the logging backend.
    pub fn rank(self) -> u8 {
        match self {
            Severity::Critical => 50,
            Severity::Error => 40,
            Severity::Warning => 30,
            Severity::Info => 20,
            Severity::Debug => 10,
        }
    }

    /// Lowercase level name.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = UnknownLevel;

    /// Level names are case-insensitive.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            _ => Err(UnknownLevel(name.to_string())),
        }
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
