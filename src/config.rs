//! Wrap-time configuration.
//!
//! Plain deserializable structs so embedding applications can carry the
//! wrap configuration in whatever config source they already use.

use serde::Deserialize;

/// Declarative selection of what each event reports.
///
/// `values` names either keyword arguments of the call or attributes of the
/// call's receiver; keyword arguments take precedence when a name matches
/// both. `result` controls whether the completion event carries the return
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AlsoLog {
    /// Field names to report on both events.
    pub values: Vec<String>,
    /// Whether to add the return value to the completion event.
    pub result: bool,
}

impl AlsoLog {
    /// Selection reporting the named fields.
    pub fn values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            result: false,
        }
    }

    /// Also report the return value on the completion event.
    pub fn with_result(mut self) -> Self {
        self.result = true;
        self
    }
}

/// Wrap configuration.
///
/// The level is kept as a name here and validated when the configuration is
/// turned into an [`InformOn`](crate::InformOn); an unrecognized name fails
/// at wrap time, before any call is made.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InformConfig {
    /// Severity level name (case-insensitive).
    pub level: String,
    /// Field selection for emitted events.
    pub also_log: AlsoLog,
}

impl Default for InformConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            also_log: AlsoLog::default(),
        }
    }
}
