//! Event construction.
//!
//! Builds the base fields shared by a call's starting and completion
//! events. Status and result markers are the wrapper's responsibility.

use serde_json::Value;

use crate::config::AlsoLog;
use crate::interfaces::callable::Call;
use crate::Fields;

/// Resolve the selected field names against a call and name the callable.
///
/// Keyword arguments take precedence over receiver attributes when a name
/// matches both. Names unresolvable by either path are omitted, not null;
/// a receiver attribute that resolves to null is reported as null.
pub fn data_to_report(function: &str, call: &Call<'_>, also_log: &AlsoLog) -> Fields {
    let mut data = Fields::new();

    for name in &also_log.values {
        if let Some(value) = call.keyword(name) {
            data.insert(name.clone(), value.clone());
        }
    }

    for name in &also_log.values {
        if data.contains_key(name) {
            continue;
        }
        if let Some(value) = call.receiver().and_then(|receiver| receiver.resolve(name)) {
            data.insert(name.clone(), value);
        }
    }

    data.insert("function".to_string(), Value::from(function));
    data
}
