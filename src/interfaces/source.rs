//! Receiver attribute resolution.

use serde_json::Value;

use crate::Fields;

/// Named attribute lookup on a call's receiver.
///
/// Selected field names not supplied as keyword arguments are resolved
/// against the call's receiver through this trait. `Some(Value::Null)`
/// means the attribute exists but has no value and is reported as null;
/// `None` means the name is unresolvable and the field is omitted from the
/// event. Method-like attributes are invoked inside `resolve`; callers only
/// see the final value.
pub trait AttributeSource {
    /// Resolve a named attribute to a reportable value.
    fn resolve(&self, name: &str) -> Option<Value>;
}

/// JSON objects resolve their keys; other values resolve nothing.
impl AttributeSource for Value {
    fn resolve(&self, name: &str) -> Option<Value> {
        self.as_object().and_then(|fields| fields.get(name)).cloned()
    }
}

impl AttributeSource for Fields {
    fn resolve(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_object_resolves_keys() {
        let state = json!({"fanciness": 8, "note": null});

        assert_eq!(state.resolve("fanciness"), Some(json!(8)));
        assert_eq!(state.resolve("note"), Some(Value::Null));
        assert_eq!(state.resolve("missing"), None);
    }

    #[test]
    fn test_non_object_resolves_nothing() {
        assert_eq!(json!("x").resolve("anything"), None);
        assert_eq!(json!(42).resolve("anything"), None);
    }
}
