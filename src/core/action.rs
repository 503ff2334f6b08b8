//! Actions: the messages a reducer receives.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A message routed to a reducer by its action type.
///
/// Serializes as `{"type": "<namespace>/<key>", "payload": ...}`. The
/// `payload` field is left out entirely when the action carries none.
///
/// # Example
///
/// ```rust
/// use instant_reducer::core::Action;
/// use serde_json::json;
///
/// let action = Action::with_payload("TestCounter/increment", json!({ "delta": 2 }));
/// assert_eq!(
///     serde_json::to_value(&action).unwrap(),
///     json!({ "type": "TestCounter/increment", "payload": { "delta": 2 } })
/// );
///
/// let reset = Action::new("TestCounter/reset");
/// assert_eq!(serde_json::to_value(&reset).unwrap(), json!({ "type": "TestCounter/reset" }));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Fully-qualified action type, `"<namespace>/<key>"`.
    #[serde(rename = "type")]
    pub tag: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl Action {
    /// Create an action without a payload.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            payload: None,
        }
    }

    /// Create an action carrying `payload`.
    pub fn with_payload(tag: impl Into<String>, payload: Value) -> Self {
        Self {
            tag: tag.into(),
            payload: Some(payload),
        }
    }

    /// The action type.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Decode the payload into `P`.
    ///
    /// A missing payload decodes as JSON `null`, so `Option<P>` and `()`
    /// succeed on actions without one.
    pub fn payload_as<P: DeserializeOwned>(&self) -> Result<P, serde_json::Error> {
        <P as Deserialize>::deserialize(self.payload_or_null())
    }

    pub(crate) fn payload_or_null(&self) -> &Value {
        static NULL: Value = Value::Null;
        self.payload.as_ref().unwrap_or(&NULL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Delta {
        delta: i64,
    }

    #[test]
    fn deserializes_from_redux_shape() {
        let action: Action =
            serde_json::from_value(json!({ "type": "TestCounter/increment", "payload": { "delta": 1 } }))
                .unwrap();

        assert_eq!(action.tag(), "TestCounter/increment");
        assert_eq!(action.payload, Some(json!({ "delta": 1 })));
    }

    #[test]
    fn missing_payload_deserializes_as_none() {
        let action: Action = serde_json::from_value(json!({ "type": "TestCounter/reset" })).unwrap();
        assert_eq!(action, Action::new("TestCounter/reset"));
    }

    #[test]
    fn payload_as_decodes_typed_payload() {
        let action = Action::with_payload("TestCounter/increment", json!({ "delta": 3 }));
        assert_eq!(action.payload_as::<Delta>().unwrap(), Delta { delta: 3 });
    }

    #[test]
    fn payload_as_reports_mismatched_payload() {
        let action = Action::with_payload("TestCounter/increment", json!("three"));
        assert!(action.payload_as::<Delta>().is_err());
    }

    #[test]
    fn absent_payload_decodes_as_null() {
        let action = Action::new("TestCounter/reset");
        assert_eq!(action.payload_as::<Option<Delta>>().unwrap(), None);
        assert!(action.payload_as::<()>().is_ok());
    }
}
