//! Action creators derived from a handler map.

use crate::builder::HandlerMap;
use crate::core::{apply_prefix, Action};
use serde::Serialize;
use std::collections::HashMap;

/// Errors from looking up or invoking an action creator.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("No action creator named '{key}'")]
    UnknownAction { key: String },

    #[error("Action '{key}' requires a payload")]
    PayloadRequired { key: String },

    #[error("Action '{key}' does not take a payload")]
    PayloadNotAccepted { key: String },

    #[error("Failed to serialize action payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Creator for an action whose handler takes no payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BareCreator {
    tag: String,
}

impl BareCreator {
    /// Build the action. Its payload is always absent.
    pub fn create(&self) -> Action {
        Action::new(self.tag.clone())
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// Creator for an action whose handler takes a payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayloadCreator {
    tag: String,
}

impl PayloadCreator {
    /// Build the action carrying `payload`.
    pub fn create<P: Serialize>(&self, payload: P) -> Result<Action, ActionError> {
        let payload = serde_json::to_value(payload)?;
        Ok(Action::with_payload(self.tag.clone(), payload))
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// An action creator, shaped after its handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionCreator {
    Bare(BareCreator),
    Payload(PayloadCreator),
}

impl ActionCreator {
    pub fn tag(&self) -> &str {
        match self {
            ActionCreator::Bare(creator) => creator.tag(),
            ActionCreator::Payload(creator) => creator.tag(),
        }
    }

    pub fn takes_payload(&self) -> bool {
        matches!(self, ActionCreator::Payload(_))
    }
}

/// Action creators for one namespace, looked up by operation name.
///
/// # Example
///
/// ```rust
/// use instant_reducer::{combine_handlers, HandlerMap};
/// use serde_json::json;
///
/// let handlers = HandlerMap::builder()
///     .on("reset", |_count: i64| 0)
///     .on_payload("add", |count: i64, by: i64| count + by)
///     .build()
///     .unwrap();
/// let counter = combine_handlers("Counter", || 0, handlers);
///
/// let reset = counter.actions.bare("reset").unwrap().create();
/// assert_eq!(reset.tag, "Counter/reset");
/// assert_eq!(reset.payload, None);
///
/// let add = counter.actions.payload("add").unwrap().create(2).unwrap();
/// assert_eq!(add.payload, Some(json!(2)));
///
/// // Arity is part of the creator's shape.
/// assert!(counter.actions.bare("add").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ActionCreators {
    creators: HashMap<String, ActionCreator>,
}

impl ActionCreators {
    pub fn get(&self, key: &str) -> Option<&ActionCreator> {
        self.creators.get(key)
    }

    /// The zero-argument creator for `key`, if its handler takes no payload.
    pub fn bare(&self, key: &str) -> Option<&BareCreator> {
        match self.creators.get(key)? {
            ActionCreator::Bare(creator) => Some(creator),
            ActionCreator::Payload(_) => None,
        }
    }

    /// The one-argument creator for `key`, if its handler takes a payload.
    pub fn payload(&self, key: &str) -> Option<&PayloadCreator> {
        match self.creators.get(key)? {
            ActionCreator::Payload(creator) => Some(creator),
            ActionCreator::Bare(_) => None,
        }
    }

    /// Build the payload-free action for `key`.
    pub fn create(&self, key: &str) -> Result<Action, ActionError> {
        match self.lookup(key)? {
            ActionCreator::Bare(creator) => Ok(creator.create()),
            ActionCreator::Payload(_) => Err(ActionError::PayloadRequired {
                key: key.to_string(),
            }),
        }
    }

    /// Build the action for `key` carrying `payload`.
    pub fn create_with<P: Serialize>(&self, key: &str, payload: P) -> Result<Action, ActionError> {
        match self.lookup(key)? {
            ActionCreator::Payload(creator) => creator.create(payload),
            ActionCreator::Bare(_) => Err(ActionError::PayloadNotAccepted {
                key: key.to_string(),
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActionCreator)> {
        self.creators
            .iter()
            .map(|(key, creator)| (key.as_str(), creator))
    }

    pub fn len(&self) -> usize {
        self.creators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }

    fn lookup(&self, key: &str) -> Result<&ActionCreator, ActionError> {
        self.creators
            .get(key)
            .ok_or_else(|| ActionError::UnknownAction {
                key: key.to_string(),
            })
    }
}

/// Derive one action creator per handler, tagged under `namespace`.
pub fn extract_action_creators<S>(namespace: &str, handlers: &HandlerMap<S>) -> ActionCreators {
    let creators = handlers
        .iter()
        .map(|(key, handler)| {
            let tag = apply_prefix(namespace, key);
            let creator = if handler.takes_payload() {
                ActionCreator::Payload(PayloadCreator { tag })
            } else {
                ActionCreator::Bare(BareCreator { tag })
            };
            (key.to_string(), creator)
        })
        .collect();

    ActionCreators { creators }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn creators() -> ActionCreators {
        let handlers = HandlerMap::builder()
            .on("reset", |_: i64| 0)
            .on_payload("add", |n: i64, by: i64| n + by)
            .build()
            .unwrap();
        extract_action_creators("Counter", &handlers)
    }

    #[test]
    fn bare_creator_has_no_payload() {
        let action = creators().bare("reset").unwrap().create();

        assert_eq!(action, Action::new("Counter/reset"));
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({ "type": "Counter/reset" })
        );
    }

    #[test]
    fn payload_creator_carries_payload() {
        let action = creators().payload("add").unwrap().create(3).unwrap();
        assert_eq!(action, Action::with_payload("Counter/add", json!(3)));
    }

    #[test]
    fn creator_shape_follows_handler() {
        let creators = creators();

        assert!(creators.bare("add").is_none());
        assert!(creators.payload("reset").is_none());
        assert!(creators.get("add").unwrap().takes_payload());
        assert!(!creators.get("reset").unwrap().takes_payload());
    }

    #[test]
    fn create_reports_arity_mismatch() {
        let creators = creators();

        assert!(matches!(
            creators.create("add"),
            Err(ActionError::PayloadRequired { key }) if key == "add"
        ));
        assert!(matches!(
            creators.create_with("reset", 1),
            Err(ActionError::PayloadNotAccepted { key }) if key == "reset"
        ));
    }

    #[test]
    fn create_reports_unknown_action() {
        assert!(matches!(
            creators().create("missing"),
            Err(ActionError::UnknownAction { key }) if key == "missing"
        ));
    }

    #[test]
    fn payload_serialization_failure_is_reported() {
        let mut bad_keys = HashMap::new();
        bad_keys.insert(vec![1u8], 1);

        let result = creators().create_with("add", bad_keys);
        assert!(matches!(result, Err(ActionError::Payload(_))));
    }

    #[test]
    fn every_handler_gets_a_creator() {
        let creators = creators();
        assert_eq!(creators.len(), 2);
        assert_eq!(creators.get("add").unwrap().tag(), "Counter/add");
    }
}
