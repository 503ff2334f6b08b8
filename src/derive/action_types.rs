//! Action type constants derived from a handler map.

use crate::builder::HandlerMap;
use crate::core::{apply_prefix, Action};
use std::collections::HashMap;
use std::ops::Index;

/// Fully-qualified action types, looked up by operation name.
///
/// Useful for comparing an incoming action's type directly, e.g. in host code
/// that reacts to actions from several namespaces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionTypes {
    types: HashMap<String, String>,
}

impl ActionTypes {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.types.get(key).map(String::as_str)
    }

    /// Whether `action` has the type registered under `key`.
    pub fn matches(&self, key: &str, action: &Action) -> bool {
        self.get(key) == Some(action.tag())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.types
            .iter()
            .map(|(key, tag)| (key.as_str(), tag.as_str()))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Index<&str> for ActionTypes {
    type Output = str;

    /// # Panics
    ///
    /// Panics if no handler is registered under `key`.
    fn index(&self, key: &str) -> &str {
        match self.types.get(key) {
            Some(tag) => tag,
            None => panic!("no action type registered for '{key}'"),
        }
    }
}

/// Derive the fully-qualified action type of every handler under `namespace`.
pub fn extract_action_types<S>(namespace: &str, handlers: &HandlerMap<S>) -> ActionTypes {
    let types = handlers
        .keys()
        .map(|key| (key.to_string(), apply_prefix(namespace, key)))
        .collect();

    ActionTypes { types }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action_types() -> ActionTypes {
        let handlers = HandlerMap::builder()
            .on("reset", |_: i64| 0)
            .on_payload("add", |n: i64, by: i64| n + by)
            .build()
            .unwrap();
        extract_action_types("Counter", &handlers)
    }

    #[test]
    fn each_key_maps_to_prefixed_type() {
        let types = action_types();

        assert_eq!(types.len(), 2);
        assert_eq!(&types["reset"], "Counter/reset");
        assert_eq!(types.get("add"), Some("Counter/add"));
        assert_eq!(types.get("missing"), None);
    }

    #[test]
    fn matches_compares_action_type() {
        let types = action_types();

        assert!(types.matches("reset", &Action::new("Counter/reset")));
        assert!(!types.matches("reset", &Action::new("Other/reset")));
        assert!(!types.matches("missing", &Action::new("Counter/missing")));
    }

    #[test]
    #[should_panic(expected = "no action type registered")]
    fn index_panics_on_unknown_key() {
        let _ = &action_types()["missing"];
    }
}
