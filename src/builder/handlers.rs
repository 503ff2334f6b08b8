//! Builder for the handler map a namespace is derived from.

use crate::builder::error::BuildError;
use crate::core::Handler;
use serde::de::DeserializeOwned;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Handlers keyed by their short operation name.
///
/// Built once with [`HandlerMap::builder`] and then moved into
/// [`combine_handlers`](fn@crate::combine_handlers), after which it cannot change.
pub struct HandlerMap<S> {
    handlers: HashMap<String, Handler<S>>,
}

impl<S: 'static> HandlerMap<S> {
    /// Start building a handler map.
    pub fn builder() -> HandlerMapBuilder<S> {
        HandlerMapBuilder::new()
    }
}

impl<S> HandlerMap<S> {
    /// Look up the handler registered under `key`.
    pub fn get(&self, key: &str) -> Option<&Handler<S>> {
        self.handlers.get(key)
    }

    /// Iterate over `(key, handler)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Handler<S>)> {
        self.handlers
            .iter()
            .map(|(key, handler)| (key.as_str(), handler))
    }

    /// Registered operation names, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<S> Clone for HandlerMap<S> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
        }
    }
}

impl<S> std::fmt::Debug for HandlerMap<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.handlers.iter()).finish()
    }
}

/// Fluent builder for a [`HandlerMap`].
///
/// Whether an operation takes a payload is declared by the method used to
/// register it: [`on`](Self::on) for state-only handlers,
/// [`on_payload`](Self::on_payload) for handlers that take one.
///
/// # Example
///
/// ```rust
/// use instant_reducer::HandlerMap;
///
/// let handlers = HandlerMap::builder()
///     .on("reset", |_count: i64| 0)
///     .on_payload("add", |count: i64, by: i64| count + by)
///     .build()
///     .unwrap();
///
/// assert_eq!(handlers.len(), 2);
/// assert!(handlers.get("add").unwrap().takes_payload());
/// ```
pub struct HandlerMapBuilder<S> {
    entries: Vec<(String, Handler<S>)>,
}

impl<S: 'static> HandlerMapBuilder<S> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a handler that takes only the state.
    pub fn on<F>(self, key: impl Into<String>, handler: F) -> Self
    where
        F: Fn(S) -> S + Send + Sync + 'static,
    {
        self.handler(key, Handler::bare(handler))
    }

    /// Register a handler that takes the state and a payload of type `P`.
    pub fn on_payload<P, F>(self, key: impl Into<String>, handler: F) -> Self
    where
        P: DeserializeOwned + 'static,
        F: Fn(S, P) -> S + Send + Sync + 'static,
    {
        self.handler(key, Handler::payload(handler))
    }

    /// Register a pre-built handler.
    pub fn handler(mut self, key: impl Into<String>, handler: Handler<S>) -> Self {
        self.entries.push((key.into(), handler));
        self
    }

    /// Build the map.
    /// Returns an error if two handlers share a key.
    pub fn build(self) -> Result<HandlerMap<S>, BuildError> {
        let mut handlers = HashMap::with_capacity(self.entries.len());

        for (key, handler) in self.entries {
            match handlers.entry(key) {
                Entry::Occupied(entry) => {
                    return Err(BuildError::DuplicateHandler {
                        key: entry.key().clone(),
                    })
                }
                Entry::Vacant(entry) => {
                    entry.insert(handler);
                }
            }
        }

        Ok(HandlerMap { handlers })
    }
}

impl<S: 'static> Default for HandlerMapBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
