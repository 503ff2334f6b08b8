//! Handlers: pure transition functions for one action type.
//!
//! A handler is like a reducer that is specific to one action type and
//! receives that action's payload directly. Whether it takes a payload is
//! fixed when it is created, and decides the shape of its action creator.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Type-erased handler that ignores any payload.
pub type BareFn<S> = Arc<dyn Fn(S) -> S + Send + Sync>;

/// Type-erased handler that decodes its payload before touching the state.
///
/// On a payload that does not decode, the untouched state is handed back
/// alongside the decode error.
pub type PayloadFn<S> = Arc<dyn Fn(S, &Value) -> Result<S, Rejected<S>> + Send + Sync>;

/// A payload rejected by a handler, with the state it was meant to update.
#[derive(Debug)]
pub struct Rejected<S> {
    pub state: S,
    pub error: serde_json::Error,
}

/// Pure state transition for a single action type.
///
/// # Example
///
/// ```rust
/// use instant_reducer::core::Handler;
/// use serde_json::json;
///
/// let reset = Handler::bare(|_count: i64| 0);
/// assert!(!reset.takes_payload());
///
/// let add = Handler::payload(|count: i64, delta: i64| count + delta);
/// assert!(add.takes_payload());
/// assert_eq!(add.apply(1, &json!(2)).unwrap(), 3);
/// ```
pub enum Handler<S> {
    /// Takes only the state; its action creator takes no arguments.
    Bare(BareFn<S>),

    /// Takes the state and a payload; its action creator takes the payload.
    Payload(PayloadFn<S>),
}

impl<S: 'static> Handler<S> {
    /// Create a handler from a function of the state alone.
    pub fn bare<F>(handler: F) -> Self
    where
        F: Fn(S) -> S + Send + Sync + 'static,
    {
        Handler::Bare(Arc::new(handler))
    }

    /// Create a handler from a function of the state and a typed payload.
    pub fn payload<P, F>(handler: F) -> Self
    where
        P: DeserializeOwned + 'static,
        F: Fn(S, P) -> S + Send + Sync + 'static,
    {
        Handler::Payload(Arc::new(move |state: S, payload: &Value| {
            match <P as Deserialize>::deserialize(payload) {
                Ok(payload) => Ok(handler(state, payload)),
                Err(error) => Err(Rejected { state, error }),
            }
        }))
    }
}

impl<S> Handler<S> {
    /// Whether the handler expects a payload.
    pub fn takes_payload(&self) -> bool {
        matches!(self, Handler::Payload(_))
    }

    /// Run the handler against `state`.
    ///
    /// Bare handlers ignore `payload`.
    pub fn apply(&self, state: S, payload: &Value) -> Result<S, Rejected<S>> {
        match self {
            Handler::Bare(handler) => Ok(handler(state)),
            Handler::Payload(handler) => handler(state, payload),
        }
    }
}

impl<S> Clone for Handler<S> {
    fn clone(&self) -> Self {
        match self {
            Handler::Bare(handler) => Handler::Bare(Arc::clone(handler)),
            Handler::Payload(handler) => Handler::Payload(Arc::clone(handler)),
        }
    }
}

impl<S> fmt::Debug for Handler<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Bare(_) => f.write_str("Handler::Bare"),
            Handler::Payload(_) => f.write_str("Handler::Payload"),
        }
    }
}
