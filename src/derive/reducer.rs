//! The reducer derived from a handler map.
//!
//! The reducer strips its namespace from an action's type, looks up the
//! handler for the remaining key and applies it. Actions it has no handler
//! for, including every action from another namespace, leave the state as it
//! was. That lets any number of namespaced reducers see the same stream of
//! actions and ignore each other's.

use crate::builder::HandlerMap;
use crate::core::{remove_prefix, Action, Rejected};
use std::fmt;
use std::sync::Arc;

/// Supplier of the state used when the store has none yet.
pub type InitialState<S> = Arc<dyn Fn() -> S + Send + Sync>;

/// Errors reported by [`Reducer::dispatch`].
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Payload of action '{tag}' rejected by its handler: {source}")]
    Payload {
        tag: String,
        #[source]
        source: serde_json::Error,
    },
}

/// What a single dispatch did with the state.
#[derive(Debug)]
pub enum Reduction<S> {
    /// A handler ran; this is its result.
    Applied(S),

    /// No handler in this namespace matched; the state is unchanged.
    Ignored(S),

    /// The matching handler could not decode the payload; the state is unchanged.
    Rejected { state: S, error: DispatchError },
}

impl<S> Reduction<S> {
    /// The state after the dispatch, whatever happened.
    pub fn into_state(self) -> S {
        match self {
            Reduction::Applied(state) | Reduction::Ignored(state) => state,
            Reduction::Rejected { state, .. } => state,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Reduction::Applied(_))
    }
}

/// Reducer for one namespace.
///
/// Cheap to clone; clones share the same handlers.
///
/// # Example
///
/// ```rust
/// use instant_reducer::core::Action;
/// use instant_reducer::{combine_handlers, HandlerMap};
///
/// let handlers = HandlerMap::builder()
///     .on_payload("add", |count: i64, by: i64| count + by)
///     .build()
///     .unwrap();
/// let counter = combine_handlers("Counter", || 10, handlers);
/// let add = counter.actions.payload("add").unwrap().create(5).unwrap();
///
/// // No state yet: starts from the initial state.
/// assert_eq!(counter.reducer.reduce(None, &add), 15);
/// assert_eq!(counter.reducer.reduce(Some(1), &add), 6);
///
/// // Other namespaces are ignored.
/// assert_eq!(counter.reducer.reduce(Some(1), &Action::new("Other/add")), 1);
/// ```
pub struct Reducer<S> {
    namespace: Arc<str>,
    initial_state: InitialState<S>,
    handlers: Arc<HandlerMap<S>>,
}

impl<S> Reducer<S> {
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Reduce `action` into `state`, starting from the initial state when
    /// `state` is `None`.
    ///
    /// Never fails. Unknown actions and payloads the handler cannot decode
    /// leave the state unchanged.
    pub fn reduce(&self, state: Option<S>, action: &Action) -> S {
        self.dispatch(state, action).into_state()
    }

    /// Like [`reduce`](Self::reduce), but reports what happened.
    pub fn dispatch(&self, state: Option<S>, action: &Action) -> Reduction<S> {
        let state = state.unwrap_or_else(|| (self.initial_state)());

        let Some((key, handler)) = remove_prefix(&self.namespace, action.tag())
            .and_then(|key| Some((key, self.handlers.get(key)?)))
        else {
            tracing::debug!(namespace = %self.namespace, tag = %action.tag(), "ignoring action");
            return Reduction::Ignored(state);
        };

        match handler.apply(state, action.payload_or_null()) {
            Ok(state) => {
                tracing::trace!(namespace = %self.namespace, key, "applied handler");
                Reduction::Applied(state)
            }
            Err(Rejected { state, error }) => {
                tracing::warn!(
                    namespace = %self.namespace,
                    tag = %action.tag(),
                    %error,
                    "action payload rejected, state unchanged"
                );
                Reduction::Rejected {
                    state,
                    error: DispatchError::Payload {
                        tag: action.tag().to_string(),
                        source: error,
                    },
                }
            }
        }
    }

    /// Whether `action` would reach one of this reducer's handlers.
    pub fn handles(&self, action: &Action) -> bool {
        remove_prefix(&self.namespace, action.tag())
            .is_some_and(|key| self.handlers.get(key).is_some())
    }
}

impl<S: 'static> Reducer<S> {
    /// The reducer as a plain `(state, action) -> state` function, for
    /// registering with a store.
    pub fn as_fn(&self) -> impl Fn(Option<S>, &Action) -> S + Send + Sync + 'static {
        let reducer = self.clone();
        move |state: Option<S>, action: &Action| reducer.reduce(state, action)
    }
}

impl<S> Clone for Reducer<S> {
    fn clone(&self) -> Self {
        Self {
            namespace: Arc::clone(&self.namespace),
            initial_state: Arc::clone(&self.initial_state),
            handlers: Arc::clone(&self.handlers),
        }
    }
}

impl<S> fmt::Debug for Reducer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reducer")
            .field("namespace", &self.namespace)
            .field("handlers", &self.handlers)
            .finish_non_exhaustive()
    }
}

/// Derive the reducer for `handlers` under `namespace`.
pub fn extract_reducer<S>(
    namespace: &str,
    initial_state: InitialState<S>,
    handlers: HandlerMap<S>,
) -> Reducer<S> {
    Reducer {
        namespace: Arc::from(namespace),
        initial_state,
        handlers: Arc::new(handlers),
    }
}
