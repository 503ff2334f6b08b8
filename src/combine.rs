//! The single entry point: handlers in, creators, types and reducer out.

use crate::builder::HandlerMap;
use crate::derive::{
    extract_action_creators, extract_action_types, extract_reducer, ActionCreators, ActionTypes,
    Reducer,
};
use std::sync::Arc;

/// Everything derived from one namespace's handlers.
#[derive(Clone, Debug)]
pub struct CombinedHandlers<S> {
    pub actions: ActionCreators,
    pub action_types: ActionTypes,
    pub reducer: Reducer<S>,
}

/// Derive action creators, action types and a reducer from `handlers`.
///
/// Every action type is prefixed with `namespace`, which should be unique to
/// the calling module: short handler names are likely to repeat across an
/// application, prefixed ones must not. Nothing here checks that.
///
/// # Example
///
/// ```rust
/// use instant_reducer::{combine_handlers, HandlerMap};
/// use serde::Deserialize;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Counter {
///     count: i64,
///     title: String,
/// }
///
/// #[derive(Deserialize, serde::Serialize)]
/// struct Delta {
///     delta: i64,
/// }
///
/// let handlers = HandlerMap::builder()
///     .on_payload("increment", |state: Counter, payload: Delta| Counter {
///         count: state.count + payload.delta,
///         ..state
///     })
///     .on("reset", |state: Counter| Counter { count: 0, ..state })
///     .build()
///     .unwrap();
///
/// let counter = combine_handlers(
///     "TestCounter",
///     || Counter { count: 0, title: "Counter".to_string() },
///     handlers,
/// );
///
/// assert_eq!(&counter.action_types["increment"], "TestCounter/increment");
///
/// let increment = counter.actions.create_with("increment", Delta { delta: 2 }).unwrap();
/// let state = counter.reducer.reduce(None, &increment);
/// assert_eq!(state.count, 2);
///
/// let state = counter.reducer.reduce(Some(state), &counter.actions.create("reset").unwrap());
/// assert_eq!(state, Counter { count: 0, title: "Counter".to_string() });
/// ```
pub fn combine_handlers<S, F>(
    namespace: &str,
    initial_state: F,
    handlers: HandlerMap<S>,
) -> CombinedHandlers<S>
where
    F: Fn() -> S + Send + Sync + 'static,
{
    CombinedHandlers {
        actions: extract_action_creators(namespace, &handlers),
        action_types: extract_action_types(namespace, &handlers),
        reducer: extract_reducer(namespace, Arc::new(initial_state), handlers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Action;

    fn combined(namespace: &str) -> CombinedHandlers<i64> {
        let handlers = HandlerMap::builder()
            .on("reset", |_: i64| 0)
            .on_payload("add", |n: i64, by: i64| n + by)
            .build()
            .unwrap();
        combine_handlers(namespace, || 0, handlers)
    }

    #[test]
    fn artifacts_agree_on_action_types() {
        let counter = combined("Counter");

        for (key, tag) in counter.action_types.iter() {
            assert_eq!(counter.actions.get(key).unwrap().tag(), tag);
        }
        assert_eq!(counter.actions.len(), counter.action_types.len());
    }

    #[test]
    fn independent_namespaces_ignore_each_other() {
        let left = combined("Left");
        let right = combined("Right");

        let add_left = left.actions.create_with("add", 5).unwrap();
        assert_eq!(left.reducer.reduce(Some(1), &add_left), 6);
        assert_eq!(right.reducer.reduce(Some(1), &add_left), 1);
    }

    #[test]
    fn creators_feed_reducer() {
        let counter = combined("Counter");
        let actions: Vec<Action> = vec![
            counter.actions.create_with("add", 3).unwrap(),
            counter.actions.create_with("add", 4).unwrap(),
            counter.actions.create("reset").unwrap(),
            counter.actions.create_with("add", 1).unwrap(),
        ];

        let state = actions
            .iter()
            .fold(None, |state, action| Some(counter.reducer.reduce(state, action)));
        assert_eq!(state, Some(1));
    }
}
