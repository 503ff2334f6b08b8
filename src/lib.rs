//! Instant Reducer: namespaced reducers without the boilerplate
//!
//! Writing a reducer by hand means keeping three things in sync: the action
//! type constants, the action creators and the `match` that routes each type
//! to its update. This crate derives all three from a single map of pure
//! handler functions, prefixing every action type with a namespace so that
//! independently written modules never collide.
//!
//! # Core Concepts
//!
//! - **Handler**: a pure `(state, payload?) -> state` function for one action type
//! - **Action**: a `{ type, payload? }` message, where `type` is `"<namespace>/<key>"`
//! - **Reducer**: routes actions of its namespace to their handler and leaves
//!   the state unchanged for everything else
//!
//! This crate has no store. The derived [`Reducer`] is a plain function of
//! `(state, action)` that any store can call.
//!
//! # Example
//!
//! ```rust
//! use instant_reducer::{combine_handlers, HandlerMap};
//!
//! let handlers = HandlerMap::builder()
//!     .on_payload("create", |mut todos: Vec<String>, title: String| {
//!         todos.push(title);
//!         todos
//!     })
//!     .on("clear", |_todos: Vec<String>| Vec::new())
//!     .build()
//!     .unwrap();
//!
//! let todo = combine_handlers("TodoApp", Vec::new, handlers);
//!
//! let create = todo.actions.create_with("create", "Write docs").unwrap();
//! assert_eq!(create.tag, "TodoApp/create");
//!
//! let todos = todo.reducer.reduce(None, &create);
//! assert_eq!(todos, vec!["Write docs".to_string()]);
//! ```

pub mod builder;
pub mod combine;
pub mod core;
pub mod derive;

// Re-export commonly used types
pub use builder::{BuildError, HandlerMap, HandlerMapBuilder};
pub use combine::{combine_handlers, CombinedHandlers};
pub use self::core::{Action, Handler};
pub use derive::{ActionCreators, ActionError, ActionTypes, DispatchError, Reducer, Reduction};
