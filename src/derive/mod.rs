//! Artifacts derived from a handler map.
//!
//! Each artifact is built once from an immutable handler map and holds no
//! mutable state afterwards:
//! - `ActionCreators`: one creator per handler, shaped by whether it takes a payload
//! - `ActionTypes`: the fully-qualified action type of every handler
//! - `Reducer`: routes actions of its namespace to their handler

mod action_types;
mod creators;
mod reducer;

pub use action_types::{extract_action_types, ActionTypes};
pub use creators::{
    extract_action_creators, ActionCreator, ActionCreators, ActionError, BareCreator,
    PayloadCreator,
};
pub use reducer::{extract_reducer, DispatchError, InitialState, Reducer, Reduction};
