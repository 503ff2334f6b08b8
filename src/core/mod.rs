//! Core types shared by the derived artifacts.
//!
//! This module contains the pure building blocks:
//! - Namespace prefixing of action types
//! - The `Action` message shape
//! - `Handler`, the per-action transition function
//!
//! Nothing in this module holds mutable state.

mod action;
mod handler;
mod namespace;

pub use action::Action;
pub use handler::{BareFn, Handler, PayloadFn, Rejected};
pub use namespace::{apply_prefix, remove_prefix, SEPARATOR};
