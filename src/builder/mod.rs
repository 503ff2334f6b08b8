//! Builder API for declaring a namespace's handlers.
//!
//! This module provides a fluent builder and a macro for assembling a
//! handler map with minimal boilerplate. Whether each handler takes a payload
//! is declared here, once, and every derived artifact follows it.

pub mod error;
pub mod handlers;
pub mod macros;

pub use error::BuildError;
pub use handlers::{HandlerMap, HandlerMapBuilder};
