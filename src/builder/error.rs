//! Build errors for handler maps.

use thiserror::Error;

/// Errors that can occur when building a handler map.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Handler '{key}' registered more than once. Each key needs exactly one handler")]
    DuplicateHandler { key: String },
}
