//! Selector error types.

use thiserror::Error;

/// Errors raised when a selector is invoked against the wrong input
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SelectError {
    /// The top-level state slice the selector reads from is absent
    #[error("Missing: {base}[{field}] in {state}")]
    MissingBaseState {
        base: String,
        field: String,
        state: String,
    },

    /// An array-indexed selector was called without its index property
    #[error("Missing required prop '{prop}' for selector '{field}'")]
    MissingProp { prop: String, field: String },
}
