//! Build errors for reducer slice construction.

use crate::factory::config::HandlerScope;
use thiserror::Error;

/// Errors that can occur when building a slice.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial_state(state) before .build()")]
    MissingInitialState,

    #[error("Action type prefix not specified. Call .prefix(prefix) before .build()")]
    MissingPrefix,

    #[error("Invalid handler configuration ({} violation(s)): {}", .0.len(), join_violations(.0))]
    InvalidHandlers(Vec<ConfigViolation>),
}

impl BuildError {
    /// All handler violations, empty for the missing-field variants.
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::InvalidHandlers(violations) => violations,
            _ => &[],
        }
    }
}

/// A single problem found while validating handler sets.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("{scope} handler registered with an empty name")]
    EmptyName { scope: HandlerScope },

    #[error("Handler name '{name}' registered as {first} and again as {second}")]
    DuplicateName {
        name: String,
        first: HandlerScope,
        second: HandlerScope,
    },

    #[error("Action type '{action_type}' claimed by {first} and {second} handlers")]
    DuplicateActionType {
        action_type: String,
        first: HandlerScope,
        second: HandlerScope,
    },
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
