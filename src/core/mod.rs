//! Core reducer slice types.
//!
//! This module contains the pure building blocks every slice is made of:
//! - State access via the `State` trait and `KeyPath`
//! - Action records routed by their type string
//! - Handlers with an explicitly declared kind
//!
//! Nothing in this module mutates its inputs; every transition returns a
//! new value.

mod action;
mod handler;
mod path;
mod state;

pub use action::Action;
pub use handler::{Handler, HandlerKind, Transform};
pub use path::KeyPath;
pub use state::State;
