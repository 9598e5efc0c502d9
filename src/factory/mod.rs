//! Reducer and action factory.
//!
//! Turns a declarative description of named handlers into a single reducer
//! dispatching on action type, public and private action creators, and the
//! logical-name to action-type mapping.
//!
//! Construction validates the whole configuration up front: a name used by
//! two handlers, or an other-handler key that repeats a prefixed action type,
//! is reported at build time instead of being silently shadowed.

pub mod builder;
pub mod config;
pub mod error;
pub mod macros;
pub mod slice;
pub mod validation;

pub use builder::SliceBuilder;
pub use config::{HandlerScope, HandlerSet, SliceConfig};
pub use error::{BuildError, ConfigViolation};
pub use slice::{build, ActionCreator, ActionCreators, ActionTypes, Reducer, Slice};
