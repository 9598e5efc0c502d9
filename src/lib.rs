//! Slicekit: declarative reducer slices for unidirectional state management
//!
//! Wiring a new state slice in a Redux-style architecture usually means
//! writing a reducer, one action creator per transition, and a table of
//! action-type constants by hand. Slicekit generates all three from one
//! declarative description of named handlers.
//!
//! # Core Concepts
//!
//! - **State**: Immutable, path-addressable values via the `State` trait
//! - **Handlers**: Pure transitions tagged as stateless or payload-reading
//! - **Factory**: Builds the reducer, action creators and action types,
//!   rejecting clashing names at construction time
//! - **Selectors**: Read-only accessors over slices and indexed lists
//!
//! # Example
//!
//! ```rust
//! use slicekit::factory::SliceBuilder;
//! use slicekit::handlers::build_simple;
//! use serde_json::{json, Value};
//!
//! let slice = SliceBuilder::<Value, Value>::new()
//!     .prefix("actions/")
//!     .initial_state(json!({ "a": false }))
//!     .public("update", build_simple("a"))
//!     .build()
//!     .unwrap();
//!
//! let initial = slice.reducer.reduce(None, &Default::default());
//! assert_eq!(*initial, json!({ "a": false }));
//!
//! let update = slice.actions.get("update").unwrap().create_with(json!(true));
//! let updated = slice.reducer.reduce(Some(initial.clone()), &update);
//! assert_eq!(*updated, json!({ "a": true }));
//! assert_eq!(*initial, json!({ "a": false }));
//! ```

pub mod core;
pub mod factory;
pub mod handlers;
pub mod selectors;

// Re-export commonly used types
pub use core::{Action, Handler, HandlerKind, KeyPath, State};
pub use factory::{build, BuildError, Slice, SliceBuilder, SliceConfig};
pub use handlers::{build_simple, build_toggle};
pub use selectors::{build_array_selectors, build_simple_selectors, SelectError};
