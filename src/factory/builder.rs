//! Builder for constructing slices.

use crate::core::{Handler, State};
use crate::factory::config::{HandlerSet, SliceConfig};
use crate::factory::error::BuildError;
use crate::factory::slice::{build, Slice};

/// Builder for constructing slices with a fluent API.
///
/// # Example
///
/// ```rust
/// use slicekit::factory::SliceBuilder;
/// use slicekit::handlers::{build_simple, build_toggle};
/// use serde_json::{json, Value};
///
/// let slice = SliceBuilder::<Value, Value>::new()
///     .prefix("settings/")
///     .initial_state(json!({ "theme": "light", "sidebar": false }))
///     .public("set_theme", build_simple("theme"))
///     .public("toggle_sidebar", build_toggle("sidebar"))
///     .build()
///     .unwrap();
///
/// let toggle = slice.actions.get("toggle_sidebar").unwrap().create();
/// let state = slice.reducer.reduce(None, &toggle);
/// assert_eq!(state["sidebar"], json!(true));
/// ```
pub struct SliceBuilder<S: State, P> {
    config: SliceConfig<S, P>,
}

impl<S: State, P> SliceBuilder<S, P> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: SliceConfig::default(),
        }
    }

    /// Set the action type prefix (required).
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.action_type_prefix = Some(prefix.into());
        self
    }

    /// Set the initial state (required).
    pub fn initial_state(mut self, state: S) -> Self {
        self.config.initial_state = Some(state);
        self
    }

    /// Add a public handler.
    pub fn public(mut self, name: impl Into<String>, handler: Handler<S, P>) -> Self {
        self.config.public_handlers.insert(name, handler);
        self
    }

    /// Add a private handler.
    pub fn private(mut self, name: impl Into<String>, handler: Handler<S, P>) -> Self {
        self.config.private_handlers.insert(name, handler);
        self
    }

    /// Add a handler for an already qualified action type.
    pub fn other(mut self, action_type: impl Into<String>, handler: Handler<S, P>) -> Self {
        self.config.other_handlers.insert(action_type, handler);
        self
    }

    /// Add every entry of `handlers` as public handlers.
    pub fn public_handlers(mut self, handlers: HandlerSet<S, P>) -> Self {
        for (name, handler) in handlers.iter() {
            self.config.public_handlers.insert(name, handler.clone());
        }
        self
    }

    /// Add every entry of `handlers` as private handlers.
    pub fn private_handlers(mut self, handlers: HandlerSet<S, P>) -> Self {
        for (name, handler) in handlers.iter() {
            self.config.private_handlers.insert(name, handler.clone());
        }
        self
    }

    /// Add every entry of `handlers` as other handlers.
    pub fn other_handlers(mut self, handlers: HandlerSet<S, P>) -> Self {
        for (action_type, handler) in handlers.iter() {
            self.config.other_handlers.insert(action_type, handler.clone());
        }
        self
    }

    /// The configuration collected so far.
    pub fn config(&self) -> &SliceConfig<S, P> {
        &self.config
    }

    /// Finish without building.
    pub fn into_config(self) -> SliceConfig<S, P> {
        self.config
    }

    /// Build the slice.
    /// Returns an error if required fields are missing or names clash.
    pub fn build(self) -> Result<Slice<S, P>, BuildError> {
        build(self.config)
    }
}

impl<S: State, P> Default for SliceBuilder<S, P> {
    fn default() -> Self {
        Self::new()
    }
}
