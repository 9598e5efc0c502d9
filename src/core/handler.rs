//! Handlers: the transition logic behind one reducer case.

use super::action::Action;
use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Declared shape of a handler.
///
/// The kind decides whether the generated action creator carries a payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerKind {
    /// Ignores the action entirely (reset, toggle)
    Stateless,
    /// Reads the action's payload
    Payload,
}

/// Type alias for handler transform functions.
pub type Transform<S, P> = Arc<dyn Fn(&S, &Action<P>) -> S + Send + Sync>;

/// Pure state transition `(state, action) -> state`.
///
/// Handlers never mutate the state they receive; they return a new one.
///
/// # Example
///
/// ```rust
/// use slicekit::core::{Action, Handler, HandlerKind, KeyPath, State};
/// use serde_json::{json, Value};
///
/// let reset: Handler<Value, Value> = Handler::stateless(|_state: &Value| json!({ "count": 0 }));
/// let add: Handler<Value, Value> = Handler::payload(|state: &Value, action: &Action| {
///     let count = state.get_in(&KeyPath::from("count")).and_then(|v| v.as_i64()).unwrap_or(0);
///     let step = action.payload().and_then(|v| v.as_i64()).unwrap_or(0);
///     state.set_in(&KeyPath::from("count"), json!(count + step))
/// });
///
/// assert_eq!(reset.kind(), HandlerKind::Stateless);
/// let state = add.apply(&json!({ "count": 1 }), &Action::with_payload("add", json!(2)));
/// assert_eq!(state, json!({ "count": 3 }));
/// ```
pub struct Handler<S, P> {
    kind: HandlerKind,
    transform: Transform<S, P>,
}

impl<S: State + 'static, P: 'static> Handler<S, P> {
    /// Create a handler that ignores the action.
    pub fn stateless<F>(transform: F) -> Self
    where
        F: Fn(&S) -> S + Send + Sync + 'static,
    {
        Self {
            kind: HandlerKind::Stateless,
            transform: Arc::new(move |state: &S, _action: &Action<P>| transform(state)),
        }
    }

    /// Create a handler that reads the action's payload.
    pub fn payload<F>(transform: F) -> Self
    where
        F: Fn(&S, &Action<P>) -> S + Send + Sync + 'static,
    {
        Self {
            kind: HandlerKind::Payload,
            transform: Arc::new(transform),
        }
    }
}

impl<S, P> Handler<S, P> {
    pub fn kind(&self) -> HandlerKind {
        self.kind
    }

    /// Whether the action creator for this handler forwards a payload.
    pub fn takes_payload(&self) -> bool {
        self.kind == HandlerKind::Payload
    }

    /// Run the transition (pure).
    pub fn apply(&self, state: &S, action: &Action<P>) -> S {
        (self.transform)(state, action)
    }
}

impl<S, P> Clone for Handler<S, P> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            transform: Arc::clone(&self.transform),
        }
    }
}

impl<S, P> fmt::Debug for Handler<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
