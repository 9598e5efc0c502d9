//! Generators for the two most common handler shapes.
//!
//! `build_simple` stores the action payload at a path; `build_toggle`
//! flips the value at a path. Both leave the incoming state unmodified.

use crate::core::{Action, Handler, KeyPath, State};

/// Create a handler that sets the value at `key_path` to the action payload.
///
/// An action without a payload stores the value type's default (JSON `null`).
///
/// # Example
///
/// ```rust
/// use slicekit::core::Action;
/// use slicekit::handlers::build_simple;
/// use serde_json::{json, Value};
///
/// let update = build_simple::<Value, Value>("a_key");
/// let state = json!({ "a_key": false });
///
/// let next = update.apply(&state, &Action::with_payload("update", json!(true)));
///
/// assert_eq!(next, json!({ "a_key": true }));
/// assert_eq!(state, json!({ "a_key": false }));
/// ```
pub fn build_simple<S, P>(key_path: impl Into<KeyPath>) -> Handler<S, P>
where
    S: State + 'static,
    P: Clone + Into<S::Value> + 'static,
{
    let path = key_path.into();
    Handler::payload(move |state: &S, action: &Action<P>| {
        let value: S::Value = action
            .payload()
            .cloned()
            .map(Into::into)
            .unwrap_or_default();
        state.set_in(&path, value)
    })
}

/// Create a handler that negates the value at `key_path`.
///
/// The handler is stateless: it never looks at the action. A missing value
/// is falsy, so the first toggle stores `true`.
///
/// # Example
///
/// ```rust
/// use slicekit::core::Action;
/// use slicekit::handlers::build_toggle;
/// use serde_json::{json, Value};
///
/// let toggle = build_toggle::<Value, Value>(["panel", "open"]);
/// let state = json!({ "panel": { "open": false } });
///
/// let next = toggle.apply(&state, &Action::new("toggle"));
/// assert_eq!(next, json!({ "panel": { "open": true } }));
/// ```
pub fn build_toggle<S, P>(key_path: impl Into<KeyPath>) -> Handler<S, P>
where
    S: State + 'static,
    P: 'static,
{
    let path = key_path.into();
    Handler::stateless(move |state: &S| {
        let current = state
            .get_in(&path)
            .map(|value| S::truthy(&value))
            .unwrap_or(false);
        state.set_in(&path, S::from_bool(!current))
    })
}
