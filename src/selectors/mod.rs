//! Selector generators.
//!
//! Selectors are read-only accessors over a state value. `build_simple_selectors`
//! reads fields of one top-level slice; `build_array_selectors` reads fields of
//! an element picked out of a list by an index property, with per-field
//! defaults.

pub mod error;

pub use error::SelectError;

use crate::core::{KeyPath, State};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Reads `state[base][field]`.
pub struct SimpleSelector<S> {
    base: String,
    field: String,
    _state: PhantomData<fn(&S)>,
}

impl<S: State> SimpleSelector<S> {
    pub fn new(base: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            field: field.into(),
            _state: PhantomData,
        }
    }

    /// Select the field value.
    ///
    /// Fails when the base slice is absent; a missing field yields `None`.
    pub fn select(&self, state: &S) -> Result<Option<S::Value>, SelectError> {
        let base_path = KeyPath::from(self.base.as_str());
        match state.get_in(&base_path) {
            Some(base) if !S::is_absent(&base) => Ok(state.get_in(&base_path.child(&self.field))),
            _ => Err(SelectError::MissingBaseState {
                base: self.base.clone(),
                field: self.field.clone(),
                state: serde_json::to_string(state).unwrap_or_else(|e| e.to_string()),
            }),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl<S> Clone for SimpleSelector<S> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            field: self.field.clone(),
            _state: PhantomData,
        }
    }
}

impl<S> fmt::Debug for SimpleSelector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleSelector")
            .field("base", &self.base)
            .field("field", &self.field)
            .finish()
    }
}

/// Create one selector per top-level field of `shape`, each reading
/// `state[base_key][field]`.
///
/// # Example
///
/// ```rust
/// use slicekit::selectors::build_simple_selectors;
/// use serde_json::json;
///
/// let shape = json!({ "a_key": false, "different_key": 123 });
/// let selectors = build_simple_selectors(&shape, "BASE");
///
/// let state = json!({ "BASE": { "a_key": true, "different_key": 7 } });
/// assert_eq!(selectors["a_key"].select(&state).unwrap(), Some(json!(true)));
/// assert!(selectors["a_key"].select(&json!({})).is_err());
/// ```
pub fn build_simple_selectors<S: State>(
    shape: &impl State,
    base_key: &str,
) -> BTreeMap<String, SimpleSelector<S>> {
    shape
        .fields()
        .into_iter()
        .map(|(field, _)| (field.clone(), SimpleSelector::new(base_key, field)))
        .collect()
}

/// Type alias for functions locating the list an array selector reads from.
pub type ArrayLookup<S, E> = Arc<dyn for<'a> Fn(&'a S) -> Option<&'a [E]> + Send + Sync>;

/// Reads `array(state)[props[index_prop]][field]`, falling back to a default.
pub struct ArraySelector<S, E: State> {
    field: String,
    default: E::Value,
    index_prop: String,
    array: ArrayLookup<S, E>,
}

impl<S, E: State> ArraySelector<S, E> {
    /// Select the field of the indexed element.
    ///
    /// Fails only when `props` lacks the index property. A missing list,
    /// element or field, or an index that is not a non-negative integer,
    /// yields the default.
    pub fn select(&self, state: &S, props: &Value) -> Result<E::Value, SelectError> {
        let index = match props.get(&self.index_prop) {
            None | Some(Value::Null) => {
                return Err(SelectError::MissingProp {
                    prop: self.index_prop.clone(),
                    field: self.field.clone(),
                })
            }
            Some(index) => index.as_u64().and_then(|i| usize::try_from(i).ok()),
        };

        let value = index
            .and_then(|i| (self.array)(state)?.get(i))
            .and_then(|element| element.get_in(&KeyPath::from(self.field.as_str())));
        Ok(value.unwrap_or_else(|| self.default.clone()))
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn default_value(&self) -> &E::Value {
        &self.default
    }
}

impl<S, E: State> Clone for ArraySelector<S, E> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            default: self.default.clone(),
            index_prop: self.index_prop.clone(),
            array: Arc::clone(&self.array),
        }
    }
}

impl<S, E: State> fmt::Debug for ArraySelector<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArraySelector")
            .field("field", &self.field)
            .field("default", &self.default)
            .field("index_prop", &self.index_prop)
            .finish_non_exhaustive()
    }
}

/// Create one selector per top-level field of `shape`, reading that field
/// from the element of `array_selector(state)` at `props[index_prop]`.
///
/// The values in `shape` are the per-field defaults.
///
/// # Example
///
/// ```rust
/// use slicekit::selectors::build_array_selectors;
/// use serde_json::{json, Value};
///
/// let shape = json!({ "done": false });
/// let selectors = build_array_selectors(
///     &shape,
///     |state: &Value| state["todos"].as_array().map(Vec::as_slice),
///     "index",
/// );
///
/// let state = json!({ "todos": [{ "done": true }] });
/// assert_eq!(selectors["done"].select(&state, &json!({ "index": 0 })).unwrap(), json!(true));
/// assert_eq!(selectors["done"].select(&state, &json!({ "index": 4 })).unwrap(), json!(false));
/// ```
pub fn build_array_selectors<S, E, F>(
    shape: &E,
    array_selector: F,
    index_prop: &str,
) -> BTreeMap<String, ArraySelector<S, E>>
where
    S: 'static,
    E: State + 'static,
    F: Fn(&S) -> Option<&[E]> + Send + Sync + 'static,
{
    let array: ArrayLookup<S, E> = Arc::new(array_selector);
    shape
        .fields()
        .into_iter()
        .map(|(field, default)| {
            let selector = ArraySelector {
                field: field.clone(),
                default,
                index_prop: index_prop.to_string(),
                array: Arc::clone(&array),
            };
            (field, selector)
        })
        .collect()
}
