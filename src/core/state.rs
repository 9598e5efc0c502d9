//! Core State trait for reducer slice states.
//!
//! A slice state is an immutable, structurally keyed value. The trait is the
//! immutable-data provider the rest of the crate is written against: every
//! update returns a new value and leaves the receiver untouched.

use super::path::KeyPath;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Debug;

/// Trait for reducer slice states.
///
/// All methods are pure. `set_in` is copy-on-write: callers holding the
/// previous state observe no change.
///
/// # Required Traits
///
/// - `Clone`: reducers hand out new states built from old ones
/// - `PartialEq`: states must be comparable for tests and change detection
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states render into selector error messages
///   and may be persisted by the host application
///
/// `serde_json::Value` implements this trait with lodash-style path
/// semantics. Typed records can implement it by matching path segments
/// against their named fields.
///
/// # Example
///
/// ```rust
/// use slicekit::core::{KeyPath, State};
/// use serde_json::json;
///
/// let state = json!({ "panel": { "visible": false } });
/// let path = KeyPath::from(["panel", "visible"]);
///
/// let next = state.set_in(&path, json!(true));
///
/// assert_eq!(next.get_in(&path), Some(json!(true)));
/// assert_eq!(state.get_in(&path), Some(json!(false))); // Original unchanged
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Type of the values stored at a path.
    type Value: Clone + PartialEq + Debug + Default + Send + Sync;

    /// Read the value at `path`, or `None` when any segment is missing.
    fn get_in(&self, path: &KeyPath) -> Option<Self::Value>;

    /// Return a new state with the value at `path` replaced.
    ///
    /// Missing intermediate segments are created.
    fn set_in(&self, path: &KeyPath, value: Self::Value) -> Self;

    /// Top-level fields with their current values.
    fn fields(&self) -> Vec<(String, Self::Value)>;

    /// Truthiness of a value, used by toggle handlers.
    fn truthy(value: &Self::Value) -> bool;

    /// Convert a boolean into a storable value.
    fn from_bool(flag: bool) -> Self::Value;

    /// Whether a present value should still count as missing
    /// (JSON `null`, for example).
    ///
    /// Default implementation returns `false`.
    fn is_absent(_value: &Self::Value) -> bool {
        false
    }

    /// Read the value at `path`, falling back to `default`.
    fn get_in_or(&self, path: &KeyPath, default: Self::Value) -> Self::Value {
        self.get_in(path).unwrap_or(default)
    }
}

impl State for Value {
    type Value = Value;

    fn get_in(&self, path: &KeyPath) -> Option<Value> {
        let mut node = self;
        for segment in path.segments() {
            node = match node {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(array_index(segment)?)?,
                _ => return None,
            };
        }
        Some(node.clone())
    }

    fn set_in(&self, path: &KeyPath, value: Value) -> Value {
        set_at(self, path.segments(), value)
    }

    fn fields(&self) -> Vec<(String, Value)> {
        match self {
            Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            _ => Vec::new(),
        }
    }

    fn truthy(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    fn from_bool(flag: bool) -> Value {
        Value::Bool(flag)
    }

    fn is_absent(value: &Value) -> bool {
        value.is_null()
    }
}

// Canonical decimal index only: "01" and "+1" are property keys.
fn array_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    canonical.then(|| segment.parse().ok()).flatten()
}

// Rebuilds only the containers along `path`; anything that is not a
// container on the way is replaced by a fresh object. Arrays grow with
// nulls when the index is past the end.
fn set_at(node: &Value, path: &[String], value: Value) -> Value {
    let Some((head, rest)) = path.split_first() else {
        return value;
    };

    if let Value::Array(items) = node {
        if let Some(index) = array_index(head) {
            let mut items = items.clone();
            if index >= items.len() {
                items.resize(index + 1, Value::Null);
            }
            items[index] = set_at(&items[index], rest, value);
            return Value::Array(items);
        }
    }

    let mut map = match node {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    let next = set_at(map.get(head).unwrap_or(&Value::Null), rest, value);
    map.insert(head.clone(), next);
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_in_reads_nested_values() {
        let state = json!({ "a": { "b": [10, 20] } });

        assert_eq!(state.get_in(&KeyPath::from(["a", "b", "1"])), Some(json!(20)));
        assert_eq!(state.get_in(&KeyPath::from(["a", "missing"])), None);
        assert_eq!(state.get_in(&KeyPath::from(["a", "b", "9"])), None);
    }

    #[test]
    fn empty_path_reads_whole_state() {
        let state = json!({ "a": 1 });
        assert_eq!(state.get_in(&KeyPath::default()), Some(state.clone()));
    }

    #[test]
    fn get_in_or_falls_back() {
        let state = json!({ "a": 1 });

        assert_eq!(state.get_in_or(&KeyPath::from("a"), json!(0)), json!(1));
        assert_eq!(state.get_in_or(&KeyPath::from("b"), json!(0)), json!(0));
    }

    #[test]
    fn set_in_leaves_original_untouched() {
        let state = json!({ "a_key": false, "other": 1 });
        let next = state.set_in(&KeyPath::from("a_key"), json!(true));

        assert_eq!(next, json!({ "a_key": true, "other": 1 }));
        assert_eq!(state, json!({ "a_key": false, "other": 1 }));
    }

    #[test]
    fn set_in_creates_missing_containers() {
        let state = json!({ "a": 5 });
        let next = state.set_in(&KeyPath::from(["a", "b", "c"]), json!("deep"));

        assert_eq!(next, json!({ "a": { "b": { "c": "deep" } } }));
    }

    #[test]
    fn set_in_updates_array_elements() {
        let state = json!({ "rows": [{ "done": false }, { "done": false }] });
        let next = state.set_in(&KeyPath::from(["rows", "1", "done"]), json!(true));

        assert_eq!(
            next,
            json!({ "rows": [{ "done": false }, { "done": true }] })
        );
    }

    #[test]
    fn set_in_appends_at_array_end() {
        let state = json!({ "rows": ["a", "b"] });
        let next = state.set_in(&KeyPath::from(["rows", "2"]), json!("c"));

        assert_eq!(next, json!({ "rows": ["a", "b", "c"] }));
        assert_eq!(state, json!({ "rows": ["a", "b"] }));
    }

    #[test]
    fn set_in_past_array_end_pads_with_null() {
        let state = json!({ "rows": [{ "done": false }] });
        let next = state.set_in(&KeyPath::from(["rows", "3", "done"]), json!(true));

        assert_eq!(
            next,
            json!({ "rows": [{ "done": false }, null, null, { "done": true }] })
        );
    }

    #[test]
    fn non_canonical_indices_are_not_array_positions() {
        let state = json!({ "rows": [1, 2] });

        assert_eq!(state.get_in(&KeyPath::from(["rows", "01"])), None);
        assert_eq!(state.get_in(&KeyPath::from(["rows", "+1"])), None);
        assert_eq!(state.get_in(&KeyPath::from(["rows", "1"])), Some(json!(2)));
        assert_eq!(state.get_in(&KeyPath::from(["rows", "0"])), Some(json!(1)));
        assert_eq!(array_index("007"), None);
        assert_eq!(array_index(""), None);
        assert_eq!(array_index("10"), Some(10));
    }

    #[test]
    fn truthiness_follows_json_conventions() {
        assert!(!Value::truthy(&json!(null)));
        assert!(!Value::truthy(&json!(false)));
        assert!(!Value::truthy(&json!(0)));
        assert!(!Value::truthy(&json!("")));
        assert!(Value::truthy(&json!(true)));
        assert!(Value::truthy(&json!(3)));
        assert!(Value::truthy(&json!("x")));
        assert!(Value::truthy(&json!([])));
        assert!(Value::truthy(&json!({})));
    }

    #[test]
    fn fields_lists_top_level_entries() {
        let state = json!({ "a_key": false, "different_key": 123 });
        let fields = state.fields();

        assert_eq!(
            fields,
            vec![
                ("a_key".to_string(), json!(false)),
                ("different_key".to_string(), json!(123)),
            ]
        );
        assert!(json!(7).fields().is_empty());
    }

    #[test]
    fn null_counts_as_absent() {
        assert!(Value::is_absent(&json!(null)));
        assert!(!Value::is_absent(&json!(false)));
    }
}
