//! Action records routed to reducer handlers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A plain record describing an intent to transition state.
///
/// Serializes to the flux-standard shape: a `type` key and an optional
/// `payload` key that is omitted entirely when there is no payload.
///
/// # Example
///
/// ```rust
/// use slicekit::core::Action;
/// use serde_json::json;
///
/// let action = Action::with_payload("settings/update", json!(true));
/// assert_eq!(
///     serde_json::to_value(&action).unwrap(),
///     json!({ "type": "settings/update", "payload": true })
/// );
///
/// let bare: Action = Action::new("settings/reset");
/// assert_eq!(
///     serde_json::to_value(&bare).unwrap(),
///     json!({ "type": "settings/reset" })
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Action<P = Value> {
    /// Fully qualified action-type string
    #[serde(rename = "type", default)]
    pub action_type: String,
    /// Optional payload carried to payload handlers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<P>,
}

impl<P> Action<P> {
    /// Create an action without a payload.
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            payload: None,
        }
    }

    /// Create an action carrying `payload`.
    pub fn with_payload(action_type: impl Into<String>, payload: P) -> Self {
        Self {
            action_type: action_type.into(),
            payload: Some(payload),
        }
    }

    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    pub fn has_payload(&self) -> bool {
        self.payload.is_some()
    }
}

impl<P> Default for Action<P> {
    fn default() -> Self {
        Self {
            action_type: String::new(),
            payload: None,
        }
    }
}
