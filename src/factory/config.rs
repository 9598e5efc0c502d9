//! Declarative slice configuration.

use crate::core::{Handler, State};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which handler set an entry was registered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerScope {
    /// Prefixed, with an exported action creator
    Public,
    /// Prefixed, with an internal action creator
    Private,
    /// Keyed by a fully qualified action type, no action creator
    Other,
}

impl fmt::Display for HandlerScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// Insertion-ordered mapping from name to handler.
///
/// Repeated names are kept as separate entries so that slice construction
/// can report them instead of silently shadowing one handler with another.
pub struct HandlerSet<S, P> {
    entries: Vec<(String, Handler<S, P>)>,
}

impl<S, P> HandlerSet<S, P> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a handler under `name`.
    pub fn insert(&mut self, name: impl Into<String>, handler: Handler<S, P>) {
        self.entries.push((name.into(), handler));
    }

    /// Register a handler and return the set (builder style).
    pub fn with(mut self, name: impl Into<String>, handler: Handler<S, P>) -> Self {
        self.insert(name, handler);
        self
    }

    /// First handler registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Handler<S, P>> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, handler)| handler)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Handler<S, P>)> {
        self.entries
            .iter()
            .map(|(name, handler)| (name.as_str(), handler))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S, P> Default for HandlerSet<S, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, P> Clone for HandlerSet<S, P> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<S, P> fmt::Debug for HandlerSet<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(name, handler)| (name, handler)))
            .finish()
    }
}

impl<S, P, K: Into<String>> FromIterator<(K, Handler<S, P>)> for HandlerSet<S, P> {
    fn from_iter<I: IntoIterator<Item = (K, Handler<S, P>)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, handler)| (name.into(), handler))
                .collect(),
        }
    }
}

/// Everything needed to build a slice.
///
/// `initial_state` and `action_type_prefix` are required; the handler sets
/// default to empty.
pub struct SliceConfig<S: State, P> {
    /// Handlers with exported action creators, keyed by logical name
    pub public_handlers: HandlerSet<S, P>,
    /// Handlers whose action creators are for internal use, keyed by logical name
    pub private_handlers: HandlerSet<S, P>,
    /// Handlers keyed by an already qualified action type
    pub other_handlers: HandlerSet<S, P>,
    /// Prepended to public and private names to form action types
    pub action_type_prefix: Option<String>,
    /// State used when the reducer receives no prior state
    pub initial_state: Option<S>,
}

impl<S: State, P> SliceConfig<S, P> {
    /// Number of handlers across all three sets.
    pub fn handler_count(&self) -> usize {
        self.public_handlers.len() + self.private_handlers.len() + self.other_handlers.len()
    }
}

impl<S: State, P> Default for SliceConfig<S, P> {
    fn default() -> Self {
        Self {
            public_handlers: HandlerSet::new(),
            private_handlers: HandlerSet::new(),
            other_handlers: HandlerSet::new(),
            action_type_prefix: None,
            initial_state: None,
        }
    }
}

impl<S: State, P> fmt::Debug for SliceConfig<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceConfig")
            .field("public_handlers", &self.public_handlers)
            .field("private_handlers", &self.private_handlers)
            .field("other_handlers", &self.other_handlers)
            .field("action_type_prefix", &self.action_type_prefix)
            .field("initial_state", &self.initial_state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{build_simple, build_toggle};
    use serde_json::Value;

    #[test]
    fn handler_set_keeps_insertion_order_and_duplicates() {
        let set: HandlerSet<Value, Value> = HandlerSet::new()
            .with("update", build_simple("a"))
            .with("toggle", build_toggle("b"))
            .with("update", build_simple("c"));

        assert_eq!(set.len(), 3);
        assert_eq!(set.names().collect::<Vec<_>>(), ["update", "toggle", "update"]);
    }

    #[test]
    fn get_returns_first_registration() {
        let set: HandlerSet<Value, Value> = HandlerSet::new()
            .with("update", build_simple("a"))
            .with("update", build_toggle("a"));

        assert!(set.get("update").unwrap().takes_payload());
        assert!(set.get("missing").is_none());
    }

    #[test]
    fn collects_from_pairs() {
        let set: HandlerSet<Value, Value> =
            vec![("a", build_simple("a")), ("b", build_simple("b"))]
                .into_iter()
                .collect();

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn default_config_is_empty() {
        let config: SliceConfig<Value, Value> = SliceConfig::default();

        assert_eq!(config.handler_count(), 0);
        assert!(config.initial_state.is_none());
        assert!(config.action_type_prefix.is_none());
    }

    #[test]
    fn scope_displays_lowercase() {
        assert_eq!(HandlerScope::Public.to_string(), "public");
        assert_eq!(HandlerScope::Private.to_string(), "private");
        assert_eq!(HandlerScope::Other.to_string(), "other");
    }
}
