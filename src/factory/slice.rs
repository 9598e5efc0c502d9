//! Reducer and action creator generation.

use crate::core::{Action, Handler, HandlerKind, State};
use crate::factory::config::{HandlerSet, SliceConfig};
use crate::factory::error::BuildError;
use crate::factory::validation::validate_handlers;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use stillwater::validation::Validation;

/// Mapping from logical handler name to its qualified action type.
pub type ActionTypes = BTreeMap<String, String>;

/// Output of [`build`]: everything a slice exposes to the host application.
#[derive(Clone, Debug)]
pub struct Slice<S, P> {
    /// Single reducer dispatching on action type
    pub reducer: Reducer<S, P>,
    /// Action creators for public handlers
    pub actions: ActionCreators<P>,
    /// Action creators for private handlers, not part of the public API
    pub private_actions: ActionCreators<P>,
    /// Qualified action type for every public and private handler
    pub action_types: ActionTypes,
}

/// Reducer over a merged dispatch table.
///
/// Cloning is cheap; clones share the table and the initial state.
pub struct Reducer<S, P> {
    initial: Arc<S>,
    table: Arc<HashMap<String, Handler<S, P>>>,
}

impl<S: State, P> Reducer<S, P> {
    /// Apply `action` to `state`.
    ///
    /// A missing state is replaced by the initial state before the action is
    /// looked up. An action type with no handler returns the incoming state
    /// itself, so `Arc::ptr_eq` holds for no-op dispatches.
    pub fn reduce(&self, state: Option<Arc<S>>, action: &Action<P>) -> Arc<S> {
        let state = state.unwrap_or_else(|| Arc::clone(&self.initial));
        match self.table.get(action.action_type()) {
            Some(handler) => {
                tracing::trace!(action_type = %action.action_type(), kind = ?handler.kind(), "applying handler");
                Arc::new(handler.apply(&state, action))
            }
            None => {
                tracing::trace!(action_type = %action.action_type(), "no handler for action type");
                state
            }
        }
    }

    /// Apply a sequence of actions in order.
    pub fn reduce_all<'a, I>(&self, state: Option<Arc<S>>, actions: I) -> Arc<S>
    where
        I: IntoIterator<Item = &'a Action<P>>,
        P: 'a,
    {
        actions
            .into_iter()
            .fold(state, |state, action| Some(self.reduce(state, action)))
            .unwrap_or_else(|| Arc::clone(&self.initial))
    }

    pub fn initial_state(&self) -> Arc<S> {
        Arc::clone(&self.initial)
    }

    /// Whether an action of this type reaches a handler.
    pub fn handles(&self, action_type: &str) -> bool {
        self.table.contains_key(action_type)
    }

    /// Every action type in the dispatch table, other-handler keys
    /// included, sorted.
    pub fn dispatch_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.table.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }
}

impl<S, P> Clone for Reducer<S, P> {
    fn clone(&self) -> Self {
        Self {
            initial: Arc::clone(&self.initial),
            table: Arc::clone(&self.table),
        }
    }
}

impl<S: std::fmt::Debug, P> std::fmt::Debug for Reducer<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut types: Vec<&String> = self.table.keys().collect();
        types.sort_unstable();
        f.debug_struct("Reducer")
            .field("initial", &self.initial)
            .field("action_types", &types)
            .finish()
    }
}

/// Builds actions of one qualified type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionCreator<P> {
    action_type: String,
    kind: HandlerKind,
    _payload: std::marker::PhantomData<fn() -> P>,
}

impl<P> ActionCreator<P> {
    pub fn new(action_type: impl Into<String>, kind: HandlerKind) -> Self {
        Self {
            action_type: action_type.into(),
            kind,
            _payload: std::marker::PhantomData,
        }
    }

    /// Build an action without a payload.
    pub fn create(&self) -> Action<P> {
        Action::new(self.action_type.clone())
    }

    /// Build an action carrying `payload`.
    ///
    /// Creators for stateless handlers drop the payload.
    pub fn create_with(&self, payload: P) -> Action<P> {
        match self.kind {
            HandlerKind::Stateless => self.create(),
            HandlerKind::Payload => Action::with_payload(self.action_type.clone(), payload),
        }
    }

    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    pub fn kind(&self) -> HandlerKind {
        self.kind
    }

    pub fn accepts_payload(&self) -> bool {
        self.kind == HandlerKind::Payload
    }
}

/// Action creators keyed by logical handler name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionCreators<P> {
    creators: BTreeMap<String, ActionCreator<P>>,
}

impl<P> ActionCreators<P> {
    pub fn get(&self, name: &str) -> Option<&ActionCreator<P>> {
        self.creators.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.creators.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.creators.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActionCreator<P>)> {
        self.creators
            .iter()
            .map(|(name, creator)| (name.as_str(), creator))
    }

    pub fn len(&self) -> usize {
        self.creators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }
}

fn creators_for<S, P>(set: &HandlerSet<S, P>, prefix: &str) -> ActionCreators<P> {
    ActionCreators {
        creators: set
            .iter()
            .map(|(name, handler)| {
                (
                    name.to_string(),
                    ActionCreator::new(format!("{prefix}{name}"), handler.kind()),
                )
            })
            .collect(),
    }
}

/// Build a reducer, action creators and action types from a configuration.
///
/// Fails when the initial state or prefix is missing, or when any handler
/// name or action type clashes with another.
///
/// # Example
///
/// ```rust
/// use slicekit::core::Action;
/// use slicekit::factory::{build, HandlerSet, SliceConfig};
/// use slicekit::handlers::build_simple;
/// use serde_json::{json, Value};
///
/// let slice = build(SliceConfig::<Value, Value> {
///     public_handlers: HandlerSet::new().with("update", build_simple("a")),
///     action_type_prefix: Some("actions/".to_string()),
///     initial_state: Some(json!({ "a": false })),
///     ..Default::default()
/// })
/// .unwrap();
///
/// let update = slice.actions.get("update").unwrap().create_with(json!(true));
/// let state = slice.reducer.reduce(None, &update);
///
/// assert_eq!(*state, json!({ "a": true }));
/// assert_eq!(slice.action_types["update"], "actions/update");
/// ```
pub fn build<S: State, P>(mut config: SliceConfig<S, P>) -> Result<Slice<S, P>, BuildError> {
    let initial = config
        .initial_state
        .take()
        .ok_or(BuildError::MissingInitialState)?;
    let prefix = config
        .action_type_prefix
        .take()
        .ok_or(BuildError::MissingPrefix)?;

    if let Validation::Failure(errors) = validate_handlers(&config, &prefix) {
        let violations: Vec<_> = errors.iter().cloned().collect();
        tracing::warn!(prefix = %prefix, count = violations.len(), "rejected slice configuration");
        return Err(BuildError::InvalidHandlers(violations));
    }

    let mut table = HashMap::with_capacity(config.handler_count());
    let mut action_types = ActionTypes::new();
    for set in [&config.public_handlers, &config.private_handlers] {
        for (name, handler) in set.iter() {
            let action_type = format!("{prefix}{name}");
            action_types.insert(name.to_string(), action_type.clone());
            table.insert(action_type, handler.clone());
        }
    }
    for (action_type, handler) in config.other_handlers.iter() {
        table.insert(action_type.to_string(), handler.clone());
    }

    tracing::debug!(
        prefix = %prefix,
        public = config.public_handlers.len(),
        private = config.private_handlers.len(),
        other = config.other_handlers.len(),
        "built reducer slice"
    );

    Ok(Slice {
        reducer: Reducer {
            initial: Arc::new(initial),
            table: Arc::new(table),
        },
        actions: creators_for(&config.public_handlers, &prefix),
        private_actions: creators_for(&config.private_handlers, &prefix),
        action_types,
    })
}
