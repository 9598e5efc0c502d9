//! Handler set validation using Validation.
//!
//! Every problem in a configuration is collected in one pass, so a slice
//! with several clashing names reports all of them at once.

use crate::core::State;
use crate::factory::config::{HandlerScope, SliceConfig};
use crate::factory::error::ConfigViolation;
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Validate names and action types across all three handler sets.
///
/// Public and private names share one namespace. Other-handler keys must not
/// repeat each other or any prefixed public/private action type.
pub fn validate_handlers<S: State, P>(
    config: &SliceConfig<S, P>,
    prefix: &str,
) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

    let mut names: HashMap<&str, HandlerScope> = HashMap::new();
    let named_sets = [
        (HandlerScope::Public, &config.public_handlers),
        (HandlerScope::Private, &config.private_handlers),
    ];
    for (scope, set) in named_sets {
        for name in set.names() {
            let check = if name.is_empty() {
                Validation::fail(ConfigViolation::EmptyName { scope })
            } else if let Some(first) = names.get(name) {
                Validation::fail(ConfigViolation::DuplicateName {
                    name: name.to_string(),
                    first: *first,
                    second: scope,
                })
            } else {
                names.insert(name, scope);
                Validation::success(())
            };
            checks.push(check);
        }
    }

    let mut action_types: HashMap<String, HandlerScope> = names
        .iter()
        .map(|(name, scope)| (format!("{prefix}{name}"), *scope))
        .collect();
    for action_type in config.other_handlers.names() {
        let check = if action_type.is_empty() {
            Validation::fail(ConfigViolation::EmptyName {
                scope: HandlerScope::Other,
            })
        } else if let Some(first) = action_types.get(action_type) {
            Validation::fail(ConfigViolation::DuplicateActionType {
                action_type: action_type.to_string(),
                first: *first,
                second: HandlerScope::Other,
            })
        } else {
            action_types.insert(action_type.to_string(), HandlerScope::Other);
            Validation::success(())
        };
        checks.push(check);
    }

    // Accumulate ALL failures using all_vec
    Validation::all_vec(checks).map(|_| ())
}
