//! Settings Slice
//!
//! This example wires a small settings slice from declarative handlers.
//!
//! Key concepts:
//! - Public and private handlers with generated action creators
//! - Other handlers reacting to actions owned by a different slice
//! - Copy-on-write state: earlier states stay valid
//! - Selectors reading the slice back out of the application state
//!
//! Run with: cargo run --example settings_slice

use serde_json::{json, Value};
use slicekit::core::{Action, Handler};
use slicekit::factory::SliceBuilder;
use slicekit::handlers;
use slicekit::handlers::{build_simple, build_toggle};
use slicekit::selectors::build_simple_selectors;

fn main() {
    println!("=== Settings Slice ===\n");

    let initial = json!({
        "theme": "light",
        "sidebar_open": false,
        "profile": { "name": "" },
    });

    let slice = SliceBuilder::<Value, Value>::new()
        .prefix("settings/")
        .initial_state(initial.clone())
        .public_handlers(handlers! {
            "set_theme" => build_simple("theme"),
            "toggle_sidebar" => build_toggle("sidebar_open"),
            "reset" => Handler::stateless(move |_: &Value| initial.clone()),
        })
        .private("profile_loaded", build_simple(["profile", "name"]))
        .other("session/logout", build_simple(["profile", "name"]))
        .build()
        .unwrap();

    println!("Action types:");
    for (name, action_type) in &slice.action_types {
        println!("  {name:<16} -> {action_type}");
    }

    let actions = vec![
        slice.actions.get("set_theme").unwrap().create_with(json!("dark")),
        slice.actions.get("toggle_sidebar").unwrap().create(),
        slice
            .private_actions
            .get("profile_loaded")
            .unwrap()
            .create_with(json!("Ada")),
    ];

    println!("\nDispatching:");
    let mut state = slice.reducer.initial_state();
    for action in &actions {
        println!("  {}", serde_json::to_string(action).unwrap());
        state = slice.reducer.reduce(Some(state), action);
    }
    println!("\nState after dispatch:\n  {state}");

    let logged_out = slice
        .reducer
        .reduce(Some(state.clone()), &Action::new("session/logout"));
    println!("After session/logout:\n  {logged_out}");
    println!("Previous state is untouched:\n  {state}");

    let selectors = build_simple_selectors(&*state, "settings");
    let app_state = json!({ "settings": state.as_ref() });
    println!("\nSelected theme: {:?}", selectors["theme"].select(&app_state).unwrap());
    match selectors["theme"].select(&json!({})) {
        Ok(value) => println!("Unexpected value: {value:?}"),
        Err(error) => println!("Without the slice: {error}"),
    }

    println!("\n=== Example Complete ===");
}
