//! Macros for declaring handler sets.

/// Build a [`HandlerSet`](crate::factory::HandlerSet) from `name => handler` pairs.
///
/// Names are any expression convertible into `String`, so qualified action
/// types such as `"router/location_changed"` work for other handlers.
///
/// # Example
///
/// ```
/// use slicekit::handlers;
/// use slicekit::factory::HandlerSet;
/// use slicekit::handlers::{build_simple, build_toggle};
/// use serde_json::Value;
///
/// let public: HandlerSet<Value, Value> = handlers! {
///     "update" => build_simple("a_key"),
///     "toggle" => build_toggle("b_key"),
/// };
///
/// assert_eq!(public.len(), 2);
/// ```
#[macro_export]
macro_rules! handlers {
    () => {
        $crate::factory::HandlerSet::new()
    };
    (
        $($name:expr => $handler:expr),+ $(,)?
    ) => {{
        let mut set = $crate::factory::HandlerSet::new();
        $(
            set.insert($name, $handler);
        )+
        set
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::{Action, Handler};
    use crate::factory::{HandlerSet, SliceBuilder};
    use crate::handlers::{build_simple, build_toggle};
    use serde_json::{json, Value};

    #[test]
    fn handlers_macro_keeps_order() {
        let set: HandlerSet<Value, Value> = handlers! {
            "update" => build_simple("a_key"),
            "reset" => Handler::stateless(|_: &Value| json!({})),
            "toggle" => build_toggle("b_key"),
        };

        assert_eq!(set.names().collect::<Vec<_>>(), ["update", "reset", "toggle"]);
    }

    #[test]
    fn handlers_macro_accepts_empty_input() {
        let set: HandlerSet<Value, Value> = handlers! {};
        assert!(set.is_empty());
    }

    #[test]
    fn handlers_macro_feeds_builder() {
        let slice = SliceBuilder::<Value, Value>::new()
            .prefix("form/")
            .initial_state(json!({ "name": "" }))
            .public_handlers(handlers! { "set_name" => build_simple("name") })
            .other_handlers(handlers! { "session/logout" => build_simple("name") })
            .build()
            .unwrap();

        let state = slice
            .reducer
            .reduce(None, &Action::with_payload("session/logout", json!("")));
        assert_eq!(*state, json!({ "name": "" }));
        assert_eq!(slice.action_types["set_name"], "form/set_name");
    }
}
