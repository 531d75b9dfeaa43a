use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Router navigation wrapped as a `Callback`, safe to call from event
/// handlers and after an `await`
pub fn use_navigate_callback() -> Callback<String> {
    let navigate = StoredValue::new(use_navigate());
    Callback::new(move |path: String| {
        navigate.with_value(|nav| nav(&path, Default::default()));
    })
}
