//! Banners for flow-level errors and confirmations

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Dismissable error banner. Shown while `error` is `Some`.
#[component]
pub fn ErrorBanner(
    #[prop(into)]
    error: Signal<Option<String>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div
                role="alert"
                class="flex items-start gap-3 p-3 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg"
            >
                <Icon name=icons::ALERT_CIRCLE class="w-5 h-5 mt-0.5"/>
                <p class="flex-1 text-sm text-red-700 dark:text-red-300">
                    {move || error.get().unwrap_or_default()}
                </p>
                <button
                    type="button"
                    class="text-red-700 dark:text-red-300 hover:opacity-70"
                    aria-label="Dismiss"
                    on:click=move |_| on_dismiss.run(())
                >
                    <Icon name=icons::X class="w-4 h-4"/>
                </button>
            </div>
        </Show>
    }
}

/// Static success message (always visible)
#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 p-3 bg-green-100 dark:bg-green-900/30 border border-green-300 dark:border-green-700 rounded-lg text-sm text-green-700 dark:text-green-300">
            <Icon name=icons::CHECK class="w-5 h-5"/>
            <span>{message}</span>
        </div>
    }
}
