use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Small spinning loader for buttons
#[component]
pub fn InlineSpinner() -> impl IntoView {
    view! { <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4" /> }
}

/// Submit button showing a spinner and alternate text while pending
#[component]
pub fn SubmitButton(
    /// Button text when idle
    text: &'static str,
    /// Button text while pending
    pending_text: &'static str,
    #[prop(into)]
    pending: Signal<bool>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                   text-white font-medium rounded-lg
                   focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-accent-primary
                   disabled:opacity-50 disabled:cursor-not-allowed
                   transition-colors"
            disabled=move || pending.get() || disabled.get()
            aria-busy=move || if pending.get() { "true" } else { "false" }
        >
            <Show
                when=move || pending.get()
                fallback=move || view! { <span class="block">{text}</span> }
            >
                <span class="flex items-center justify-center">
                    <InlineSpinner />
                    {pending_text}
                </span>
            </Show>
        </button>
    }
}
