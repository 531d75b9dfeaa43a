use crate::core::validation::FieldErrors;
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Inline message for one field of a form's error map
pub fn field_error(errors: RwSignal<FieldErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.message(field)))
}

/// Inline field error under an input
#[component]
pub fn FieldMessage(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! {
                <div class="flex items-center gap-1 mt-1 text-sm text-red-500">
                    <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                    <span>{err}</span>
                </div>
            }
        })
    }
}

/// Labelled text input with an inline error
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Input id/name
    name: &'static str,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = "off")]
    autocomplete: &'static str,
    #[prop(optional)]
    inputmode: Option<&'static str>,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Called when the input loses focus
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Error message to display
    #[prop(into, default = Signal::stored(None))]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name class="block text-sm font-medium text-theme-primary mb-1">
                {label}
            </label>
            <input
                type=input_type
                id=name
                name=name
                autocomplete=autocomplete
                inputmode=inputmode
                placeholder=placeholder
                class="input-base"
                class:border-red-500=move || error.get().is_some()
                aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| {
                    if let Some(callback) = on_blur {
                        callback.run(());
                    }
                }
                disabled=move || disabled.get()
            />
            <FieldMessage error=error />
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    label: &'static str,
    name: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(&'static str, &'static str)>,
    #[prop(into, default = Signal::stored(None))]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name class="block text-sm font-medium text-theme-primary mb-1">
                {label}
            </label>
            <select
                id=name
                name=name
                class="select-base"
                class:border-red-500=move || error.get().is_some()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">"Select…"</option>
                {options.into_iter().map(|(val, text)| {
                    view! { <option value=val>{text}</option> }
                }).collect_view()}
            </select>
            <FieldMessage error=error />
        </div>
    }
}

/// Checkbox form field component
#[component]
pub fn CheckboxField(
    label: &'static str,
    #[prop(into)]
    checked: Signal<bool>,
    on_change: Callback<bool>,
    /// Optional description text below checkbox
    #[prop(optional)]
    description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="flex items-start gap-3 cursor-pointer">
            <input
                type="checkbox"
                class="mt-1 w-4 h-4 rounded border-theme text-accent-primary focus:ring-2 focus:ring-accent-primary"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <div class="flex-1">
                <span class="text-sm text-theme-primary">{label}</span>
                {description.map(|desc| view! {
                    <p class="text-sm text-theme-tertiary mt-0.5">{desc}</p>
                })}
            </div>
        </label>
    }
}

/// Password input with a show/hide toggle
#[component]
pub fn PasswordField(
    label: &'static str,
    name: &'static str,
    #[prop(default = "current-password")]
    autocomplete: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    #[prop(into, default = Signal::stored(None))]
    error: Signal<Option<String>>,
) -> impl IntoView {
    let show_password = RwSignal::new(false);

    view! {
        <div>
            <label for=name class="block text-sm font-medium text-theme-primary mb-1">
                {label}
            </label>
            <div class="relative">
                <input
                    type=move || if show_password.get() { "text" } else { "password" }
                    id=name
                    name=name
                    autocomplete=autocomplete
                    placeholder=placeholder
                    class="input-base pr-10"
                    class:border-red-500=move || error.get().is_some()
                    aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    disabled=move || disabled.get()
                />
                <button
                    type="button"
                    class="absolute inset-y-0 right-0 pr-3 flex items-center text-theme-tertiary hover:text-theme-secondary"
                    aria-label=move || if show_password.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| show_password.update(|v| *v = !*v)
                >
                    {move || {
                        if show_password.get() {
                            view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::EYE class="h-5 w-5" /> }.into_any()
                        }
                    }}
                </button>
            </div>
            <FieldMessage error=error />
        </div>
    }
}
