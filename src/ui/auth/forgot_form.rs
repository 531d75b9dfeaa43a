//! Forgot-password form
//!
//! Collects the account email and asks the gateway to send a one-time code.
//! On success the caller moves the flow on to code entry.

use leptos::prelude::*;

use super::context::use_auth_modal_context;
use crate::core::gateway::AuthGateway;
use crate::core::validation::validate_email;
use crate::ui::common::{ErrorBanner, FormField, OwnedTask, SubmitButton};

#[component]
pub fn ForgotPasswordForm(
    /// Receives the email the code was sent to
    on_sent: Callback<String>,
    on_back: Callback<()>,
) -> impl IntoView {
    let gateway = use_auth_modal_context().gateway();
    let task = OwnedTask::new();

    let email = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        error.set(None);

        let address = email.get_untracked().trim().to_string();
        if let Err(err) = validate_email(&address) {
            email_error.set(Some(err.to_string()));
            return;
        }

        pending.set(true);
        task.spawn(async move {
            let result = gateway.request_password_reset(&address).await;
            pending.set(false);
            match result {
                Ok(()) => on_sent.run(address),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-5" novalidate>
            <p class="text-sm text-theme-secondary">
                "Enter the email on your account and we'll send you a 6-digit code."
            </p>

            <ErrorBanner error=error on_dismiss=Callback::new(move |_| error.set(None)) />

            <FormField
                label="Email"
                name="forgot-email"
                input_type="email"
                autocomplete="email"
                placeholder="you@company.com"
                value=email
                on_input=Callback::new(move |v: String| {
                    email.set(v);
                    email_error.set(None);
                })
                disabled=pending
                error=email_error
            />

            <SubmitButton text="Send code" pending_text="Sending..." pending=pending />

            <button
                type="button"
                class="w-full text-center text-sm text-accent-primary hover:text-accent-primary-hover font-medium"
                on:click=move |_| on_back.run(())
            >
                "Back to sign in"
            </button>
        </form>
    }
}
