//! Signup form component

use leptos::prelude::*;

use super::context::use_auth_modal_context;
use crate::core::gateway::{AuthGateway, SignupRequest};
use crate::core::validation::{FieldErrors, MIN_PASSWORD_LENGTH, validate_signup};
use crate::ui::common::{
    ErrorBanner, FormField, OwnedTask, PasswordField, SubmitButton, field_error,
};

#[component]
pub fn SignupForm(on_success: Callback<()>, on_login: Callback<()>) -> impl IntoView {
    let gateway = use_auth_modal_context().gateway();
    let task = OwnedTask::new();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let errors = RwSignal::new(FieldErrors::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Clears the field's inline error as the user types
    let input = move |signal: RwSignal<String>, field: &'static str| {
        Callback::new(move |v: String| {
            signal.set(v);
            errors.update(|e| e.clear(field));
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        error.set(None);

        let request = SignupRequest {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        let field_errors = validate_signup(
            &request.name,
            &request.email,
            &request.password,
            &confirm.get_untracked(),
        );
        let valid = field_errors.is_empty();
        errors.set(field_errors);
        if !valid {
            return;
        }

        pending.set(true);
        task.spawn(async move {
            let result = gateway.signup(&request).await;
            pending.set(false);
            match result {
                Ok(()) => on_success.run(()),
                Err(err) => {
                    leptos::logging::warn!("signup failed: {err}");
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-5" novalidate>
            <ErrorBanner error=error on_dismiss=Callback::new(move |_| error.set(None)) />

            <FormField
                label="Full name"
                name="signup-name"
                autocomplete="name"
                placeholder="Ana Silva"
                value=name
                on_input=input(name, "name")
                disabled=pending
                error=field_error(errors, "name")
            />
            <FormField
                label="Work email"
                name="signup-email"
                input_type="email"
                autocomplete="email"
                placeholder="you@company.com"
                value=email
                on_input=input(email, "email")
                disabled=pending
                error=field_error(errors, "email")
            />
            <PasswordField
                label="Password"
                name="signup-password"
                autocomplete="new-password"
                placeholder="At least 8 characters"
                value=password
                on_input=input(password, "password")
                disabled=pending
                error=field_error(errors, "password")
            />
            <PasswordField
                label="Confirm password"
                name="signup-confirm"
                autocomplete="new-password"
                value=confirm
                on_input=input(confirm, "confirm_password")
                disabled=pending
                error=field_error(errors, "confirm_password")
            />
            <p class="text-xs text-theme-tertiary">
                {format!("Passwords need at least {MIN_PASSWORD_LENGTH} characters.")}
            </p>

            <SubmitButton text="Create account" pending_text="Creating account..." pending=pending />

            <div class="text-center text-sm text-theme-secondary">
                "Already have an account? "
                <button
                    type="button"
                    class="text-accent-primary hover:text-accent-primary-hover font-medium"
                    on:click=move |_| on_login.run(())
                >
                    "Sign in"
                </button>
            </div>
        </form>
    }
}
