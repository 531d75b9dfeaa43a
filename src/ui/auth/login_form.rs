//! Login form component
//!
//! Used inside the auth modal and on the standalone `/login` page.

use leptos::prelude::*;

use super::context::use_auth_modal_context;
use crate::core::gateway::{AuthGateway, LoginRequest};
use crate::core::validation::{FieldErrors, validate_login};
use crate::ui::common::{
    CheckboxField, ErrorBanner, FormField, OwnedTask, PasswordField, SubmitButton, field_error,
};

/// Login form component
#[component]
pub fn LoginForm(
    /// Called after the gateway accepts the credentials
    on_success: Callback<()>,
    /// Switch to the forgot-password flow
    on_forgot: Callback<()>,
    /// Switch to signup
    on_signup: Callback<()>,
) -> impl IntoView {
    let gateway = use_auth_modal_context().gateway();
    let task = OwnedTask::new();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(true);

    let errors = RwSignal::new(FieldErrors::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        error.set(None);

        let request = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            remember: remember.get_untracked(),
        };
        let field_errors = validate_login(&request.email, &request.password);
        let valid = field_errors.is_empty();
        errors.set(field_errors);
        if !valid {
            return;
        }

        pending.set(true);
        task.spawn(async move {
            let result = gateway.login(&request).await;
            pending.set(false);
            match result {
                Ok(()) => on_success.run(()),
                Err(err) => {
                    leptos::logging::warn!("login failed: {err}");
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-5" novalidate>
            <ErrorBanner error=error on_dismiss=Callback::new(move |_| error.set(None)) />

            <FormField
                label="Email"
                name="login-email"
                input_type="email"
                autocomplete="email"
                placeholder="you@company.com"
                value=email
                on_input=Callback::new(move |v: String| {
                    email.set(v);
                    errors.update(|e| e.clear("email"));
                })
                disabled=pending
                error=field_error(errors, "email")
            />

            <PasswordField
                label="Password"
                name="login-password"
                placeholder="Enter your password"
                value=password
                on_input=Callback::new(move |v: String| {
                    password.set(v);
                    errors.update(|e| e.clear("password"));
                })
                disabled=pending
                error=field_error(errors, "password")
            />

            <div class="flex items-center justify-between">
                <CheckboxField
                    label="Remember me"
                    checked=remember
                    on_change=Callback::new(move |v| remember.set(v))
                />
                <button
                    type="button"
                    class="text-sm text-accent-primary hover:text-accent-primary-hover font-medium"
                    on:click=move |_| on_forgot.run(())
                >
                    "Forgot password?"
                </button>
            </div>

            <SubmitButton text="Sign in" pending_text="Signing in..." pending=pending />

            <div class="text-center text-sm text-theme-secondary">
                "Don't have an account? "
                <button
                    type="button"
                    class="text-accent-primary hover:text-accent-primary-hover font-medium"
                    on:click=move |_| on_signup.run(())
                >
                    "Sign up"
                </button>
            </div>
        </form>
    }
}
