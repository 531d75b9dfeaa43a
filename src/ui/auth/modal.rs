//! Auth modal overlay
//!
//! Mounted once at the application root. Renders the form for the current
//! [`AuthView`] while open, locks page scrolling and closes on `Escape` or a
//! backdrop click.

use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use super::context::use_auth_modal_context;
use super::{ForgotPasswordForm, LoginForm, MissingOtpRecipient, OtpForm, SignupForm};
use crate::core::{AuthView, otp_recipient};
use crate::ui::common::use_navigate_callback;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn AuthModal() -> impl IntoView {
    let ctx = use_auth_modal_context();
    let navigate = use_navigate_callback();

    let is_open = Memo::new(move |_| ctx.is_open());
    let current_view = Memo::new(move |_| ctx.view());

    lock_body_scroll(is_open);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                ctx.close();
            }
        });
        on_cleanup(move || handle_keydown.remove());
    }

    let on_signed_in = Callback::new(move |_| {
        if let Some(redirect) = ctx.signed_in() {
            navigate.run(redirect.path().to_string());
        }
    });
    let on_verified = Callback::new(move |_| {
        if let Some(redirect) = ctx.otp_verified() {
            navigate.run(redirect.path().to_string());
        }
    });

    let form = move || {
        match current_view.get() {
            Some(AuthView::Login) => view! {
                <LoginForm
                    on_success=on_signed_in
                    on_forgot=Callback::new(move |_| ctx.forgot_password())
                    on_signup=Callback::new(move |_| ctx.set_view(AuthView::Signup))
                />
            }
            .into_any(),
            Some(AuthView::Signup) => view! {
                <SignupForm
                    on_success=on_signed_in
                    on_login=Callback::new(move |_| ctx.set_view(AuthView::Login))
                />
            }
            .into_any(),
            Some(AuthView::Forgot) => view! {
                <ForgotPasswordForm
                    on_sent=Callback::new(move |email| ctx.forgot_submitted(email))
                    on_back=Callback::new(move |_| ctx.set_view(AuthView::Login))
                />
            }
            .into_any(),
            Some(AuthView::Otp) => {
                let on_change_email = Callback::new(move |_| ctx.set_view(AuthView::Forgot));
                match ctx.email.with_untracked(|email| otp_recipient(email)) {
                    Some(email) => view! {
                        <OtpForm
                            email=email
                            on_verified=on_verified
                            on_change_email=on_change_email
                        />
                    }
                    .into_any(),
                    None => view! { <MissingOtpRecipient on_start_over=on_change_email /> }
                        .into_any(),
                }
            }
            None => ().into_any(),
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center p-4"
                role="dialog"
                aria-modal="true"
                aria-labelledby="auth-modal-title"
            >
                <div
                    class="absolute inset-0 bg-black/50 backdrop-blur-sm"
                    on:click=move |_| ctx.close()
                ></div>

                <div class="relative w-full max-w-md bg-theme-primary rounded-xl shadow-xl p-6 border border-theme">
                    <div class="flex items-center justify-between mb-6">
                        <h2 id="auth-modal-title" class="text-2xl font-bold text-theme-primary">
                            {move || current_view.get().map(|v| v.title()).unwrap_or_default()}
                        </h2>
                        <button
                            type="button"
                            class="text-theme-tertiary hover:text-theme-secondary"
                            aria-label="Close"
                            on:click=move |_| ctx.close()
                        >
                            <Icon name=icons::X class="h-5 w-5" />
                        </button>
                    </div>
                    {form}
                </div>
            </div>
        </Show>
    }
}

/// Hide body overflow while `locked` is true, restoring the previous value
/// on unlock and when the owner is cleaned up
fn lock_body_scroll(locked: Memo<bool>) {
    let saved = Arc::new(Mutex::new(None::<String>));

    let effect_saved = saved.clone();
    Effect::new(move |_| {
        let locked = locked.get();
        let Ok(mut slot) = effect_saved.lock() else {
            return;
        };
        if locked {
            if slot.is_none() {
                *slot = Some(body_overflow());
                set_body_overflow("hidden");
            }
        } else if let Some(previous) = slot.take() {
            set_body_overflow(&previous);
        }
    });

    on_cleanup(move || {
        if let Some(previous) = saved.lock().ok().and_then(|mut slot| slot.take()) {
            set_body_overflow(&previous);
        }
    });
}

#[cfg(not(feature = "ssr"))]
fn body_overflow() -> String {
    document()
        .body()
        .and_then(|body| body.style().get_property_value("overflow").ok())
        .unwrap_or_default()
}

#[cfg(not(feature = "ssr"))]
fn set_body_overflow(value: &str) {
    if let Some(body) = document().body() {
        let style = body.style();
        let result = if value.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", value)
        };
        if result.is_err() {
            leptos::logging::warn!("could not update body overflow");
        }
    }
}

#[cfg(feature = "ssr")]
fn body_overflow() -> String {
    String::new()
}

#[cfg(feature = "ssr")]
fn set_body_overflow(_value: &str) {}
