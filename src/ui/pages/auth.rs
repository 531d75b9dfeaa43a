//! Standalone auth pages
//!
//! The same forms as the auth modal, each on its own route. Success and
//! flow switches navigate instead of changing the modal view.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::core::{Redirect, otp_recipient};
use crate::ui::auth::{ForgotPasswordForm, LoginForm, MissingOtpRecipient, OtpForm, SignupForm};
use crate::ui::common::use_navigate_callback;
use crate::ui::layout::PageShell;

/// Centered card with a heading
#[component]
fn AuthCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <PageShell>
            <div class="flex items-center justify-center px-4 py-16">
                <div class="w-full max-w-md bg-theme-primary rounded-xl shadow-lg p-6 border border-theme space-y-6">
                    <h1 class="text-2xl font-bold text-center">{title}</h1>
                    {children()}
                </div>
            </div>
        </PageShell>
    }
}

/// Navigate to a fixed path when run
fn go(navigate: Callback<String>, path: &'static str) -> Callback<()> {
    Callback::new(move |_| navigate.run(path.to_string()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate_callback();

    view! {
        <AuthCard title="Welcome back">
            <LoginForm
                on_success=go(navigate, Redirect::Home.path())
                on_forgot=go(navigate, "/forgot-password")
                on_signup=go(navigate, "/signup")
            />
        </AuthCard>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate_callback();

    view! {
        <AuthCard title="Create your account">
            <SignupForm
                on_success=go(navigate, Redirect::Home.path())
                on_login=go(navigate, "/login")
            />
        </AuthCard>
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let navigate = use_navigate_callback();
    let on_sent = Callback::new(move |email: String| {
        navigate.run(Redirect::Otp.with_query("email", &email));
    });

    view! {
        <AuthCard title="Reset your password">
            <ForgotPasswordForm on_sent=on_sent on_back=go(navigate, "/login") />
        </AuthCard>
    }
}

#[component]
pub fn OtpPage() -> impl IntoView {
    let navigate = use_navigate_callback();
    let query = use_query_map();
    let email = Memo::new(move |_| {
        query.with(|q| q.get("email")).and_then(|email| otp_recipient(&email))
    });

    view! {
        <AuthCard title="Enter your code">
            {move || match email.get() {
                Some(email) => view! {
                    <OtpForm
                        email=email
                        on_verified=go(navigate, Redirect::Home.path())
                        on_change_email=go(navigate, "/forgot-password")
                    />
                }
                .into_any(),
                None => view! {
                    <MissingOtpRecipient on_start_over=go(navigate, "/forgot-password") />
                }
                .into_any(),
            }}
        </AuthCard>
    }
}
