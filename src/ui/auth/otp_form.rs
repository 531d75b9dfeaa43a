//! One-time code entry
//!
//! Six single-digit cells with paste support, plus a resend button that is
//! locked until the cooldown in [`OtpChallenge`] runs out.

use leptos::html::Input;
use leptos::prelude::*;

use super::context::use_auth_modal_context;
use crate::core::auth_flow::OtpChallenge;
use crate::core::gateway::{AuthError, AuthGateway};
use crate::core::validation::{FieldError, OTP_LENGTH};
use crate::ui::common::{ErrorBanner, FieldMessage, OwnedTask, SubmitButton};

#[component]
pub fn OtpForm(
    /// Address the code was sent to
    email: String,
    on_verified: Callback<()>,
    /// Go back and use a different email
    on_change_email: Callback<()>,
) -> impl IntoView {
    let gateway = use_auth_modal_context().gateway();
    let verify_task = OwnedTask::new();
    let resend_task = OwnedTask::new();

    let challenge = RwSignal::new(OtpChallenge::new(email));
    let cells: [NodeRef<Input>; OTP_LENGTH] = std::array::from_fn(|_| NodeRef::new());

    let code_error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);
    let resending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    start_cooldown_ticker(challenge);

    let focus_cell = move |index: usize| {
        if let Some(input) = cells.get(index).and_then(|cell| cell.get()) {
            let _ = input.focus();
        }
    };

    let on_cell_input = move |index: usize, value: String| {
        challenge.update(|c| c.set_digit(index, &value));
        code_error.set(None);
        if challenge.with_untracked(|c| c.digit(index).is_some()) {
            focus_cell(index + 1);
        }
    };

    let on_cell_keydown = move |index: usize, ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Backspace"
            && index > 0
            && challenge.with_untracked(|c| c.digit(index).is_none())
        {
            focus_cell(index - 1);
        }
    };

    let on_paste = move |ev: leptos::ev::ClipboardEvent| {
        let Some(text) = pasted_text(&ev) else {
            return;
        };
        ev.prevent_default();
        let mut filled = 0;
        challenge.update(|c| filled = c.paste(&text));
        code_error.set(None);
        focus_cell(filled.min(OTP_LENGTH - 1));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        error.set(None);

        let (address, code) = challenge.with_untracked(|c| (c.email().to_string(), c.code()));
        let Some(code) = code else {
            code_error.set(Some(FieldError::InvalidOtp { len: OTP_LENGTH }.to_string()));
            return;
        };

        pending.set(true);
        verify_task.spawn(async move {
            let result = gateway.verify_otp(&address, &code).await;
            pending.set(false);
            match result {
                Ok(()) => on_verified.run(()),
                Err(err) => {
                    match err {
                        AuthError::RateLimited { retry_after_secs } => {
                            challenge.update(|c| c.hold_for(retry_after_secs));
                        }
                        AuthError::InvalidOtp | AuthError::OtpExpired => {
                            challenge.update(|c| c.clear());
                            focus_cell(0);
                        }
                        _ => {}
                    }
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    let on_resend = move |_| {
        let mut allowed = false;
        challenge.update(|c| allowed = c.resend());
        if !allowed {
            return;
        }
        error.set(None);
        code_error.set(None);

        let address = challenge.with_untracked(|c| c.email().to_string());
        resending.set(true);
        resend_task.spawn(async move {
            let result = gateway.resend_otp(&address).await;
            resending.set(false);
            if let Err(err) = result {
                if let AuthError::RateLimited { retry_after_secs } = err {
                    challenge.update(|c| c.hold_for(retry_after_secs));
                }
                error.set(Some(err.to_string()));
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-5" novalidate>
            <p class="text-sm text-theme-secondary">
                "We sent a 6-digit code to "
                <span class="font-medium text-theme-primary">
                    {move || challenge.with(|c| c.email().to_string())}
                </span>
                ". "
                <button
                    type="button"
                    class="text-accent-primary hover:text-accent-primary-hover font-medium"
                    on:click=move |_| on_change_email.run(())
                >
                    "Change"
                </button>
            </p>

            <ErrorBanner error=error on_dismiss=Callback::new(move |_| error.set(None)) />

            <div>
                <div class="flex justify-between gap-2" on:paste=on_paste>
                    {cells
                        .into_iter()
                        .enumerate()
                        .map(move |(index, cell)| {
                            view! {
                                <input
                                    node_ref=cell
                                    type="text"
                                    inputmode="numeric"
                                    autocomplete=if index == 0 { "one-time-code" } else { "off" }
                                    maxlength="2"
                                    aria-label=format!("Digit {}", index + 1)
                                    class="input-base w-12 h-14 text-center text-xl font-semibold"
                                    class:border-red-500=move || code_error.get().is_some()
                                    prop:value=move || {
                                        challenge
                                            .with(|c| c.digit(index))
                                            .map(|d| d.to_string())
                                            .unwrap_or_default()
                                    }
                                    on:input=move |ev| on_cell_input(index, event_target_value(&ev))
                                    on:keydown=move |ev| on_cell_keydown(index, ev)
                                    disabled=move || pending.get()
                                />
                            }
                        })
                        .collect_view()}
                </div>
                <FieldMessage error=code_error.into() />
            </div>

            <SubmitButton text="Verify" pending_text="Verifying..." pending=pending />

            <div class="text-center text-sm text-theme-secondary">
                "Didn't get it? "
                <button
                    type="button"
                    class="text-accent-primary hover:text-accent-primary-hover font-medium disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled=move || resending.get() || !challenge.with(|c| c.can_resend())
                    on:click=on_resend
                >
                    {move || challenge.with(|c| c.resend_label())}
                </button>
            </div>
        </form>
    }
}

/// Tick the resend cooldown once a second for as long as the form is mounted
#[cfg(not(feature = "ssr"))]
fn start_cooldown_ticker(challenge: RwSignal<OtpChallenge>) {
    use gloo_timers::callback::Interval;

    let interval = Interval::new(1_000, move || {
        let _ = challenge.try_update(|c| c.tick());
    });
    // Dropping the interval cancels it
    let interval = StoredValue::new_local(interval);
    on_cleanup(move || interval.dispose());
}

#[cfg(feature = "ssr")]
fn start_cooldown_ticker(_challenge: RwSignal<OtpChallenge>) {}

#[cfg(not(feature = "ssr"))]
fn pasted_text(ev: &leptos::ev::ClipboardEvent) -> Option<String> {
    ev.clipboard_data()
        .and_then(|data| data.get_data("text").ok())
        .filter(|text| text.chars().any(|c| c.is_ascii_digit()))
}

#[cfg(feature = "ssr")]
fn pasted_text(_ev: &leptos::ev::ClipboardEvent) -> Option<String> {
    None
}

/// Shown instead of [`OtpForm`] when no address is known yet
#[component]
pub fn MissingOtpRecipient(on_start_over: Callback<()>) -> impl IntoView {
    view! {
        <p class="text-sm text-theme-secondary text-center">
            "We need your email before we can send a code. "
            <button
                type="button"
                class="text-accent-primary font-medium"
                on:click=move |_| on_start_over.run(())
            >
                "Start over"
            </button>
        </p>
    }
}
