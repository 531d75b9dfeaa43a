//! Auth modal context
//!
//! One [`AuthModalContext`] is created at the application root. Any page can
//! open the modal on a given view; the modal itself renders whichever form the
//! current view calls for.

use leptos::prelude::*;

use crate::core::{AuthModalState, AuthView, Redirect, SimulatedGateway};

#[derive(Clone, Copy)]
pub struct AuthModalContext {
    /// Open/closed flag and current view
    pub state: RwSignal<AuthModalState>,
    /// Email carried from the forgot-password step into the OTP step
    pub email: RwSignal<String>,
    gateway: StoredValue<SimulatedGateway>,
}

impl AuthModalContext {
    pub fn new(gateway: SimulatedGateway) -> Self {
        Self {
            state: RwSignal::new(AuthModalState::closed()),
            email: RwSignal::new(String::new()),
            gateway: StoredValue::new(gateway),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open())
    }

    pub fn view(&self) -> Option<AuthView> {
        self.state.with(|s| s.view())
    }

    pub fn open(&self, view: AuthView) {
        self.state.update(|s| s.open(view));
    }

    pub fn open_default(&self) {
        self.state.update(|s| s.open_default());
    }

    pub fn close(&self) {
        self.state.update(|s| s.close());
    }

    pub fn set_view(&self, view: AuthView) {
        self.state.update(|s| s.set_view(view));
    }

    pub fn forgot_password(&self) {
        self.state.update(|s| s.forgot_password());
    }

    /// A reset code was sent to `email`
    pub fn forgot_submitted(&self, email: String) {
        self.email.set(email);
        self.state.update(|s| s.forgot_submitted());
    }

    pub fn otp_verified(&self) -> Option<Redirect> {
        let mut redirect = None;
        self.state.update(|s| redirect = s.otp_verified());
        redirect
    }

    pub fn signed_in(&self) -> Option<Redirect> {
        let mut redirect = None;
        self.state.update(|s| redirect = s.signed_in());
        redirect
    }

    pub fn gateway(&self) -> SimulatedGateway {
        self.gateway.get_value()
    }
}

/// Provide the auth modal context to the component tree
pub fn provide_auth_modal_context(gateway: SimulatedGateway) -> AuthModalContext {
    let ctx = AuthModalContext::new(gateway);
    provide_context(ctx);
    ctx
}

/// Get auth modal context from the component tree
pub fn use_auth_modal_context() -> AuthModalContext {
    expect_context::<AuthModalContext>()
}
