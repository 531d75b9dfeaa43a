//! Authentication modal state machine
//!
//! States are `Closed` and `Open(view)`. Opening always names the view to show;
//! the view held while closed is never observed. Actions that do not apply to
//! the current state leave it unchanged.
//!
//! The OTP step also owns a [`OtpChallenge`]: the six entered digits and the
//! resend cooldown.

use serde::{Deserialize, Serialize};

use super::navigation::Redirect;
use super::validation::OTP_LENGTH;

/// Seconds a user must wait before requesting another code
pub const RESEND_COOLDOWN_SECS: u32 = 45;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthView {
    #[default]
    Login,
    Forgot,
    Otp,
    Signup,
}

impl AuthView {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthView::Login => "login",
            AuthView::Forgot => "forgot",
            AuthView::Otp => "otp",
            AuthView::Signup => "signup",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthView::Login => "Welcome back",
            AuthView::Forgot => "Reset your password",
            AuthView::Otp => "Check your inbox",
            AuthView::Signup => "Create your account",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AuthModalState {
    is_open: bool,
    view: AuthView,
}

impl AuthModalState {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Current view, or `None` while closed
    pub fn view(&self) -> Option<AuthView> {
        self.is_open.then_some(self.view)
    }

    /// `Closed -> Open(view)`. Opening an already open modal switches view.
    pub fn open(&mut self, view: AuthView) {
        self.is_open = true;
        self.view = view;
    }

    pub fn open_default(&mut self) {
        self.open(AuthView::Login);
    }

    /// `Open(*) -> Closed`
    pub fn close(&mut self) {
        self.is_open = false;
        self.view = AuthView::default();
    }

    /// `Open(v) -> Open(v')`; ignored while closed
    pub fn set_view(&mut self, view: AuthView) {
        if self.is_open {
            self.view = view;
        }
    }

    /// `Open(login) -> Open(forgot)` via the forgot-password link
    pub fn forgot_password(&mut self) {
        if self.view() == Some(AuthView::Login) {
            self.view = AuthView::Forgot;
        }
    }

    /// `Open(forgot) -> Open(otp)` once a reset code has been sent
    pub fn forgot_submitted(&mut self) {
        if self.view() == Some(AuthView::Forgot) {
            self.view = AuthView::Otp;
        }
    }

    /// `Open(otp) -> Closed` after the code is accepted; returns where to go next
    pub fn otp_verified(&mut self) -> Option<Redirect> {
        if self.view() == Some(AuthView::Otp) {
            self.close();
            Some(Redirect::Home)
        } else {
            None
        }
    }

    /// `Open(login|signup) -> Closed` after a successful sign-in or sign-up
    pub fn signed_in(&mut self) -> Option<Redirect> {
        match self.view() {
            Some(AuthView::Login | AuthView::Signup) => {
                self.close();
                Some(Redirect::Home)
            }
            _ => None,
        }
    }
}

/// Code entry and resend cooldown for the OTP step
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OtpChallenge {
    email: String,
    digits: [Option<u8>; OTP_LENGTH],
    cooldown_secs: u32,
}

impl OtpChallenge {
    /// A code was just sent to `email`, so the cooldown starts full
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            digits: [None; OTP_LENGTH],
            cooldown_secs: RESEND_COOLDOWN_SECS,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Set or clear the digit at `index`. Non-digit input clears the cell.
    pub fn set_digit(&mut self, index: usize, input: &str) {
        if let Some(cell) = self.digits.get_mut(index) {
            *cell = input
                .chars()
                .last()
                .and_then(|c| c.to_digit(10))
                .map(|d| d as u8);
        }
    }

    /// Fill cells from pasted text, ignoring anything that is not a digit.
    /// Returns the number of cells filled.
    pub fn paste(&mut self, text: &str) -> usize {
        let digits: Vec<u8> = text
            .chars()
            .filter_map(|c| c.to_digit(10))
            .take(OTP_LENGTH)
            .map(|d| d as u8)
            .collect();
        for (cell, digit) in self.digits.iter_mut().zip(digits.iter()) {
            *cell = Some(*digit);
        }
        digits.len()
    }

    pub fn digit(&self, index: usize) -> Option<u8> {
        self.digits.get(index).copied().flatten()
    }

    /// Full code once every cell is filled
    pub fn code(&self) -> Option<String> {
        self.digits
            .iter()
            .map(|d| d.map(|d| char::from(b'0' + d)))
            .collect()
    }

    pub fn clear(&mut self) {
        self.digits = [None; OTP_LENGTH];
    }

    pub fn cooldown_secs(&self) -> u32 {
        self.cooldown_secs
    }

    pub fn can_resend(&self) -> bool {
        self.cooldown_secs == 0
    }

    /// Advance the cooldown by one second
    pub fn tick(&mut self) {
        self.cooldown_secs = self.cooldown_secs.saturating_sub(1);
    }

    /// Start a resend. Returns `false` while the cooldown is still running.
    pub fn resend(&mut self) -> bool {
        if !self.can_resend() {
            return false;
        }
        self.clear();
        self.cooldown_secs = RESEND_COOLDOWN_SECS;
        true
    }

    /// Server-imposed wait, e.g. after a rate-limit response
    pub fn hold_for(&mut self, secs: u32) {
        self.cooldown_secs = self.cooldown_secs.max(secs);
    }

    pub fn resend_label(&self) -> String {
        if self.can_resend() {
            "Resend code".to_string()
        } else {
            format!("Resend in {}s", self.cooldown_secs)
        }
    }
}

/// Address a code can be entered for, `None` when blank
pub fn otp_recipient(email: &str) -> Option<String> {
    let email = email.trim();
    (!email.is_empty()).then(|| email.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_recipient_requires_an_address() {
        assert_eq!(otp_recipient(""), None);
        assert_eq!(otp_recipient("   "), None);
        assert_eq!(otp_recipient(" ana@saby.io "), Some("ana@saby.io".to_string()));
    }

    const VIEWS: [AuthView; 4] = [
        AuthView::Login,
        AuthView::Forgot,
        AuthView::Otp,
        AuthView::Signup,
    ];

    fn open_at(view: AuthView) -> AuthModalState {
        let mut state = AuthModalState::closed();
        state.open(view);
        state
    }

    #[test]
    fn test_initial_state_is_closed() {
        let state = AuthModalState::closed();
        assert!(!state.is_open());
        assert_eq!(state.view(), None);
    }

    #[test]
    fn test_open_defaults_to_login() {
        let mut state = AuthModalState::closed();
        state.open_default();
        assert_eq!(state.view(), Some(AuthView::Login));
    }

    #[test]
    fn test_open_from_closed_uses_explicit_view() {
        for view in VIEWS {
            assert_eq!(open_at(view).view(), Some(view));
        }
    }

    #[test]
    fn test_set_view_between_every_pair() {
        for from in VIEWS {
            for to in VIEWS {
                let mut state = open_at(from);
                state.set_view(to);
                assert_eq!(state.view(), Some(to), "{:?} -> {:?}", from, to);
            }
        }
    }

    #[test]
    fn test_close_from_every_view() {
        for view in VIEWS {
            let mut state = open_at(view);
            state.close();
            assert_eq!(state, AuthModalState::closed());
        }
    }

    #[test]
    fn test_set_view_while_closed_is_ignored() {
        let mut state = AuthModalState::closed();
        state.set_view(AuthView::Otp);
        assert_eq!(state, AuthModalState::closed());
    }

    #[test]
    fn test_reopen_does_not_remember_previous_view() {
        let mut state = open_at(AuthView::Otp);
        state.close();
        state.open_default();
        assert_eq!(state.view(), Some(AuthView::Login));
    }

    #[test]
    fn test_forgot_password_flow() {
        let mut state = open_at(AuthView::Login);
        state.forgot_password();
        assert_eq!(state.view(), Some(AuthView::Forgot));
        state.forgot_submitted();
        assert_eq!(state.view(), Some(AuthView::Otp));
        assert_eq!(state.otp_verified(), Some(Redirect::Home));
        assert!(!state.is_open());
    }

    #[test]
    fn test_flow_actions_only_apply_to_their_view() {
        for view in VIEWS {
            let mut state = open_at(view);
            state.forgot_password();
            let expected = if view == AuthView::Login { AuthView::Forgot } else { view };
            assert_eq!(state.view(), Some(expected));

            let mut state = open_at(view);
            state.forgot_submitted();
            let expected = if view == AuthView::Forgot { AuthView::Otp } else { view };
            assert_eq!(state.view(), Some(expected));

            let mut state = open_at(view);
            let redirect = state.otp_verified();
            if view == AuthView::Otp {
                assert_eq!(redirect, Some(Redirect::Home));
                assert!(!state.is_open());
            } else {
                assert_eq!(redirect, None);
                assert_eq!(state.view(), Some(view));
            }
        }
    }

    #[test]
    fn test_flow_actions_while_closed() {
        let mut state = AuthModalState::closed();
        state.forgot_password();
        state.forgot_submitted();
        assert_eq!(state.otp_verified(), None);
        assert_eq!(state.signed_in(), None);
        assert_eq!(state, AuthModalState::closed());
    }

    #[test]
    fn test_signed_in_closes_login_and_signup() {
        for view in [AuthView::Login, AuthView::Signup] {
            let mut state = open_at(view);
            assert_eq!(state.signed_in(), Some(Redirect::Home));
            assert!(!state.is_open());
        }
        let mut state = open_at(AuthView::Forgot);
        assert_eq!(state.signed_in(), None);
    }

    #[test]
    fn test_otp_code_entry() {
        let mut otp = OtpChallenge::new("ana@saby.io");
        assert_eq!(otp.code(), None);
        for (i, d) in ["1", "2", "3", "4", "5"].iter().enumerate() {
            otp.set_digit(i, d);
        }
        assert_eq!(otp.code(), None);
        otp.set_digit(5, "96");
        assert_eq!(otp.code().as_deref(), Some("123456"));
        otp.set_digit(0, "x");
        assert_eq!(otp.digit(0), None);
        otp.set_digit(9, "1");
        assert_eq!(otp.code(), None);
    }

    #[test]
    fn test_otp_paste() {
        let mut otp = OtpChallenge::new("ana@saby.io");
        assert_eq!(otp.paste("Your code: 482-913"), 6);
        assert_eq!(otp.code().as_deref(), Some("482913"));
        let mut otp = OtpChallenge::new("ana@saby.io");
        assert_eq!(otp.paste("12"), 2);
        assert_eq!(otp.code(), None);
    }

    #[test]
    fn test_resend_cooldown() {
        let mut otp = OtpChallenge::new("ana@saby.io");
        assert_eq!(otp.resend_label(), "Resend in 45s");
        assert!(!otp.resend());
        for _ in 0..44 {
            otp.tick();
        }
        assert_eq!(otp.resend_label(), "Resend in 1s");
        otp.tick();
        otp.tick();
        assert!(otp.can_resend());
        assert_eq!(otp.resend_label(), "Resend code");

        otp.paste("111111");
        assert!(otp.resend());
        assert_eq!(otp.code(), None);
        assert_eq!(otp.cooldown_secs(), RESEND_COOLDOWN_SECS);
    }

    #[test]
    fn test_rate_limit_extends_cooldown() {
        let mut otp = OtpChallenge::new("ana@saby.io");
        otp.hold_for(120);
        assert_eq!(otp.cooldown_secs(), 120);
        otp.hold_for(10);
        assert_eq!(otp.cooldown_secs(), 120);
    }
}
