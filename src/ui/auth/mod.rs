//! Authentication UI module
//!
//! The auth modal, its context, and the four forms it switches between. The
//! same forms back the standalone `/login`, `/signup`, `/forgot-password` and
//! `/otp` pages.

mod context;
mod forgot_form;
mod login_form;
mod modal;
mod otp_form;
mod signup_form;

pub use context::{AuthModalContext, provide_auth_modal_context, use_auth_modal_context};
pub use forgot_form::ForgotPasswordForm;
pub use login_form::LoginForm;
pub use modal::AuthModal;
pub use otp_form::{MissingOtpRecipient, OtpForm};
pub use signup_form::SignupForm;
