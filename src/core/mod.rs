//! Framework-free logic: plan catalog, checkout and auth state machines,
//! validation, preferences and animation math

pub mod animation;
pub mod auth_flow;
pub mod checkout;
#[cfg(feature = "ssr")]
pub mod config;
pub mod gateway;
pub mod navigation;
pub mod plans;
pub mod preferences;
pub mod validation;

mod tests;

pub use auth_flow::{AuthModalState, AuthView, OtpChallenge, otp_recipient};
pub use checkout::{CheckoutSession, CheckoutStep};
pub use gateway::{AuthError, PaymentError, SimulatedGateway};
pub use navigation::Redirect;
pub use plans::{BillingCycle, Plan};
