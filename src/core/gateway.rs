//! Network boundary for authentication and checkout
//!
//! Forms talk to the backend only through [`AuthGateway`] and
//! [`CheckoutGateway`]. [`SimulatedGateway`] stands in for the real service:
//! every call waits for a fixed latency and then succeeds. Tests plug in their
//! own implementations to exercise the failure paths.

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use super::plans::BillingCycle;

/// Latency applied by [`SimulatedGateway::default`]
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1200);

/// Authentication failures surfaced as a banner in the auth flow
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Incorrect email or password")]
    InvalidCredentials,
    #[error("An account with this email already exists")]
    AccountExists,
    #[error("That code is incorrect")]
    InvalidOtp,
    #[error("That code has expired, request a new one")]
    OtpExpired,
    #[error("Too many attempts, try again in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Payment failures surfaced on the review step
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("Your card was declined")]
    CardDeclined,
    #[error("The billing address could not be verified")]
    InvalidAddress,
    #[error("Payment service unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    pub plan_id: String,
    pub cycle: BillingCycle,
    pub seats: u32,
    pub workspace_name: String,
    pub billing_email: String,
    /// Monthly total in whole USD
    pub monthly_total: u64,
}

/// Receipt returned by a successful order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub reference: String,
}

#[allow(async_fn_in_trait)]
pub trait AuthGateway {
    async fn login(&self, request: &LoginRequest) -> Result<(), AuthError>;

    async fn signup(&self, request: &SignupRequest) -> Result<(), AuthError>;

    /// Sends a one-time passcode to `email`
    async fn request_password_reset(&self, email: &str) -> Result<(), AuthError>;

    async fn verify_otp(&self, email: &str, code: &str) -> Result<(), AuthError>;

    async fn resend_otp(&self, email: &str) -> Result<(), AuthError>;
}

#[allow(async_fn_in_trait)]
pub trait CheckoutGateway {
    async fn submit_order(&self, order: &OrderRequest) -> Result<OrderConfirmation, PaymentError>;
}

/// Gateway that always succeeds after a fixed delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedGateway {
    latency: Duration,
}

impl SimulatedGateway {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// No delay at all; used by tests
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl AuthGateway for SimulatedGateway {
    async fn login(&self, _request: &LoginRequest) -> Result<(), AuthError> {
        delay(self.latency).await;
        Ok(())
    }

    async fn signup(&self, _request: &SignupRequest) -> Result<(), AuthError> {
        delay(self.latency).await;
        Ok(())
    }

    async fn request_password_reset(&self, _email: &str) -> Result<(), AuthError> {
        delay(self.latency).await;
        Ok(())
    }

    async fn verify_otp(&self, _email: &str, _code: &str) -> Result<(), AuthError> {
        delay(self.latency).await;
        Ok(())
    }

    async fn resend_otp(&self, _email: &str) -> Result<(), AuthError> {
        delay(self.latency).await;
        Ok(())
    }
}

impl CheckoutGateway for SimulatedGateway {
    async fn submit_order(&self, order: &OrderRequest) -> Result<OrderConfirmation, PaymentError> {
        delay(self.latency).await;
        Ok(OrderConfirmation {
            reference: format!("SBY-{}-{:05}", order.plan_id.to_uppercase(), order.seats),
        })
    }
}

/// Wait for `duration` on whichever runtime the crate is built for
pub fn delay(duration: Duration) -> impl Future<Output = ()> {
    async move {
        if duration.is_zero() {
            return;
        }
        #[cfg(not(feature = "ssr"))]
        gloo_timers::future::sleep(duration).await;
        #[cfg(feature = "ssr")]
        tokio::time::sleep(duration).await;
    }
}
