//! Application pages module
//!
//! One component per route: the marketing pages, checkout and its
//! confirmation, the standalone auth pages and the 404 fallback.

mod auth;
mod checkout;
mod home;
mod marketing;
mod not_found;
mod pricing;

pub use auth::{ForgotPasswordPage, LoginPage, OtpPage, SignupPage};
pub use checkout::{CheckoutPage, CheckoutSuccessPage};
pub use home::HomePage;
pub use marketing::{ExplorePage, LegalPage, ProductPage, ResourcesPage};
pub use not_found::NotFoundPage;
pub use pricing::PricingPage;
