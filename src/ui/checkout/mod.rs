//! Checkout wizard UI
//!
//! [`CheckoutWizard`] owns a [`CheckoutSession`](crate::core::CheckoutSession)
//! signal seeded from the page's query string and hands it to one step view at
//! a time.

mod payment_step;
mod plan_step;
mod review_step;
mod summary;
mod wizard;
mod workspace_step;

pub use summary::{OrderSummary, ProgressIndicator};
pub use wizard::CheckoutWizard;

use chrono::Datelike;
use leptos::prelude::*;

use crate::core::SimulatedGateway;

/// Payment gateway provided by `App`
pub(crate) fn use_checkout_gateway() -> SimulatedGateway {
    expect_context::<SimulatedGateway>()
}

/// Current (year, month) for card expiry checks
pub(crate) fn current_year_month() -> (u32, u32) {
    let today = chrono::Utc::now().date_naive();
    (today.year().max(0) as u32, today.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_gateway_comes_from_context() {
        let owner = Owner::new();
        owner.with(|| {
            let gateway = SimulatedGateway::instant();
            provide_context(gateway);
            assert_eq!(use_checkout_gateway(), gateway);
        });
    }

    #[test]
    #[should_panic]
    fn test_missing_checkout_gateway_panics() {
        let owner = Owner::new();
        owner.with(|| {
            use_checkout_gateway();
        });
    }
}
