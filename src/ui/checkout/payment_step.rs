use leptos::prelude::*;

use crate::core::checkout::BillingPatch;
use crate::core::validation::FieldErrors;
use crate::core::CheckoutSession;
use crate::ui::common::{CheckboxField, FormField, SelectField, field_error};

const COUNTRIES: &[(&str, &str)] = &[
    ("US", "United States"),
    ("CA", "Canada"),
    ("GB", "United Kingdom"),
    ("DE", "Germany"),
    ("FR", "France"),
    ("BR", "Brazil"),
    ("IN", "India"),
    ("JP", "Japan"),
    ("AU", "Australia"),
];

/// Card and billing address
#[component]
pub fn PaymentStep(
    session: RwSignal<CheckoutSession>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let patch = move |field: &'static str, patch: BillingPatch| {
        session.update(|s| s.update_billing(patch));
        errors.update(|e| e.clear(field));
    };
    let billing = move |read: fn(&CheckoutSession) -> String| {
        Signal::derive(move || session.with(read))
    };

    view! {
        <div class="space-y-5">
            <FormField
                label="Card number"
                name="card-number"
                inputmode="numeric"
                autocomplete="cc-number"
                placeholder="4242 4242 4242 4242"
                value=billing(|s| s.billing.card_number.clone())
                on_input=Callback::new(move |v: String| {
                    patch("card_number", BillingPatch { card_number: Some(v), ..Default::default() })
                })
                error=field_error(errors, "card_number")
            />
            <div class="grid grid-cols-2 gap-4">
                <FormField
                    label="Expiry"
                    name="card-expiry"
                    inputmode="numeric"
                    autocomplete="cc-exp"
                    placeholder="MM/YY"
                    value=billing(|s| s.billing.expiry.clone())
                    on_input=Callback::new(move |v: String| {
                        patch("expiry", BillingPatch { expiry: Some(v), ..Default::default() })
                    })
                    error=field_error(errors, "expiry")
                />
                <FormField
                    label="CVC"
                    name="card-cvc"
                    inputmode="numeric"
                    autocomplete="cc-csc"
                    placeholder="123"
                    value=billing(|s| s.billing.cvc.clone())
                    on_input=Callback::new(move |v: String| {
                        patch("cvc", BillingPatch { cvc: Some(v), ..Default::default() })
                    })
                    error=field_error(errors, "cvc")
                />
            </div>
            <SelectField
                label="Country"
                name="billing-country"
                value=billing(|s| s.billing.country.clone())
                on_change=Callback::new(move |v: String| {
                    patch("country", BillingPatch { country: Some(v), ..Default::default() })
                })
                options=COUNTRIES.to_vec()
                error=field_error(errors, "country")
            />
            <FormField
                label="Billing address"
                name="billing-address"
                autocomplete="street-address"
                placeholder="1 Market St, San Francisco"
                value=billing(|s| s.billing.address.clone())
                on_input=Callback::new(move |v: String| {
                    patch("address", BillingPatch { address: Some(v), ..Default::default() })
                })
                error=field_error(errors, "address")
            />
            <CheckboxField
                label="Save this card for future invoices"
                checked=Signal::derive(move || session.with(|s| s.billing.save_card))
                on_change=Callback::new(move |v| {
                    session.update(|s| s.update_billing(BillingPatch { save_card: Some(v), ..Default::default() }))
                })
            />
        </div>
    }
}
