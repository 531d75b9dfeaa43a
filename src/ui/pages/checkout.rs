//! Checkout and order confirmation pages

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::ui::checkout::CheckoutWizard;
use crate::ui::common::SuccessMessage;
use crate::ui::layout::PageShell;

#[component]
pub fn CheckoutPage() -> impl IntoView {
    view! {
        <PageShell>
            <CheckoutWizard />
        </PageShell>
    }
}

#[component]
pub fn CheckoutSuccessPage() -> impl IntoView {
    let query = use_query_map();
    let reference = move || query.with(|q| q.get("ref"));

    view! {
        <PageShell>
            <section class="max-w-lg mx-auto px-4 py-24 space-y-6 text-center">
                <h1 class="text-3xl font-bold">"You're all set"</h1>
                <SuccessMessage message="Payment received. A receipt is on its way to your billing email.".to_string() />
                {move || reference().map(|reference| view! {
                    <p class="text-sm text-theme-secondary">
                        "Order reference "
                        <span class="font-mono font-medium text-theme-primary">{reference}</span>
                    </p>
                })}
                <A href="/" attr:class="btn-primary inline-block">"Back to home"</A>
            </section>
        </PageShell>
    }
}
