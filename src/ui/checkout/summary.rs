use leptos::prelude::*;

use crate::core::checkout::format_usd;
use crate::core::{BillingCycle, CheckoutSession, CheckoutStep};
use crate::ui::icon::{Icon, icons};

/// Step list with the current step highlighted. Display only.
#[component]
pub fn ProgressIndicator(#[prop(into)] step: Signal<CheckoutStep>) -> impl IntoView {
    view! {
        <ol class="flex items-center gap-2 text-sm" aria-label="Checkout progress">
            {CheckoutStep::ALL
                .into_iter()
                .map(|item| {
                    let done = move || step.get().index() > item.index();
                    let current = move || step.get() == item;
                    view! {
                        <li
                            class="flex items-center gap-2 px-3 py-1.5 rounded-full border border-theme"
                            class:bg-accent-primary=current
                            class:text-white=current
                            class:text-theme-tertiary=move || !current() && !done()
                            aria-current=move || current().then_some("step")
                        >
                            <span class="font-semibold">
                                {move || {
                                    if done() {
                                        view! { <Icon name=icons::CHECK class="w-4 h-4" /> }.into_any()
                                    } else {
                                        (item.index() + 1).into_any()
                                    }
                                }}
                            </span>
                            <span>{item.title()}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

/// Running order totals shown beside every step
#[component]
pub fn OrderSummary(session: RwSignal<CheckoutSession>) -> impl IntoView {
    let plan_name = move || session.with(|s| s.selected_plan().name);
    let cycle = move || session.with(|s| s.billing_cycle());
    let seats = move || session.with(|s| s.workspace.seat_count);
    let price = move || {
        session.with(|s| {
            s.selected_price()
                .map(|option| format!("{} / seat / mo", format_usd(u64::from(option.price))))
                .unwrap_or_else(|| "—".to_string())
        })
    };

    view! {
        <aside class="card p-6 space-y-4">
            <h3 class="title-lg">"Order summary"</h3>
            <dl class="space-y-2 text-sm">
                <div class="flex justify-between">
                    <dt class="text-theme-secondary">"Plan"</dt>
                    <dd class="font-medium">{plan_name}</dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-theme-secondary">"Billing"</dt>
                    <dd>{move || cycle().display_name()}</dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-theme-secondary">"Price"</dt>
                    <dd>{price}</dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-theme-secondary">"Seats"</dt>
                    <dd>{seats}</dd>
                </div>
            </dl>
            <div class="border-t border-theme pt-4 space-y-1">
                <div class="flex justify-between font-semibold">
                    <span>"Monthly total"</span>
                    <span>{move || session.with(|s| format_usd(s.monthly_total()))}</span>
                </div>
                <Show when=move || cycle() == BillingCycle::Annual>
                    <div class="flex justify-between text-sm text-theme-secondary">
                        <span>"Due today (12 months)"</span>
                        <span>{move || session.with(|s| format_usd(s.due_today()))}</span>
                    </div>
                </Show>
            </div>
        </aside>
    }
}
