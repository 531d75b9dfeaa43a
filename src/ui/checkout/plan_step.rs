use leptos::prelude::*;

use crate::core::checkout::format_usd;
use crate::core::plans::list_plans;
use crate::core::{BillingCycle, CheckoutSession};
use crate::ui::icon::{Icon, icons};

/// Plan and billing-cycle selection
#[component]
pub fn PlanStep(session: RwSignal<CheckoutSession>) -> impl IntoView {
    let cycle = Memo::new(move |_| session.with(|s| s.billing_cycle()));
    let selected = Memo::new(move |_| session.with(|s| s.selected_plan_id().to_string()));

    view! {
        <div class="space-y-6">
            <div class="inline-flex rounded-lg border border-theme p-1" role="radiogroup" aria-label="Billing cycle">
                {BillingCycle::ALL
                    .into_iter()
                    .map(|option| {
                        let active = move || cycle.get() == option;
                        view! {
                            <button
                                type="button"
                                role="radio"
                                aria-checked=move || if active() { "true" } else { "false" }
                                class="px-4 py-1.5 rounded-md text-sm font-medium transition-colors"
                                class:bg-accent-primary=active
                                class:text-white=active
                                on:click=move |_| session.update(|s| s.select_billing_cycle(option))
                            >
                                {option.display_name()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="grid gap-4 md:grid-cols-3" role="radiogroup" aria-label="Plan">
                {list_plans()
                    .iter()
                    .map(|plan| {
                        let is_selected = move || selected.with(|id| id == plan.id);
                        let price = move || {
                            plan.price_for(cycle.get())
                                .map(|option| format_usd(u64::from(option.price)))
                                .unwrap_or_default()
                        };
                        view! {
                            <button
                                type="button"
                                role="radio"
                                aria-checked=move || if is_selected() { "true" } else { "false" }
                                class="card p-5 text-left space-y-3 border-2 transition-colors"
                                class:border-accent-primary=is_selected
                                on:click=move |_| session.update(|s| s.select_plan(plan.id))
                            >
                                <div class="flex items-center justify-between">
                                    <span class="font-semibold">{plan.name}</span>
                                    {plan.badge.map(|badge| view! {
                                        <span class="text-xs px-2 py-0.5 rounded-full bg-accent-primary text-white">
                                            {badge}
                                        </span>
                                    })}
                                </div>
                                <p class="text-sm text-theme-secondary">{plan.description}</p>
                                <p>
                                    <span class="text-2xl font-bold">{price}</span>
                                    <span class="text-sm text-theme-tertiary">" / seat / mo"</span>
                                </p>
                                <ul class="space-y-1 text-sm">
                                    {plan.features.iter().map(|feature| view! {
                                        <li class="flex items-center gap-2">
                                            <Icon name=icons::CHECK class="w-4 h-4" />
                                            {*feature}
                                        </li>
                                    }).collect_view()}
                                </ul>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
