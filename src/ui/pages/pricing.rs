//! Pricing page
//!
//! Plan cards with a monthly/annual toggle. Each card links into checkout with
//! the plan and cycle preselected.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::checkout::format_usd;
use crate::core::plans::list_plans;
use crate::core::BillingCycle;
use crate::ui::background::GridWaveCanvas;
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::PageShell;

#[component]
pub fn PricingPage() -> impl IntoView {
    let cycle = RwSignal::new(BillingCycle::Monthly);
    let best_saving = list_plans()
        .iter()
        .map(|plan| plan.annual_savings_percent())
        .max()
        .unwrap_or(0);

    view! {
        <PageShell>
            <section class="relative overflow-hidden">
                <GridWaveCanvas />
                <div class="relative max-w-3xl mx-auto px-4 pt-24 pb-16 text-center space-y-6">
                    <h1 class="text-4xl font-bold">"Simple per-seat pricing"</h1>
                    <p class="text-theme-secondary">"Every plan includes unlimited dashboards and viewers."</p>
                    <div class="inline-flex rounded-lg border border-theme p-1 bg-theme-primary">
                        {BillingCycle::ALL
                            .into_iter()
                            .map(|option| {
                                let active = move || cycle.get() == option;
                                view! {
                                    <button
                                        type="button"
                                        class="px-4 py-1.5 rounded-md text-sm font-medium transition-colors"
                                        class:bg-accent-primary=active
                                        class:text-white=active
                                        aria-pressed=move || if active() { "true" } else { "false" }
                                        on:click=move |_| cycle.set(option)
                                    >
                                        {option.display_name()}
                                        {(option == BillingCycle::Annual && best_saving > 0).then(|| view! {
                                            <span class="ml-1 text-xs opacity-80">{format!("(save up to {best_saving}%)")}</span>
                                        })}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="max-w-6xl mx-auto px-4 pb-24 grid gap-6 md:grid-cols-3">
                {list_plans()
                    .iter()
                    .map(|plan| {
                        let option = move || plan.price_for(cycle.get());
                        let href = move || {
                            format!("/checkout?plan={}&cycle={}", plan.id, cycle.get().as_str())
                        };
                        view! {
                            <div class="card p-6 flex flex-col gap-4" class:ring-2=plan.badge.is_some()>
                                <div class="flex items-center justify-between">
                                    <h2 class="text-xl font-semibold">{plan.name}</h2>
                                    {plan.badge.map(|badge| view! {
                                        <span class="text-xs px-2 py-0.5 rounded-full bg-accent-primary text-white">{badge}</span>
                                    })}
                                </div>
                                <p class="text-sm text-theme-secondary">{plan.description}</p>
                                <p>
                                    <span class="text-4xl font-bold">
                                        {move || option().map(|o| format_usd(u64::from(o.price))).unwrap_or_default()}
                                    </span>
                                    <span class="text-sm text-theme-tertiary">" / seat / mo"</span>
                                </p>
                                <p class="text-xs text-theme-tertiary h-4">
                                    {move || option().and_then(|o| o.note).unwrap_or_default()}
                                </p>
                                <ul class="space-y-2 text-sm flex-1">
                                    {plan.features.iter().map(|feature| view! {
                                        <li class="flex items-center gap-2">
                                            <Icon name=icons::CHECK class="w-4 h-4" />
                                            {*feature}
                                        </li>
                                    }).collect_view()}
                                </ul>
                                <A href=href attr:class="btn-primary text-center">
                                    {format!("Choose {}", plan.name)}
                                </A>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </PageShell>
    }
}
