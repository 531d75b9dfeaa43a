use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use super::current_year_month;
use super::payment_step::PaymentStep;
use super::plan_step::PlanStep;
use super::review_step::ReviewStep;
use super::summary::{OrderSummary, ProgressIndicator};
use super::workspace_step::WorkspaceStep;
use crate::core::validation::FieldErrors;
use crate::core::{CheckoutSession, CheckoutStep};
use crate::ui::icon::{Icon, icons};

/// Four-step checkout. The session lives only as long as this component.
#[component]
pub fn CheckoutWizard() -> impl IntoView {
    let query = use_query_map();
    let session = RwSignal::new(query.with_untracked(|q| {
        CheckoutSession::from_query(q.get("plan").as_deref(), q.get("cycle").as_deref())
    }));
    let errors = RwSignal::new(FieldErrors::new());

    let step = Memo::new(move |_| session.with(|s| s.step()));
    let submitting = Memo::new(move |_| session.with(|s| s.is_submitting()));

    let on_continue = move |_| {
        let (year, month) = current_year_month();
        let mut result = Ok(());
        session.update(|s| result = s.advance(year, month));
        match result {
            Ok(()) => errors.set(FieldErrors::new()),
            Err(field_errors) => {
                leptos::logging::log!("{} field(s) need attention", field_errors.len());
                errors.set(field_errors);
            }
        }
    };

    let on_back = move |_| {
        session.update(|s| s.go_back());
        errors.set(FieldErrors::new());
    };

    let body = move || match step.get() {
        CheckoutStep::Plan => view! { <PlanStep session=session /> }.into_any(),
        CheckoutStep::Workspace => view! { <WorkspaceStep session=session errors=errors /> }.into_any(),
        CheckoutStep::Payment => view! { <PaymentStep session=session errors=errors /> }.into_any(),
        CheckoutStep::Review => view! { <ReviewStep session=session /> }.into_any(),
    };

    view! {
        <div class="max-w-6xl mx-auto px-4 py-10 space-y-8">
            <ProgressIndicator step=step />

            <div class="grid gap-8 lg:grid-cols-3">
                <section class="lg:col-span-2 card p-6 space-y-6">
                    <h2 class="title-lg">{move || step.get().title()}</h2>

                    {body}

                    <div class="flex justify-between pt-4 border-t border-theme">
                        <button
                            type="button"
                            class="btn-secondary flex items-center gap-1"
                            class:invisible=move || step.get() == CheckoutStep::Plan
                            disabled=move || submitting.get()
                            on:click=on_back
                        >
                            <Icon name=icons::CHEVRON_LEFT class="w-4 h-4" />
                            "Back"
                        </button>
                        <Show when=move || step.get() != CheckoutStep::Review>
                            <button
                                type="button"
                                class="btn-primary flex items-center gap-1"
                                on:click=on_continue
                            >
                                "Continue"
                                <Icon name=icons::CHEVRON_RIGHT class="w-4 h-4" />
                            </button>
                        </Show>
                    </div>
                </section>

                <OrderSummary session=session />
            </div>
        </div>
    }
}
