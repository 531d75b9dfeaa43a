use leptos::prelude::*;

use crate::core::checkout::{format_usd, masked_card};
use crate::core::gateway::CheckoutGateway;
use crate::core::{CheckoutSession, Redirect};
use crate::ui::common::{ErrorBanner, InlineSpinner, OwnedTask, use_navigate_callback};

/// Read-only recap plus the place-order action
#[component]
pub fn ReviewStep(session: RwSignal<CheckoutSession>) -> impl IntoView {
    let gateway = super::use_checkout_gateway();
    let navigate = use_navigate_callback();
    let task = OwnedTask::new();

    let submitting = Memo::new(move |_| session.with(|s| s.is_submitting()));
    let submit_error = Signal::derive(move || {
        session.with(|s| s.submit_error().map(ToString::to_string))
    });

    let place_order = move |_| {
        let mut begun = None;
        session.update(|s| begun = Some(s.begin_submit()));
        let order = match begun {
            Some(Ok(order)) => order,
            Some(Err(err)) => {
                leptos::logging::warn!("order not submitted: {err}");
                return;
            }
            None => return,
        };

        task.spawn(async move {
            let result = gateway
                .submit_order(&order)
                .await
                .map(|confirmation| confirmation.reference);
            if let Err(err) = &result {
                leptos::logging::error!("order for {} failed: {err}", order.plan_id);
            }
            let reference = result.as_ref().ok().cloned();
            session.update(|s| s.finish_submit(result));
            if let Some(reference) = reference {
                navigate.run(Redirect::CheckoutSuccess.with_query("ref", &reference));
            }
        });
    };

    let row = |label: &'static str, value: Signal<String>| {
        view! {
            <div class="flex justify-between py-2 border-b border-theme last:border-0">
                <dt class="text-theme-secondary">{label}</dt>
                <dd class="font-medium text-right">{value}</dd>
            </div>
        }
    };
    let read = move |f: fn(&CheckoutSession) -> String| Signal::derive(move || session.with(f));

    view! {
        <div class="space-y-6">
            <ErrorBanner
                error=submit_error
                on_dismiss=Callback::new(move |_| session.update(|s| s.dismiss_error()))
            />

            <dl class="text-sm">
                {row("Plan", read(|s| format!("{} ({})", s.selected_plan().name, s.billing_cycle().display_name())))}
                {row("Workspace", read(|s| s.workspace.workspace_name.clone()))}
                {row("Seats", read(|s| s.workspace.seat_count.to_string()))}
                {row("Billing email", read(|s| s.workspace.billing_email.clone()))}
                {row("Card", read(|s| masked_card(&s.billing.card_number)))}
                {row("Address", read(|s| format!("{}, {}", s.billing.address, s.billing.country)))}
                {row("Due today", read(|s| format_usd(s.due_today())))}
            </dl>

            <button
                type="button"
                class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                       text-white font-medium rounded-lg
                       disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                disabled=move || submitting.get()
                aria-busy=move || if submitting.get() { "true" } else { "false" }
                on:click=place_order
            >
                <Show
                    when=move || submitting.get()
                    fallback=|| view! { <span class="block">"Place order"</span> }
                >
                    <span class="flex items-center justify-center">
                        <InlineSpinner />
                        "Processing payment..."
                    </span>
                </Show>
            </button>
        </div>
    }
}
