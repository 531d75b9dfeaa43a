//! Landing page
//!
//! Hero section over the orb field, with entry points into signup and pricing.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::AuthView;
use crate::ui::auth::use_auth_modal_context;
use crate::ui::background::OrbFieldCanvas;
use crate::ui::layout::PageShell;

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("Live dashboards", "Streams land in seconds, not nightly batches."),
    ("Ask in plain words", "Type a question, get a chart you can share."),
    ("Governed by default", "Row-level access that follows your org chart."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth_modal_context();

    view! {
        <PageShell>
            <section class="relative overflow-hidden">
                <OrbFieldCanvas />
                <div class="relative max-w-4xl mx-auto px-4 py-32 text-center space-y-6">
                    <h1 class="text-5xl font-bold tracking-tight">"Analytics your whole team can read"</h1>
                    <p class="text-lg text-theme-secondary">
                        "Saby turns raw events into answers without a data team in the loop."
                    </p>
                    <div class="flex justify-center gap-4">
                        <button
                            type="button"
                            class="btn-primary"
                            on:click=move |_| auth.open(AuthView::Signup)
                        >
                            "Start free trial"
                        </button>
                        <A href="/pricing" attr:class="btn-secondary">"See pricing"</A>
                    </div>
                </div>
            </section>

            <section class="max-w-6xl mx-auto px-4 py-20 grid gap-6 md:grid-cols-3">
                {HIGHLIGHTS
                    .iter()
                    .map(|(title, body)| view! {
                        <div class="card p-6 space-y-2">
                            <h3 class="font-semibold">{*title}</h3>
                            <p class="text-sm text-theme-secondary">{*body}</p>
                        </div>
                    })
                    .collect_view()}
            </section>
        </PageShell>
    }
}
