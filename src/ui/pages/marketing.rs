//! Product, explore, resources and legal pages

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::layout::PageShell;

/// Title, lead paragraph and a grid of cards
#[component]
fn MarketingPage(
    title: &'static str,
    lead: &'static str,
    cards: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <PageShell>
            <section class="max-w-5xl mx-auto px-4 py-20 space-y-10">
                <div class="space-y-4 max-w-2xl">
                    <h1 class="text-4xl font-bold">{title}</h1>
                    <p class="text-lg text-theme-secondary">{lead}</p>
                </div>
                <div class="grid gap-6 md:grid-cols-2">
                    {cards
                        .iter()
                        .map(|(heading, body)| view! {
                            <article class="card p-6 space-y-2">
                                <h2 class="font-semibold">{*heading}</h2>
                                <p class="text-sm text-theme-secondary">{*body}</p>
                            </article>
                        })
                        .collect_view()}
                </div>
                <A href="/pricing" attr:class="btn-primary inline-block">"View plans"</A>
            </section>
        </PageShell>
    }
}

#[component]
pub fn ProductPage() -> impl IntoView {
    view! {
        <MarketingPage
            title="The product"
            lead="Ingest, model and share metrics from one workspace."
            cards=&[
                ("Connectors", "Warehouses, event streams and spreadsheets."),
                ("Semantic layer", "Define a metric once, reuse it everywhere."),
                ("Alerts", "Thresholds and anomaly checks delivered to chat."),
                ("Embedding", "Drop live charts into your own app."),
            ]
        />
    }
}

#[component]
pub fn ExplorePage() -> impl IntoView {
    view! {
        <MarketingPage
            title="Explore"
            lead="See how teams use Saby day to day."
            cards=&[
                ("Growth", "Funnel and cohort views for product teams."),
                ("Finance", "Revenue recognition without spreadsheets."),
                ("Operations", "Live SLAs across every region."),
                ("Support", "Ticket volume against releases."),
            ]
        />
    }
}

#[component]
pub fn ResourcesPage() -> impl IntoView {
    view! {
        <MarketingPage
            title="Resources"
            lead="Guides, references and changelogs."
            cards=&[
                ("Documentation", "Set up your first workspace in minutes."),
                ("API reference", "Query metrics from anywhere."),
                ("Changelog", "What shipped this month."),
                ("Status", "Current uptime across services."),
            ]
        />
    }
}

#[component]
pub fn LegalPage() -> impl IntoView {
    view! {
        <MarketingPage
            title="Legal"
            lead="The terms that govern your use of Saby."
            cards=&[
                ("Terms of service", "Your agreement with Saby Analytics."),
                ("Privacy policy", "What we collect and why."),
                ("Data processing", "Our commitments as a processor."),
                ("Subprocessors", "Vendors that handle customer data."),
            ]
        />
    }
}
