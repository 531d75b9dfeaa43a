//! Fallback for unknown routes

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::layout::PageShell;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageShell>
            <div class="flex flex-col items-center justify-center px-4 py-32 text-center">
                <h1 class="text-6xl font-bold mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold mb-2">"Page not found"</h2>
                <p class="text-theme-secondary mb-8 max-w-md">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <div class="flex flex-col sm:flex-row items-center gap-4">
                    <A
                        href="/"
                        attr:class="px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
                    >
                        "Go home"
                    </A>
                    <A
                        href="/pricing"
                        attr:class="px-6 py-3 border border-theme hover:bg-theme-secondary font-medium rounded-lg transition-colors"
                    >
                        "See pricing"
                    </A>
                </div>
            </div>
        </PageShell>
    }
}
