//! Site chrome shared by every page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::AuthView;
use crate::ui::auth::{AuthModalContext, use_auth_modal_context};
use crate::ui::theme::{ThemeContext, ThemeToggle, use_theme_context};

const NAV_LINKS: &[(&str, &str)] = &[
    ("/product", "Product"),
    ("/explore", "Explore"),
    ("/pricing", "Pricing"),
    ("/resources", "Resources"),
];

/// Header, page body and footer
#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    let theme = use_theme_context();
    let auth = use_auth_modal_context();

    view! {
        <div class="min-h-screen bg-theme-primary text-theme-primary flex flex-col">
            <SiteHeader theme=theme auth=auth />
            <main class="flex-1">{children()}</main>
            <SiteFooter />
        </div>
    }
}

#[component]
pub fn SiteHeader(theme: ThemeContext, auth: AuthModalContext) -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 border-b border-theme bg-theme-primary/80 backdrop-blur">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex items-center justify-between h-16">
                <A href="/" attr:class="flex items-center gap-2 hover:opacity-80 transition-opacity">
                    <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center text-white font-bold">
                        "S"
                    </div>
                    <span class="text-xl font-bold">"Saby"</span>
                </A>

                <nav class="hidden md:flex items-center gap-6 text-sm text-theme-secondary">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| view! {
                            <A href=*href attr:class="hover:text-theme-primary transition-colors">{*label}</A>
                        })
                        .collect_view()}
                </nav>

                <div class="flex items-center gap-3">
                    <ThemeToggle theme=theme />
                    <button
                        type="button"
                        class="text-sm font-medium text-theme-secondary hover:text-theme-primary"
                        on:click=move |_| auth.open_default()
                    >
                        "Sign in"
                    </button>
                    <button
                        type="button"
                        class="btn-primary text-sm"
                        on:click=move |_| auth.open(AuthView::Signup)
                    >
                        "Get started"
                    </button>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-theme">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col sm:flex-row items-center justify-between gap-4 text-sm text-theme-tertiary">
                <p>"© 2026 Saby Analytics"</p>
                <div class="flex gap-6">
                    <A href="/legal" attr:class="hover:text-theme-secondary">"Legal"</A>
                    <A href="/resources" attr:class="hover:text-theme-secondary">"Resources"</A>
                    <A href="/pricing" attr:class="hover:text-theme-secondary">"Pricing"</A>
                </div>
            </div>
        </footer>
    }
}
