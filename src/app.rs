use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::SimulatedGateway;
use crate::ui::auth::{AuthModal, provide_auth_modal_context};
use crate::ui::pages::{
    CheckoutPage, CheckoutSuccessPage, ExplorePage, ForgotPasswordPage, HomePage, LegalPage,
    LoginPage, NotFoundPage, OtpPage, PricingPage, ProductPage, ResourcesPage, SignupPage,
};
use crate::ui::theme::provide_theme_context;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let gateway = SimulatedGateway::default();
    provide_context(gateway);
    provide_theme_context();
    provide_auth_modal_context(gateway);

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/saby.css"/>
        <Title text="Saby - Analytics for every team"/>
        <Meta name="description" content="Saby turns raw events into answers your whole team can read."/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/pricing") view=PricingPage/>
                <Route path=path!("/product") view=ProductPage/>
                <Route path=path!("/explore") view=ExplorePage/>
                <Route path=path!("/resources") view=ResourcesPage/>
                <Route path=path!("/legal") view=LegalPage/>
                <Route path=path!("/checkout") view=CheckoutPage/>
                <Route path=path!("/checkout/success") view=CheckoutSuccessPage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/signup") view=SignupPage/>
                <Route path=path!("/forgot-password") view=ForgotPasswordPage/>
                <Route path=path!("/otp") view=OtpPage/>
            </Routes>
            <AuthModal/>
        </Router>
    }
}
