//! Application shell, context providers, and routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates the session-scoped stores once and provides them through
//! context; pages and components obtain them with `expect_context`.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{A, Route, Router, Routes};
use leptos_router::path;
use marketplace::MessagesStore;

use crate::components::unread_badge::UnreadBadge;
use crate::pages::booking_confirmation::BookingConfirmationPage;
use crate::pages::create_listing::CreateListingPage;
use crate::pages::host_dashboard::HostDashboardPage;

/// HTML document wrapper used by server rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(MessagesStore::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/stayfinder.css" />
        <Title text="StayFinder Host" />
        <Router>
            <nav class="navbar">
                <A href="/">"Dashboard"</A>
                <A href="/host/listings/new">"New listing"</A>
                <span class="navbar__spacer"></span>
                <span class="navbar__messages">"Messages" <UnreadBadge /></span>
            </nav>
            <main class="app-main">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=HostDashboardPage />
                    <Route path=path!("/host/listings/new") view=CreateListingPage />
                    <Route path=path!("/bookings/:id/confirmation") view=BookingConfirmationPage />
                </Routes>
            </main>
        </Router>
    }
}
