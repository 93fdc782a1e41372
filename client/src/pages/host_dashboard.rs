//! Host dashboard page: tabbed view over the five host read endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stats and recent bookings load once on mount. Listings, calendar, and
//! analytics refetch whenever their query cursor in `DashboardState` changes;
//! cursors are read through memos so unrelated state writes do not refetch.

use leptos::prelude::*;
use marketplace::host::{AnalyticsPeriod, ListingStatus};

use crate::components::booking_summary::BookingsList;
use crate::components::dashboard_stats::DashboardStatsGrid;
use crate::components::dashboard_tabs::DashboardTabs;
use crate::components::listings_table::ListingsTable;
use crate::components::reviews_panel::ReviewsPanel;
use crate::state::dashboard::{DashboardState, DashboardTab};

#[component]
pub fn HostDashboardPage() -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());

    #[cfg(feature = "hydrate")]
    {
        use marketplace::host::BookingsQuery;

        use crate::net::api;
        use crate::state::dashboard::RECENT_BOOKINGS_LIMIT;

        let today = js_sys::Date::new_0();
        state.update(|s| {
            s.calendar_query.month = Some(today.get_month() + 1);
            s.calendar_query.year = i32::try_from(today.get_full_year()).ok();
        });

        leptos::task::spawn_local(async move {
            match api::fetch_dashboard_stats().await {
                Ok(env) => state.update(|s| s.stats = Some(env.data)),
                Err(e) => state.update(|s| s.record_error("stats", &e)),
            }
        });
        leptos::task::spawn_local(async move {
            match api::fetch_bookings(BookingsQuery { limit: Some(RECENT_BOOKINGS_LIMIT) }).await {
                Ok(env) => state.update(|s| s.bookings = env.data),
                Err(e) => state.update(|s| s.record_error("bookings", &e)),
            }
        });
    }

    let listings_query = Memo::new(move |_| state.with(|s| s.listings_query.clone()));
    let calendar_query = Memo::new(move |_| state.with(|s| s.calendar_query.clone()));
    let analytics_period = Memo::new(move |_| state.with(|s| s.analytics_period));

    Effect::new(move || {
        let query = listings_query.get();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_listings(query).await {
                Ok(page) => state.update(|s| {
                    s.listings = page.data;
                    s.pagination = Some(page.pagination);
                }),
                Err(e) => state.update(|s| s.record_error("listings", &e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = query;
    });

    Effect::new(move || {
        let query = calendar_query.get();
        if query.month.is_none() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_calendar(query).await {
                Ok(env) => state.update(|s| s.calendar = Some(env.data)),
                Err(e) => state.update(|s| s.record_error("calendar", &e)),
            }
        });
    });

    Effect::new(move || {
        let period = analytics_period.get();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let query = marketplace::host::AnalyticsQuery { period: Some(period) };
            match crate::net::api::fetch_analytics(query).await {
                Ok(env) => state.update(|s| s.analytics = Some(env.data)),
                Err(e) => state.update(|s| s.record_error("analytics", &e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = period;
    });

    let tab = Signal::derive(move || state.with(|s| s.tab));
    let on_tab = Callback::new(move |next: DashboardTab| state.update(|s| s.tab = next));

    let stats = Signal::derive(move || state.with(|s| s.stats.clone()));
    let listings = Signal::derive(move || state.with(|s| s.listings.clone()));
    let pagination = Signal::derive(move || state.with(|s| s.pagination));
    let status = Signal::derive(move || state.with(|s| s.listings_query.status));
    let bookings = Signal::derive(move || state.with(|s| s.bookings.clone()));
    let reviews = Signal::derive(move || {
        state.with(|s| s.stats.as_ref().map(|st| st.recent_reviews.clone()).unwrap_or_default())
    });

    let on_status = Callback::new(move |next: Option<ListingStatus>| state.update(|s| s.set_status_filter(next)));
    let on_previous = Callback::new(move |()| {
        state.update(|s| {
            s.previous_page();
        });
    });
    let on_next = Callback::new(move |()| {
        state.update(|s| {
            s.next_page();
        });
    });

    view! {
        <div class="host-dashboard">
            <header class="host-dashboard__header">
                <h1>"Host dashboard"</h1>
                <a class="btn btn--primary" href="/host/listings/new">"+ New listing"</a>
            </header>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="host-dashboard__error" role="alert">
                    {move || state.with(|s| s.error.clone().unwrap_or_default())}
                    <button type="button" class="btn btn--link" on:click=move |_| state.update(|s| s.error = None)>
                        "Dismiss"
                    </button>
                </p>
            </Show>
            <DashboardTabs active=tab on_select=on_tab />
            <section class="host-dashboard__panel">
                {move || match tab.get() {
                    DashboardTab::Overview => {
                        view! {
                            <DashboardStatsGrid stats=stats />
                            <h2>"Recent bookings"</h2>
                            <BookingsList bookings=bookings />
                        }
                            .into_any()
                    }
                    DashboardTab::Listings => {
                        view! {
                            <ListingsTable
                                listings=listings
                                pagination=pagination
                                status=status
                                on_status=on_status
                                on_previous=on_previous
                                on_next=on_next
                            />
                        }
                            .into_any()
                    }
                    DashboardTab::Bookings => view! { <BookingsList bookings=bookings /> }.into_any(),
                    DashboardTab::Calendar => view! { <CalendarPanel state=state /> }.into_any(),
                    DashboardTab::Analytics => view! { <AnalyticsPanel state=state /> }.into_any(),
                    DashboardTab::Reviews => view! { <ReviewsPanel reviews=reviews /> }.into_any(),
                }}
            </section>
        </div>
    }
}

#[component]
fn CalendarPanel(state: RwSignal<DashboardState>) -> impl IntoView {
    view! {
        <div class="calendar-panel">
            <div class="calendar-panel__nav">
                <button type="button" class="btn" on:click=move |_| state.update(|s| s.shift_calendar_month(-1))>
                    "‹"
                </button>
                <span class="calendar-panel__month">{move || state.with(DashboardState::calendar_label)}</span>
                <button type="button" class="btn" on:click=move |_| state.update(|s| s.shift_calendar_month(1))>
                    "›"
                </button>
            </div>
            <pre class="calendar-panel__payload">{move || state.with(|s| pretty_payload(s.calendar.as_ref()))}</pre>
        </div>
    }
}

#[component]
fn AnalyticsPanel(state: RwSignal<DashboardState>) -> impl IntoView {
    view! {
        <div class="analytics-panel">
            <label class="analytics-panel__period">
                "Period "
                <select
                    prop:value=move || state.with(|s| s.analytics_period.as_str())
                    on:change=move |ev| {
                        if let Some(period) = AnalyticsPeriod::parse(&event_target_value(&ev)) {
                            state.update(|s| s.analytics_period = period);
                        }
                    }
                >
                    {AnalyticsPeriod::ALL
                        .into_iter()
                        .map(|p| view! { <option value=p.as_str()>{p.as_str()}</option> })
                        .collect_view()}
                </select>
            </label>
            <pre class="analytics-panel__payload">{move || state.with(|s| pretty_payload(s.analytics.as_ref()))}</pre>
        </div>
    }
}

fn pretty_payload(payload: Option<&serde_json::Value>) -> String {
    payload
        .and_then(|v| serde_json::to_string_pretty(v).ok())
        .unwrap_or_else(|| "Loading...".to_owned())
}
