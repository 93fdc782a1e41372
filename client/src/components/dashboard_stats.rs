//! Stat cards for the dashboard overview tab.

#[cfg(test)]
#[path = "dashboard_stats_test.rs"]
mod dashboard_stats_test;

use leptos::prelude::*;
use marketplace::host::DashboardStats;

use crate::util::format::{format_currency, format_percent, format_rating};

/// Label/value pairs rendered as cards, in display order.
pub(crate) fn stat_cards(stats: &DashboardStats) -> Vec<(&'static str, String)> {
    let rating = (stats.total_reviews > 0).then_some(stats.average_rating);
    vec![
        ("Active listings", format!("{} / {}", stats.active_listings, stats.total_listings)),
        ("Upcoming bookings", stats.upcoming_bookings.to_string()),
        ("Total bookings", stats.total_bookings.to_string()),
        ("Earnings this month", format_currency(stats.monthly_earnings)),
        ("Total earnings", format_currency(stats.total_earnings)),
        ("Occupancy", format_percent(stats.occupancy_rate)),
        ("Average rating", format_rating(rating)),
        ("Reviews", stats.total_reviews.to_string()),
    ]
}

#[component]
pub fn DashboardStatsGrid(#[prop(into)] stats: Signal<Option<DashboardStats>>) -> impl IntoView {
    view! {
        <Show
            when=move || stats.get().is_some()
            fallback=|| view! { <p class="dashboard-stats__loading">"Loading stats..."</p> }
        >
            <div class="dashboard-stats">
                {move || {
                    stats
                        .get()
                        .map(|s| stat_cards(&s))
                        .unwrap_or_default()
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="stat-card">
                                    <span class="stat-card__label">{label}</span>
                                    <span class="stat-card__value">{value}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Show>
    }
}
