//! Listings tab: status filter, table, and pager.

use leptos::prelude::*;
use marketplace::host::{Listing, ListingStatus, Pagination};

use crate::util::format::{format_currency, format_rating};

#[component]
pub fn ListingsTable(
    #[prop(into)] listings: Signal<Vec<Listing>>,
    #[prop(into)] pagination: Signal<Option<Pagination>>,
    #[prop(into)] status: Signal<Option<ListingStatus>>,
    on_status: Callback<Option<ListingStatus>>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    let has_previous = move || pagination.get().is_some_and(|p| p.has_previous());
    let has_next = move || pagination.get().is_some_and(|p| p.has_next());

    view! {
        <div class="listings-table">
            <label class="listings-table__filter">
                "Status "
                <select
                    prop:value=move || status.get().map(ListingStatus::as_str).unwrap_or_default()
                    on:change=move |ev| on_status.run(ListingStatus::parse(&event_target_value(&ev)))
                >
                    <option value="">"All"</option>
                    {ListingStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect_view()}
                </select>
            </label>
            <Show
                when=move || !listings.get().is_empty()
                fallback=|| view! { <p class="listings-table__empty">"No listings yet."</p> }
            >
                <table>
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Location"</th>
                            <th>"Status"</th>
                            <th>"Price"</th>
                            <th>"Rating"</th>
                            <th>"Bookings"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            listings
                                .get()
                                .into_iter()
                                .map(|l| {
                                    let place = [l.city.as_str(), l.country.as_str()]
                                        .into_iter()
                                        .filter(|part| !part.is_empty())
                                        .collect::<Vec<_>>()
                                        .join(", ");
                                    view! {
                                        <tr>
                                            <td>{l.title}</td>
                                            <td>{place}</td>
                                            <td class=format!("status status--{}", l.status.as_str())>
                                                {l.status.as_str()}
                                            </td>
                                            <td>{format!("{} / night", format_currency(l.price))}</td>
                                            <td>{format!("{} ({})", format_rating(l.rating), l.review_count)}</td>
                                            <td>{l.bookings_count}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
            <div class="listings-table__pager">
                <button type="button" class="btn" disabled=move || !has_previous() on:click=move |_| on_previous.run(())>
                    "Previous"
                </button>
                <span>
                    {move || {
                        pagination
                            .get()
                            .map(|p| format!("Page {} of {} ({} listings)", p.page, p.total_pages.max(1), p.total))
                            .unwrap_or_default()
                    }}
                </span>
                <button type="button" class="btn" disabled=move || !has_next() on:click=move |_| on_next.run(())>
                    "Next"
                </button>
            </div>
        </div>
    }
}
