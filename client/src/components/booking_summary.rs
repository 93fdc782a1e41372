//! Booking summary card and the compact bookings list.

use leptos::prelude::*;
use marketplace::host::Booking;

use crate::util::format::{format_currency, format_date, pluralize};

/// Full summary used on the confirmation page.
#[component]
pub fn BookingSummary(booking: Booking) -> impl IntoView {
    let nights = pluralize(booking.nights(), "night");
    let guests = pluralize(i64::from(booking.guests), "guest");

    view! {
        <article class="booking-summary">
            <header class="booking-summary__header">
                <h2>{booking.listing_title.clone()}</h2>
                <span class=format!("status status--{}", booking.status.label().to_lowercase())>
                    {booking.status.label()}
                </span>
            </header>
            <dl class="booking-summary__details">
                <dt>"Check-in"</dt>
                <dd>{format_date(booking.check_in)}</dd>
                <dt>"Check-out"</dt>
                <dd>{format_date(booking.check_out)}</dd>
                <dt>"Stay"</dt>
                <dd>{format!("{nights}, {guests}")}</dd>
                <dt>"Total"</dt>
                <dd>{format_currency(booking.total_price)}</dd>
                {booking
                    .confirmation_code
                    .clone()
                    .map(|code| {
                        view! {
                            <dt>"Confirmation code"</dt>
                            <dd class="booking-summary__code">{code}</dd>
                        }
                    })}
            </dl>
        </article>
    }
}

/// Recent bookings table for the dashboard.
#[component]
pub fn BookingsList(#[prop(into)] bookings: Signal<Vec<Booking>>) -> impl IntoView {
    view! {
        <Show
            when=move || !bookings.get().is_empty()
            fallback=|| view! { <p class="bookings-list__empty">"No bookings yet."</p> }
        >
            <ul class="bookings-list">
                {move || {
                    bookings
                        .get()
                        .into_iter()
                        .map(|b| {
                            let href = b.confirmation_path();
                            view! {
                                <li class="bookings-list__item">
                                    <a href=href>{b.listing_title.clone()}</a>
                                    <span>{b.guest_name.clone()}</span>
                                    <span>
                                        {format!(
                                            "{} to {} ({})",
                                            format_date(b.check_in),
                                            format_date(b.check_out),
                                            pluralize(b.nights(), "night"),
                                        )}
                                    </span>
                                    <span>{format_currency(b.total_price)}</span>
                                    <span class="status">{b.status.label()}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </Show>
    }
}
