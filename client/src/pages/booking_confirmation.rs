//! Booking confirmation page with a share action.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use marketplace::host::Booking;

use crate::components::booking_summary::BookingSummary;

#[component]
pub fn BookingConfirmationPage() -> impl IntoView {
    let params = use_params_map();
    let booking_id = move || params.read().get("id").unwrap_or_default();

    let booking = RwSignal::new(None::<Booking>);
    let error = RwSignal::new(None::<String>);
    let share_feedback = RwSignal::new(None::<String>);

    Effect::new(move || {
        let id = booking_id();
        if id.is_empty() {
            error.set(Some("Missing booking id".to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_booking(&id).await {
                Ok(b) => {
                    booking.set(Some(b));
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Could not load booking: {e}"))),
            }
        });
    });

    let on_share = move |_| {
        let Some(current) = booking.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::util::share::{confirmation_url, current_origin, share_link, share_text, share_title};

            let url = confirmation_url(&current_origin(), &current);
            match share_link(&share_title(&current), &share_text(&current), &url).await {
                Ok(outcome) => share_feedback.set(Some(outcome.message().to_owned())),
                Err(e) => share_feedback.set(Some(format!("Could not share: {e}"))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = current;
    };

    view! {
        <div class="booking-confirmation-page">
            <h1>"Booking confirmed"</h1>
            <Show when=move || error.get().is_some()>
                <p class="booking-confirmation-page__error" role="alert">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || booking.get().is_some()
                fallback=move || {
                    view! {
                        <Show when=move || error.get().is_none()>
                            <p>"Loading booking..."</p>
                        </Show>
                    }
                }
            >
                {move || booking.get().map(|b| view! { <BookingSummary booking=b /> })}
                <div class="booking-confirmation-page__actions">
                    <button type="button" class="btn btn--primary" on:click=on_share>
                        "Share"
                    </button>
                    <a class="btn" href="/">"Back to dashboard"</a>
                </div>
                <Show when=move || share_feedback.get().is_some()>
                    <p class="booking-confirmation-page__feedback">
                        {move || share_feedback.get().unwrap_or_default()}
                    </p>
                </Show>
            </Show>
        </div>
    }
}
