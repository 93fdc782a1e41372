//! Reviews tab: average rating, per-star histogram, and the review list.

use leptos::prelude::*;
use marketplace::host::{Review, ReviewSummary};

use crate::util::format::format_rating;

#[component]
pub fn ReviewsPanel(#[prop(into)] reviews: Signal<Vec<Review>>) -> impl IntoView {
    let summary = Memo::new(move |_| reviews.with(|r| ReviewSummary::from_reviews(r)));

    view! {
        <div class="reviews-panel">
            <div class="reviews-panel__summary">
                <span class="reviews-panel__average">{move || format_rating(summary.get().average)}</span>
                <span class="reviews-panel__count">{move || format!("{} reviews", summary.get().count)}</span>
            </div>
            <ul class="reviews-panel__histogram">
                {(1..=5u8)
                    .rev()
                    .map(|stars| {
                        view! {
                            <li class="histogram-row">
                                <span class="histogram-row__label">{format!("{stars}★")}</span>
                                <span class="histogram-row__bar">
                                    <span
                                        class="histogram-row__fill"
                                        style:width=move || format!("{}%", summary.get().percent(stars))
                                    ></span>
                                </span>
                                <span class="histogram-row__value">
                                    {move || format!("{}%", summary.get().percent(stars))}
                                </span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <Show
                when=move || !reviews.get().is_empty()
                fallback=|| view! { <p class="reviews-panel__empty">"No reviews yet."</p> }
            >
                <ul class="reviews-panel__list">
                    {move || {
                        reviews
                            .get()
                            .into_iter()
                            .map(|r| {
                                view! {
                                    <li class="review">
                                        <header class="review__header">
                                            <span class="review__guest">{r.guest_name}</span>
                                            <span class="review__rating">{format!("{}★", r.rating)}</span>
                                            <span class="review__date">{r.created_at}</span>
                                        </header>
                                        {r.listing_title.map(|t| view! { <p class="review__listing">{t}</p> })}
                                        <p class="review__comment">{r.comment}</p>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </div>
    }
}
