//! Navbar badge for unread messages.

use leptos::prelude::*;

use crate::state::messages::{badge_label, use_messages};

#[component]
pub fn UnreadBadge() -> impl IntoView {
    let messages = use_messages();
    let label = move || badge_label(messages.get().unread_count());

    view! {
        <Show when=move || label().is_some()>
            <span class="unread-badge" aria-label="unread messages">{move || label().unwrap_or_default()}</span>
        </Show>
    }
}
