//! Access to the session-wide messages store.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use leptos::prelude::*;
use marketplace::MessagesStore;

/// Counts above this render as `"99+"`.
pub const BADGE_CAP: u32 = 99;

/// The store provided by `App`. Panics outside the app tree, like any
/// `expect_context` lookup.
pub fn use_messages() -> RwSignal<MessagesStore> {
    expect_context::<RwSignal<MessagesStore>>()
}

/// Badge text for an unread count, or `None` when the badge is hidden.
pub fn badge_label(unread: u32) -> Option<String> {
    match unread {
        0 => None,
        n if n > BADGE_CAP => Some(format!("{BADGE_CAP}+")),
        n => Some(n.to_string()),
    }
}
