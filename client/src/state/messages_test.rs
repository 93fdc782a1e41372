use super::*;

#[test]
fn badge_hidden_at_zero() {
    assert_eq!(badge_label(0), None);
}

#[test]
fn badge_shows_exact_count_up_to_cap() {
    assert_eq!(badge_label(1).as_deref(), Some("1"));
    assert_eq!(badge_label(99).as_deref(), Some("99"));
}

#[test]
fn badge_caps_large_counts() {
    assert_eq!(badge_label(100).as_deref(), Some("99+"));
    assert_eq!(badge_label(u32::MAX).as_deref(), Some("99+"));
}

#[test]
fn badge_follows_store_after_clamped_decrement() {
    let mut store = MessagesStore::default();
    store.increment_unread_count();
    store.decrement_unread_count(4);
    assert_eq!(badge_label(store.unread_count()), None);
}
