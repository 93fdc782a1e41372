//! Unread-message counter for the signed-in user.
//!
//! The application root creates one store per session and hands it to
//! consumers explicitly; there is no global instance.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

/// Session-scoped unread message count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MessagesStore {
    unread_count: u32,
}

impl MessagesStore {
    #[must_use]
    pub fn unread_count(&self) -> u32 {
        self.unread_count
    }

    pub fn set_unread_count(&mut self, count: u32) {
        self.unread_count = count;
    }

    pub fn increment_unread_count(&mut self) {
        self.unread_count = self.unread_count.saturating_add(1);
    }

    /// Subtract `count`, stopping at zero.
    pub fn decrement_unread_count(&mut self, count: u32) {
        self.unread_count = self.unread_count.saturating_sub(count);
    }
}
