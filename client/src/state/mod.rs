//! Client-side state wrappers around `marketplace` values.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dashboard` holds route-scoped host dashboard data; `messages` exposes the
//! session-scoped unread counter provided by `App`.

pub mod dashboard;
pub mod messages;
