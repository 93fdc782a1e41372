//! Browser networking.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls against the same-origin `/api` root, reusing the
//! `marketplace` path builders shared with the native host client.

pub mod api;
