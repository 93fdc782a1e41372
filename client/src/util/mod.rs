//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `format` renders money, dates, and counts for display; `share` wraps the
//! browser share sheet and clipboard so pages stay free of `web_sys` calls.

pub mod format;
pub mod share;
