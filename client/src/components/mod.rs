//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wizard sections each own a local draft and report slices upward through a
//! callback; dashboard components render `marketplace::host` payloads handed
//! down by the page.

pub mod amenities;
pub mod basic_information;
pub mod booking_summary;
pub mod dashboard_stats;
pub mod dashboard_tabs;
pub mod details;
pub mod legal_information;
pub mod listings_table;
pub mod location;
pub mod pricing;
pub mod reviews_panel;
pub mod section_header;
pub mod submit_section;
pub mod unread_badge;
