//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own route-scoped state and network calls; components below them only
//! render props and report user intent through callbacks.

pub mod booking_confirmation;
pub mod create_listing;
pub mod host_dashboard;
