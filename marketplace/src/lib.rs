//! Shared listing-wizard model and host API schema for StayFinder.
//!
//! This crate owns the typed state used by both the native `stayfinder`
//! host client and the Leptos `client`. It performs no I/O: sections,
//! drafts and the aggregator are plain values, and the host module only
//! builds request paths and describes response payloads.
//!
//! ARCHITECTURE
//! ============
//! Each wizard section pairs a local draft (`*Draft`) with the slice it
//! reports upward (`*Slice`). The [`wizard::ListingWizard`] aggregator merges
//! reported slices into a [`draft::ListingDraft`], one slot per
//! [`section::SectionKey`].

pub mod amenities;
pub mod basic;
pub mod details;
pub mod draft;
pub mod host;
mod input;
pub mod legal;
pub mod location;
pub mod messages;
pub mod pricing;
pub mod section;
pub mod wizard;

pub use draft::{ListingDraft, SectionForm, SectionSlice};
pub use messages::MessagesStore;
pub use section::{SectionExpansion, SectionKey};
pub use wizard::ListingWizard;
