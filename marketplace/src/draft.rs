//! Cumulative listing draft and the section slices merged into it.
//!
//! DESIGN
//! ======
//! Every section owns exactly one slot. A slot is `None` until that section
//! reports for the first time, and each later report replaces the slot
//! wholesale. Serializing the draft flattens the submitted slices into the
//! create-listing request body, so sections that never reported add no keys.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use serde::Serialize;

use crate::amenities::AmenitiesSlice;
use crate::basic::BasicInfoSlice;
use crate::details::DetailsSlice;
use crate::legal::LegalSlice;
use crate::location::LocationSlice;
use crate::pricing::PricingSlice;
use crate::section::SectionKey;

/// The fields one section reports upward on submit.
///
/// Serializes to exactly the JSON object the section reports, e.g.
/// `{"location": {...}}` for [`SectionSlice::Location`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionSlice {
    Basic(BasicInfoSlice),
    Amenities(AmenitiesSlice),
    Details(DetailsSlice),
    Location(LocationSlice),
    Pricing(PricingSlice),
    Legal(LegalSlice),
}

impl SectionSlice {
    /// Section this slice belongs to.
    #[must_use]
    pub fn key(&self) -> SectionKey {
        match self {
            Self::Basic(_) => SectionKey::Basic,
            Self::Amenities(_) => SectionKey::Amenities,
            Self::Details(_) => SectionKey::Details,
            Self::Location(_) => SectionKey::Location,
            Self::Pricing(_) => SectionKey::Pricing,
            Self::Legal(_) => SectionKey::Legal,
        }
    }
}

/// In-progress listing: the most recent slice reported by each section.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ListingDraft {
    #[serde(flatten)]
    basic: Option<BasicInfoSlice>,
    #[serde(flatten)]
    amenities: Option<AmenitiesSlice>,
    #[serde(flatten)]
    details: Option<DetailsSlice>,
    #[serde(flatten)]
    location: Option<LocationSlice>,
    #[serde(flatten)]
    pricing: Option<PricingSlice>,
    #[serde(flatten)]
    legal: Option<LegalSlice>,
}

impl ListingDraft {
    /// Replace the slot for the slice's section.
    pub fn merge(&mut self, slice: SectionSlice) {
        match slice {
            SectionSlice::Basic(s) => self.basic = Some(s),
            SectionSlice::Amenities(s) => self.amenities = Some(s),
            SectionSlice::Details(s) => self.details = Some(s),
            SectionSlice::Location(s) => self.location = Some(s),
            SectionSlice::Pricing(s) => self.pricing = Some(s),
            SectionSlice::Legal(s) => self.legal = Some(s),
        }
    }

    /// Whether the section has reported at least once.
    #[must_use]
    pub fn is_submitted(&self, key: SectionKey) -> bool {
        match key {
            SectionKey::Basic => self.basic.is_some(),
            SectionKey::Amenities => self.amenities.is_some(),
            SectionKey::Details => self.details.is_some(),
            SectionKey::Location => self.location.is_some(),
            SectionKey::Pricing => self.pricing.is_some(),
            SectionKey::Legal => self.legal.is_some(),
        }
    }

    /// Sections that have reported, in display order.
    #[must_use]
    pub fn submitted_sections(&self) -> Vec<SectionKey> {
        SectionKey::ALL
            .into_iter()
            .filter(|key| self.is_submitted(*key))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.submitted_sections().is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn basic(&self) -> Option<&BasicInfoSlice> {
        self.basic.as_ref()
    }

    #[must_use]
    pub fn amenities(&self) -> Option<&AmenitiesSlice> {
        self.amenities.as_ref()
    }

    #[must_use]
    pub fn details(&self) -> Option<&DetailsSlice> {
        self.details.as_ref()
    }

    #[must_use]
    pub fn location(&self) -> Option<&LocationSlice> {
        self.location.as_ref()
    }

    #[must_use]
    pub fn pricing(&self) -> Option<&PricingSlice> {
        self.pricing.as_ref()
    }

    #[must_use]
    pub fn legal(&self) -> Option<&LegalSlice> {
        self.legal.as_ref()
    }
}

/// Local form state for one wizard section.
///
/// A draft is seeded from a snapshot of the aggregate exactly once, when the
/// section mounts. It holds its own copy afterwards; later changes to the
/// aggregate are not observed.
pub trait SectionForm: Sized {
    /// Section this form edits.
    const KEY: SectionKey;

    /// Build the local draft from the aggregate as it stands at mount time.
    fn seed(snapshot: &ListingDraft) -> Self;

    /// Validate and produce the slice to report, or record an error and
    /// return `None`.
    fn submit(&mut self) -> Option<SectionSlice>;

    /// Current inline error, for sections that validate.
    fn error(&self) -> Option<&str> {
        None
    }
}
