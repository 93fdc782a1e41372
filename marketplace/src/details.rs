//! Property-details section: capacity and room counts.

#[cfg(test)]
#[path = "details_test.rs"]
mod details_test;

use serde::{Deserialize, Serialize};

use crate::draft::{ListingDraft, SectionForm, SectionSlice};
use crate::input::{parse_clamped_u32, parse_half_step};
use crate::section::SectionKey;

pub const MIN_GUESTS: u32 = 1;
pub const MAX_GUESTS: u32 = 20;
pub const MIN_BEDROOMS: u32 = 0;
pub const MIN_BEDS: u32 = 1;
pub const MIN_BATHROOMS: f64 = 0.5;
pub const MAX_BATHROOMS: f64 = 50.0;

/// Fields reported by the details section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetailsSlice {
    pub guests: u32,
    pub bedrooms: u32,
    pub beds: u32,
    pub bathrooms: f64,
}

impl Default for DetailsSlice {
    fn default() -> Self {
        Self { guests: 2, bedrooms: 1, beds: 1, bathrooms: 1.0 }
    }
}

/// Local draft for the details section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailsDraft {
    values: DetailsSlice,
}

impl DetailsDraft {
    #[must_use]
    pub fn values(&self) -> &DetailsSlice {
        &self.values
    }

    pub fn set_guests(&mut self, raw: &str) {
        if let Some(v) = parse_clamped_u32(raw, MIN_GUESTS, MAX_GUESTS) {
            self.values.guests = v;
        }
    }

    pub fn set_bedrooms(&mut self, raw: &str) {
        if let Some(v) = parse_clamped_u32(raw, MIN_BEDROOMS, u32::MAX) {
            self.values.bedrooms = v;
        }
    }

    pub fn set_beds(&mut self, raw: &str) {
        if let Some(v) = parse_clamped_u32(raw, MIN_BEDS, u32::MAX) {
            self.values.beds = v;
        }
    }

    pub fn set_bathrooms(&mut self, raw: &str) {
        if let Some(v) = parse_half_step(raw, MIN_BATHROOMS, MAX_BATHROOMS) {
            self.values.bathrooms = v;
        }
    }
}

impl SectionForm for DetailsDraft {
    const KEY: SectionKey = SectionKey::Details;

    fn seed(snapshot: &ListingDraft) -> Self {
        Self { values: snapshot.details().cloned().unwrap_or_default() }
    }

    fn submit(&mut self) -> Option<SectionSlice> {
        Some(SectionSlice::Details(self.values.clone()))
    }
}
