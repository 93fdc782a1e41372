//! Amenities section: a toggled set of amenity identifiers.
//!
//! Toggling removes an identifier that is present and appends one that is
//! absent, so duplicates cannot occur and two toggles of the same amenity
//! cancel out.

#[cfg(test)]
#[path = "amenities_test.rs"]
mod amenities_test;

use serde::{Deserialize, Serialize};

use crate::draft::{ListingDraft, SectionForm, SectionSlice};
use crate::section::SectionKey;

/// Amenity identifiers offered when the caller does not supply its own list.
pub const DEFAULT_AMENITIES: &[&str] = &[
    "wifi",
    "kitchen",
    "washer",
    "dryer",
    "air_conditioning",
    "heating",
    "workspace",
    "tv",
    "pool",
    "hot_tub",
    "free_parking",
    "ev_charger",
    "gym",
    "bbq_grill",
    "fireplace",
    "smoke_alarm",
];

/// Fields reported by the amenities section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmenitiesSlice {
    pub amenities: Vec<String>,
}

/// Local selection state for the amenities section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AmenitiesDraft {
    selected: Vec<String>,
}

impl AmenitiesDraft {
    /// Flip one amenity. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, amenity: &str) -> bool {
        if let Some(pos) = self.selected.iter().position(|a| a == amenity) {
            self.selected.remove(pos);
            false
        } else {
            self.selected.push(amenity.to_owned());
            true
        }
    }

    #[must_use]
    pub fn is_selected(&self, amenity: &str) -> bool {
        self.selected.iter().any(|a| a == amenity)
    }

    #[must_use]
    pub fn selected(&self) -> &[String] {
        &self.selected
    }
}

impl SectionForm for AmenitiesDraft {
    const KEY: SectionKey = SectionKey::Amenities;

    fn seed(snapshot: &ListingDraft) -> Self {
        Self {
            selected: snapshot
                .amenities()
                .map(|a| a.amenities.clone())
                .unwrap_or_default(),
        }
    }

    fn submit(&mut self) -> Option<SectionSlice> {
        Some(SectionSlice::Amenities(AmenitiesSlice { amenities: self.selected.clone() }))
    }
}

/// Display label for an amenity identifier (`"hot_tub"` -> `"Hot Tub"`).
#[must_use]
pub fn amenity_label(amenity: &str) -> String {
    amenity
        .split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
