//! Basic-information section: title, description, property type, category.

#[cfg(test)]
#[path = "basic_test.rs"]
mod basic_test;

use serde::{Deserialize, Serialize};

use crate::draft::{ListingDraft, SectionForm, SectionSlice};
use crate::section::SectionKey;

/// Property types offered when the caller does not supply its own list.
pub const DEFAULT_PROPERTY_TYPES: &[&str] =
    &["apartment", "house", "villa", "cabin", "cottage", "condo", "loft", "guesthouse"];

/// Listing categories offered when the caller does not supply its own list.
pub const DEFAULT_CATEGORIES: &[&str] =
    &["beachfront", "mountain", "city", "countryside", "lakefront", "desert", "ski", "tropical"];

/// Fields reported by the basic-information section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfoSlice {
    pub title: String,
    pub description: String,
    pub property_type: String,
    pub category: String,
}

/// Local draft for the basic-information section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BasicInfoDraft {
    pub title: String,
    pub description: String,
    pub property_type: String,
    pub category: String,
}

impl SectionForm for BasicInfoDraft {
    const KEY: SectionKey = SectionKey::Basic;

    fn seed(snapshot: &ListingDraft) -> Self {
        let Some(basic) = snapshot.basic() else {
            return Self::default();
        };
        Self {
            title: basic.title.clone(),
            description: basic.description.clone(),
            property_type: basic.property_type.clone(),
            category: basic.category.clone(),
        }
    }

    fn submit(&mut self) -> Option<SectionSlice> {
        Some(SectionSlice::Basic(BasicInfoSlice {
            title: self.title.clone(),
            description: self.description.clone(),
            property_type: self.property_type.clone(),
            category: self.category.clone(),
        }))
    }
}
