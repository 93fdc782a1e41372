//! Wizard section identity and per-section expansion state.
//!
//! DESIGN
//! ======
//! Expansion is tracked per key rather than as a single "active section" so
//! several sections can be open at once and toggling one never collapses
//! another.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One step of the create-listing wizard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Basic,
    Amenities,
    Details,
    Location,
    Pricing,
    Legal,
}

impl SectionKey {
    /// All sections in display order.
    pub const ALL: [SectionKey; 6] = [
        SectionKey::Basic,
        SectionKey::Amenities,
        SectionKey::Details,
        SectionKey::Location,
        SectionKey::Pricing,
        SectionKey::Legal,
    ];

    /// Stable lowercase identifier, matching the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Amenities => "amenities",
            Self::Details => "details",
            Self::Location => "location",
            Self::Pricing => "pricing",
            Self::Legal => "legal",
        }
    }

    /// Human-readable section heading.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic Information",
            Self::Amenities => "Amenities",
            Self::Details => "Property Details",
            Self::Location => "Location",
            Self::Pricing => "Pricing",
            Self::Legal => "Legal Information",
        }
    }
}

/// Expanded/collapsed flag for every wizard section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionExpansion {
    expanded: BTreeSet<SectionKey>,
}

impl SectionExpansion {
    /// Start with exactly one section open.
    #[must_use]
    pub fn with_expanded(key: SectionKey) -> Self {
        let mut expansion = Self::default();
        expansion.expanded.insert(key);
        expansion
    }

    #[must_use]
    pub fn is_expanded(&self, key: SectionKey) -> bool {
        self.expanded.contains(&key)
    }

    /// Flip one section. Returns the new state for that section.
    pub fn toggle(&mut self, key: SectionKey) -> bool {
        if self.expanded.remove(&key) {
            false
        } else {
            self.expanded.insert(key);
            true
        }
    }
}
