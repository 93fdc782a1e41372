//! Legal section: optional short-term rental license.
//!
//! The section reports `{"license": {...}}` when any license field is filled
//! in and `{}` otherwise. An empty report still marks the section as
//! submitted in the aggregate.

#[cfg(test)]
#[path = "legal_test.rs"]
mod legal_test;

use serde::{Deserialize, Serialize};

use crate::draft::{ListingDraft, SectionForm, SectionSlice};
use crate::section::SectionKey;

/// Short-term rental license details.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub number: String,
    #[serde(rename = "type")]
    pub license_type: String,
    pub expiry_date: String,
}

/// Fields reported by the legal section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalSlice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

/// Local draft for the legal section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegalDraft {
    pub license_number: String,
    pub license_type: String,
    pub expiry_date: String,
}

impl LegalDraft {
    fn is_blank(&self) -> bool {
        self.license_number.is_empty() && self.license_type.is_empty() && self.expiry_date.is_empty()
    }
}

impl SectionForm for LegalDraft {
    const KEY: SectionKey = SectionKey::Legal;

    fn seed(snapshot: &ListingDraft) -> Self {
        let Some(license) = snapshot.legal().and_then(|l| l.license.as_ref()) else {
            return Self::default();
        };
        Self {
            license_number: license.number.clone(),
            license_type: license.license_type.clone(),
            expiry_date: license.expiry_date.clone(),
        }
    }

    fn submit(&mut self) -> Option<SectionSlice> {
        let license = (!self.is_blank()).then(|| License {
            number: self.license_number.clone(),
            license_type: self.license_type.clone(),
            expiry_date: self.expiry_date.clone(),
        });
        Some(SectionSlice::Legal(LegalSlice { license }))
    }
}
