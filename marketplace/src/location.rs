//! Location section and its address validation.
//!
//! VALIDATION
//! ==========
//! Checks run in a fixed order and the first failure wins:
//! required fields, then address length, then the address character set.
//! A failure replaces any previous error and nothing is reported upward.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::draft::{ListingDraft, SectionForm, SectionSlice};
use crate::section::SectionKey;

pub const MIN_ADDRESS_LEN: usize = 5;

static ADDRESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s,.#-]+$").expect("address pattern compiles"));

/// Why a location failed validation. `Display` is the inline message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("Address, city, and country are required")]
    MissingRequired,
    #[error("Address must be at least 5 characters long")]
    AddressTooShort,
    #[error("Address contains invalid characters")]
    InvalidAddressCharacters,
}

/// Postal location of a listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub neighborhood: String,
}

/// Fields reported by the location section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSlice {
    pub location: Location,
}

/// Validate a location in the documented order.
///
/// # Errors
///
/// Returns the first failing check.
pub fn validate_location(location: &Location) -> Result<(), LocationError> {
    let address = location.address.trim();
    if address.is_empty() || location.city.trim().is_empty() || location.country.trim().is_empty() {
        return Err(LocationError::MissingRequired);
    }
    if address.chars().count() < MIN_ADDRESS_LEN {
        return Err(LocationError::AddressTooShort);
    }
    if !ADDRESS_PATTERN.is_match(address) {
        return Err(LocationError::InvalidAddressCharacters);
    }
    Ok(())
}

/// Local draft for the location section.
///
/// Required fields keep the raw input until submit; optional fields are
/// trimmed as they are typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationDraft {
    pub address: String,
    pub city: String,
    pub country: String,
    state: String,
    zip_code: String,
    neighborhood: String,
    error: Option<String>,
}

impl LocationDraft {
    pub fn set_state(&mut self, raw: &str) {
        raw.trim().clone_into(&mut self.state);
    }

    pub fn set_zip_code(&mut self, raw: &str) {
        raw.trim().clone_into(&mut self.zip_code);
    }

    pub fn set_neighborhood(&mut self, raw: &str) {
        raw.trim().clone_into(&mut self.neighborhood);
    }

    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    #[must_use]
    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    #[must_use]
    pub fn neighborhood(&self) -> &str {
        &self.neighborhood
    }

    fn to_location(&self) -> Location {
        Location {
            address: self.address.trim().to_owned(),
            city: self.city.trim().to_owned(),
            state: self.state.clone(),
            country: self.country.trim().to_owned(),
            zip_code: self.zip_code.clone(),
            neighborhood: self.neighborhood.clone(),
        }
    }
}

impl SectionForm for LocationDraft {
    const KEY: SectionKey = SectionKey::Location;

    fn seed(snapshot: &ListingDraft) -> Self {
        let Some(slice) = snapshot.location() else {
            return Self::default();
        };
        let loc = &slice.location;
        Self {
            address: loc.address.clone(),
            city: loc.city.clone(),
            country: loc.country.clone(),
            state: loc.state.clone(),
            zip_code: loc.zip_code.clone(),
            neighborhood: loc.neighborhood.clone(),
            error: None,
        }
    }

    fn submit(&mut self) -> Option<SectionSlice> {
        let location = self.to_location();
        if let Err(e) = validate_location(&location) {
            self.error = Some(e.to_string());
            return None;
        }
        self.error = None;
        Some(SectionSlice::Location(LocationSlice { location }))
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
