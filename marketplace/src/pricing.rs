//! Pricing section: nightly price, one-off fees, and stay discounts.
//!
//! Discounts are bounded individually; weekly and monthly discounts are not
//! checked against each other.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use serde::{Deserialize, Serialize};

use crate::draft::{ListingDraft, SectionForm, SectionSlice};
use crate::input::parse_clamped_u32;
use crate::section::SectionKey;

pub const MIN_PRICE: u32 = 1;
pub const MAX_DISCOUNT_PERCENT: u32 = 50;

/// Why pricing failed validation. `Display` is the inline message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Price per night must be at least 1")]
    PriceRequired,
}

/// Fields reported by the pricing section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSlice {
    pub price: u32,
    pub cleaning_fee: u32,
    pub security_deposit: u32,
    pub weekly_discount: u32,
    pub monthly_discount: u32,
}

/// Local draft for the pricing section. A price of 0 means "not entered".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PricingDraft {
    values: PricingSlice,
    error: Option<String>,
}

impl PricingDraft {
    #[must_use]
    pub fn values(&self) -> &PricingSlice {
        &self.values
    }

    pub fn set_price(&mut self, raw: &str) {
        if let Some(v) = parse_clamped_u32(raw, 0, u32::MAX) {
            self.values.price = v;
        }
    }

    pub fn set_cleaning_fee(&mut self, raw: &str) {
        if let Some(v) = parse_clamped_u32(raw, 0, u32::MAX) {
            self.values.cleaning_fee = v;
        }
    }

    pub fn set_security_deposit(&mut self, raw: &str) {
        if let Some(v) = parse_clamped_u32(raw, 0, u32::MAX) {
            self.values.security_deposit = v;
        }
    }

    pub fn set_weekly_discount(&mut self, raw: &str) {
        if let Some(v) = parse_clamped_u32(raw, 0, MAX_DISCOUNT_PERCENT) {
            self.values.weekly_discount = v;
        }
    }

    pub fn set_monthly_discount(&mut self, raw: &str) {
        if let Some(v) = parse_clamped_u32(raw, 0, MAX_DISCOUNT_PERCENT) {
            self.values.monthly_discount = v;
        }
    }
}

/// Validate a pricing slice.
///
/// # Errors
///
/// Returns [`PricingError::PriceRequired`] when no positive price was entered.
pub fn validate_pricing(pricing: &PricingSlice) -> Result<(), PricingError> {
    if pricing.price < MIN_PRICE {
        return Err(PricingError::PriceRequired);
    }
    Ok(())
}

impl SectionForm for PricingDraft {
    const KEY: SectionKey = SectionKey::Pricing;

    fn seed(snapshot: &ListingDraft) -> Self {
        Self { values: snapshot.pricing().cloned().unwrap_or_default(), error: None }
    }

    fn submit(&mut self) -> Option<SectionSlice> {
        if let Err(e) = validate_pricing(&self.values) {
            self.error = Some(e.to_string());
            return None;
        }
        self.error = None;
        Some(SectionSlice::Pricing(self.values.clone()))
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
