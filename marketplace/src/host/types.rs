//! Host API payloads.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON. Aggregate counters default
//! to zero when absent so a partially populated dashboard still decodes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Standard response wrapper: `{"success": true, "data": ..., "message": ...}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Wrapper for paged list responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaginatedEnvelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

fn default_success() -> bool {
    true
}

/// Page metadata for list endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Pagination {
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Headline numbers for the host dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_listings: u32,
    pub active_listings: u32,
    pub total_bookings: u32,
    pub upcoming_bookings: u32,
    pub total_earnings: f64,
    pub monthly_earnings: f64,
    pub average_rating: f64,
    pub total_reviews: u32,
    pub occupancy_rate: f64,
    pub recent_reviews: Vec<Review>,
}

/// Publication state of a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Inactive,
    Draft,
    Pending,
}

impl ListingStatus {
    pub const ALL: [ListingStatus; 4] = [Self::Active, Self::Inactive, Self::Draft, Self::Pending];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Draft => "draft",
            Self::Pending => "pending",
        }
    }

    /// Parse the lowercase wire name.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// One row of the host's listing table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub status: ListingStatus,
    pub price: f64,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub bookings_count: u32,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Lifecycle state of a booking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
            Self::Completed => "Completed",
        }
    }
}

/// A guest reservation against one of the host's listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub listing_id: String,
    #[serde(default)]
    pub listing_title: String,
    #[serde(default)]
    pub guest_name: String,
    #[serde(deserialize_with = "deserialize_iso_date")]
    pub check_in: NaiveDate,
    #[serde(deserialize_with = "deserialize_iso_date")]
    pub check_out: NaiveDate,
    pub guests: u32,
    pub total_price: f64,
    pub status: BookingStatus,
    #[serde(default)]
    pub confirmation_code: Option<String>,
}

impl Booking {
    /// Nights between check-in and check-out; zero for inverted ranges.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(0)
    }

    /// Site-relative path of this booking's confirmation screen.
    #[must_use]
    pub fn confirmation_path(&self) -> String {
        format!("/bookings/{}/confirmation", self.id)
    }
}

/// Calendar date of an ISO value: `2026-07-01`, `2026-07-01T00:00:00`, or an
/// RFC 3339 timestamp such as `2026-07-01T00:00:00.000Z`. Timestamps keep the
/// date as written, in their own offset.
#[must_use]
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok().map(|dt| dt.date()))
}

fn deserialize_iso_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_iso_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid ISO date `{raw}`")))
}

/// A guest review of one stay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    #[serde(default)]
    pub guest_name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub listing_title: Option<String>,
}
