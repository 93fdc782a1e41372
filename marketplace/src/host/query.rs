//! Request paths for the five host read operations.
//!
//! Only parameters that are set are appended to the query string, in a fixed
//! order, and values are form-urlencoded.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use super::types::ListingStatus;

/// Path prefix for every host endpoint, relative to the API base URL.
pub const HOST_BASE_PATH: &str = "/host";

/// Parameters for `GET /host/listings`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<ListingStatus>,
}

/// Parameters for `GET /host/bookings`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BookingsQuery {
    pub limit: Option<u32>,
}

/// Parameters for `GET /host/calendar`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalendarQuery {
    pub listing_id: Option<String>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

/// Reporting window for `GET /host/analytics`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsPeriod {
    Week,
    #[default]
    Month,
    Year,
}

impl AnalyticsPeriod {
    pub const ALL: [AnalyticsPeriod; 3] = [Self::Week, Self::Month, Self::Year];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Parse the lowercase wire name.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw)
    }
}

/// Parameters for `GET /host/analytics`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnalyticsQuery {
    pub period: Option<AnalyticsPeriod>,
}

/// One host dashboard read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostRequest {
    Stats,
    Listings(ListingsQuery),
    Bookings(BookingsQuery),
    Calendar(CalendarQuery),
    Analytics(AnalyticsQuery),
}

impl HostRequest {
    /// Path plus query string, e.g. `/host/listings?page=2&limit=10`.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Stats => format!("{HOST_BASE_PATH}/stats"),
            Self::Listings(q) => with_query(
                "listings",
                &[
                    ("page", q.page.map(|v| v.to_string())),
                    ("limit", q.limit.map(|v| v.to_string())),
                    ("status", q.status.map(|s| s.as_str().to_owned())),
                ],
            ),
            Self::Bookings(q) => with_query("bookings", &[("limit", q.limit.map(|v| v.to_string()))]),
            Self::Calendar(q) => with_query(
                "calendar",
                &[
                    ("listingId", q.listing_id.clone()),
                    ("month", q.month.map(|v| v.to_string())),
                    ("year", q.year.map(|v| v.to_string())),
                ],
            ),
            Self::Analytics(q) => {
                with_query("analytics", &[("period", q.period.map(|p| p.as_str().to_owned()))])
            }
        }
    }

    /// Short operation name used in log lines.
    #[must_use]
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::Listings(_) => "listings",
            Self::Bookings(_) => "bookings",
            Self::Calendar(_) => "calendar",
            Self::Analytics(_) => "analytics",
        }
    }
}

fn with_query(endpoint: &str, params: &[(&str, Option<String>)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        if let Some(value) = value {
            serializer.append_pair(key, value);
        }
    }
    let query = serializer.finish();
    if query.is_empty() {
        format!("{HOST_BASE_PATH}/{endpoint}")
    } else {
        format!("{HOST_BASE_PATH}/{endpoint}?{query}")
    }
}
