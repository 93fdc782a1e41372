//! Command-line surface of `stayfinder-host`.
//!
//! Each subcommand maps to exactly one [`HostService`] call; the decoded
//! envelope is re-serialized so the binary can print it as JSON.

#[cfg(test)]
#[path = "cli_test.rs"]
mod cli_test;

use clap::{Parser, Subcommand};
use marketplace::host::{
    AnalyticsPeriod, AnalyticsQuery, BookingsQuery, CalendarQuery, HostRequest, ListingStatus, ListingsQuery,
};
use serde_json::Value;

use crate::host::{HostError, HostService};

#[derive(Parser, Debug)]
#[command(name = "stayfinder-host", about = "StayFinder host dashboard API CLI")]
pub struct Cli {
    /// API root, e.g. `http://127.0.0.1:5000/api`. Overrides `STAYFINDER_API_URL`.
    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long, env = "STAYFINDER_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Dashboard summary counters.
    Stats,
    /// One page of the host's listings.
    Listings {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long, value_parser = parse_listing_status)]
        status: Option<ListingStatus>,
    },
    /// Recent bookings across all listings.
    Bookings {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Availability calendar.
    Calendar {
        #[arg(long)]
        listing_id: Option<String>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
    },
    /// Earnings and occupancy over a period.
    Analytics {
        #[arg(long, value_parser = parse_period)]
        period: Option<AnalyticsPeriod>,
    },
}

impl Command {
    /// The host read this subcommand performs.
    #[must_use]
    pub fn request(&self) -> HostRequest {
        match self {
            Self::Stats => HostRequest::Stats,
            Self::Listings { page, limit, status } => {
                HostRequest::Listings(ListingsQuery { page: *page, limit: *limit, status: *status })
            }
            Self::Bookings { limit } => HostRequest::Bookings(BookingsQuery { limit: *limit }),
            Self::Calendar { listing_id, month, year } => HostRequest::Calendar(CalendarQuery {
                listing_id: listing_id.clone(),
                month: *month,
                year: *year,
            }),
            Self::Analytics { period } => HostRequest::Analytics(AnalyticsQuery { period: *period }),
        }
    }
}

/// Run one host read and return the response envelope as JSON.
///
/// # Errors
///
/// Returns the [`HostError`] from the underlying call.
pub async fn run(service: &HostService, request: HostRequest) -> Result<Value, HostError> {
    let value = match request {
        HostRequest::Stats => to_value(&service.get_dashboard_stats().await?)?,
        HostRequest::Listings(query) => to_value(&service.get_listings(query).await?)?,
        HostRequest::Bookings(query) => to_value(&service.get_bookings(query).await?)?,
        HostRequest::Calendar(query) => to_value(&service.get_calendar(query).await?)?,
        HostRequest::Analytics(query) => to_value(&service.get_analytics(query).await?)?,
    };
    Ok(value)
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, HostError> {
    serde_json::to_value(value).map_err(|e| HostError::Decode(e.to_string()))
}

fn parse_listing_status(raw: &str) -> Result<ListingStatus, String> {
    ListingStatus::parse(raw).ok_or_else(|| {
        let names: Vec<&str> = ListingStatus::ALL.iter().map(|s| s.as_str()).collect();
        format!("unknown listing status `{raw}` (expected one of: {})", names.join(", "))
    })
}

fn parse_period(raw: &str) -> Result<AnalyticsPeriod, String> {
    AnalyticsPeriod::parse(raw).ok_or_else(|| format!("unknown period `{raw}` (expected week, month or year)"))
}
