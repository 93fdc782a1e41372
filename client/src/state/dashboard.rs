//! Host dashboard state: active tab, loaded payloads, and query cursors.
//!
//! DESIGN
//! ======
//! Each dataset is loaded independently, so a failure in one tab leaves the
//! others usable. Query cursors (`listings_query`, `calendar_query`,
//! `analytics_period`) are the inputs the page effects watch; mutating them
//! triggers a refetch.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use marketplace::host::{
    AnalyticsPeriod, Booking, CalendarQuery, DashboardStats, Listing, ListingStatus, ListingsQuery, Pagination,
};
use serde_json::Value;

pub const LISTINGS_PAGE_SIZE: u32 = 10;
pub const RECENT_BOOKINGS_LIMIT: u32 = 5;

/// Tabs of the host dashboard, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Overview,
    Listings,
    Bookings,
    Calendar,
    Analytics,
    Reviews,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 6] = [
        Self::Overview,
        Self::Listings,
        Self::Bookings,
        Self::Calendar,
        Self::Analytics,
        Self::Reviews,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Listings => "Listings",
            Self::Bookings => "Bookings",
            Self::Calendar => "Calendar",
            Self::Analytics => "Analytics",
            Self::Reviews => "Reviews",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub tab: DashboardTab,
    pub stats: Option<DashboardStats>,
    pub listings: Vec<Listing>,
    pub pagination: Option<Pagination>,
    pub listings_query: ListingsQuery,
    pub bookings: Vec<Booking>,
    pub calendar_query: CalendarQuery,
    pub calendar: Option<Value>,
    pub analytics_period: AnalyticsPeriod,
    pub analytics: Option<Value>,
    pub error: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            tab: DashboardTab::default(),
            stats: None,
            listings: Vec::new(),
            pagination: None,
            listings_query: ListingsQuery { page: Some(1), limit: Some(LISTINGS_PAGE_SIZE), status: None },
            bookings: Vec::new(),
            calendar_query: CalendarQuery::default(),
            calendar: None,
            analytics_period: AnalyticsPeriod::default(),
            analytics: None,
            error: None,
        }
    }
}

impl DashboardState {
    /// Filter listings by status and return to the first page.
    pub fn set_status_filter(&mut self, status: Option<ListingStatus>) {
        self.listings_query.status = status;
        self.listings_query.page = Some(1);
    }

    /// Advance the listings cursor if the last response reported more pages.
    pub fn next_page(&mut self) -> bool {
        match self.pagination {
            Some(p) if p.has_next() => {
                self.listings_query.page = Some(p.page + 1);
                true
            }
            _ => false,
        }
    }

    pub fn previous_page(&mut self) -> bool {
        match self.pagination {
            Some(p) if p.has_previous() => {
                self.listings_query.page = Some(p.page - 1);
                true
            }
            _ => false,
        }
    }

    /// Move the calendar cursor by whole months. No-op until a month is set.
    pub fn shift_calendar_month(&mut self, delta: i32) {
        let (Some(month), Some(year)) = (self.calendar_query.month, self.calendar_query.year) else {
            return;
        };
        let Ok(month) = i32::try_from(month) else {
            return;
        };
        let zero_based = year * 12 + (month - 1) + delta;
        self.calendar_query.year = Some(zero_based.div_euclid(12));
        self.calendar_query.month = u32::try_from(zero_based.rem_euclid(12) + 1).ok();
    }

    /// Heading for the calendar tab, e.g. `"2026-07"`.
    pub fn calendar_label(&self) -> String {
        match (self.calendar_query.year, self.calendar_query.month) {
            (Some(year), Some(month)) => format!("{year}-{month:02}"),
            _ => "Current month".to_owned(),
        }
    }

    pub fn record_error(&mut self, operation: &str, error: &str) {
        self.error = Some(load_failed_message(operation, error));
    }
}

fn load_failed_message(operation: &str, error: &str) -> String {
    format!("Failed to load {operation}: {error}")
}
