//! Host dashboard API schema and request paths.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the native `HostService` and the browser client build their URLs from
//! [`query::HostRequest`] and decode responses into [`types`], so the two
//! transports cannot drift apart.

pub mod query;
pub mod reviews;
pub mod types;

pub use query::{AnalyticsPeriod, AnalyticsQuery, BookingsQuery, CalendarQuery, HostRequest, ListingsQuery};
pub use reviews::ReviewSummary;
pub use types::{
    ApiEnvelope, Booking, BookingStatus, DashboardStats, Listing, ListingStatus, PaginatedEnvelope, Pagination,
    Review,
};
