use marketplace::host::{AnalyticsPeriod, ListingStatus};

use super::*;

#[test]
fn host_url_prefixes_api_root() {
    assert_eq!(host_url(&HostRequest::Stats), "/api/host/stats");
}

#[test]
fn host_url_keeps_only_present_params() {
    let request = HostRequest::Listings(ListingsQuery { page: Some(3), limit: None, status: Some(ListingStatus::Pending) });
    assert_eq!(host_url(&request), "/api/host/listings?page=3&status=pending");

    let request = HostRequest::Analytics(AnalyticsQuery { period: Some(AnalyticsPeriod::Year) });
    assert_eq!(host_url(&request), "/api/host/analytics?period=year");
}

#[test]
fn create_listing_url_targets_listings_collection() {
    assert_eq!(create_listing_url(), "/api/listings");
}

#[test]
fn booking_url_formats_expected_path() {
    assert_eq!(booking_url("bk_42"), "/api/bookings/bk_42");
}

#[test]
fn request_failed_message_formats_operation_and_status() {
    assert_eq!(request_failed_message("listings", 503), "listings request failed: 503");
}

