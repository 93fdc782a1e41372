use super::*;

#[test]
fn stats_path_has_no_query() {
    assert_eq!(HostRequest::Stats.path(), "/host/stats");
}

#[test]
fn listings_path_omits_unset_params() {
    assert_eq!(HostRequest::Listings(ListingsQuery::default()).path(), "/host/listings");
    let q = ListingsQuery { limit: Some(5), ..ListingsQuery::default() };
    assert_eq!(HostRequest::Listings(q).path(), "/host/listings?limit=5");
}

#[test]
fn listings_path_keeps_param_order() {
    let q = ListingsQuery { page: Some(2), limit: Some(10), status: Some(ListingStatus::Active) };
    assert_eq!(HostRequest::Listings(q).path(), "/host/listings?page=2&limit=10&status=active");
}

#[test]
fn bookings_path_supports_limit() {
    assert_eq!(HostRequest::Bookings(BookingsQuery { limit: Some(3) }).path(), "/host/bookings?limit=3");
    assert_eq!(HostRequest::Bookings(BookingsQuery::default()).path(), "/host/bookings");
}

#[test]
fn calendar_path_encodes_listing_id() {
    let q = CalendarQuery { listing_id: Some("abc 12&x".to_owned()), month: Some(7), year: Some(2026) };
    assert_eq!(HostRequest::Calendar(q).path(), "/host/calendar?listingId=abc+12%26x&month=7&year=2026");
}

#[test]
fn analytics_path_uses_period_name() {
    let q = AnalyticsQuery { period: Some(AnalyticsPeriod::Year) };
    assert_eq!(HostRequest::Analytics(q).path(), "/host/analytics?period=year");
    assert_eq!(HostRequest::Analytics(AnalyticsQuery::default()).path(), "/host/analytics");
}

#[test]
fn analytics_period_parses_wire_names() {
    assert_eq!(AnalyticsPeriod::parse("week"), Some(AnalyticsPeriod::Week));
    assert_eq!(AnalyticsPeriod::parse("Week"), None);
    assert_eq!(AnalyticsPeriod::default(), AnalyticsPeriod::Month);
}

#[test]
fn operation_names_are_stable() {
    assert_eq!(HostRequest::Stats.operation(), "stats");
    assert_eq!(HostRequest::Calendar(CalendarQuery::default()).operation(), "calendar");
}
