use clap::Parser;

use super::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("stayfinder-host").chain(args.iter().copied()))
}

#[test]
fn stats_maps_to_stats_request() {
    let cli = parse(&["stats"]).unwrap();
    assert_eq!(cli.command.request(), HostRequest::Stats);
    assert!(cli.base_url.is_none());
}

#[test]
fn listings_flags_become_query() {
    let cli = parse(&["--base-url", "http://api.test/api", "listings", "--page", "2", "--status", "draft"]).unwrap();
    assert_eq!(cli.base_url.as_deref(), Some("http://api.test/api"));
    assert_eq!(
        cli.command.request(),
        HostRequest::Listings(ListingsQuery { page: Some(2), limit: None, status: Some(ListingStatus::Draft) })
    );
    assert_eq!(cli.command.request().path(), "/host/listings?page=2&status=draft");
}

#[test]
fn unknown_listing_status_is_rejected() {
    let err = parse(&["listings", "--status", "archived"]).unwrap_err();
    assert!(err.to_string().contains("archived"));
}

#[test]
fn calendar_month_must_be_in_range() {
    assert!(parse(&["calendar", "--month", "13"]).is_err());
    let cli = parse(&["calendar", "--listing-id", "l1", "--month", "12", "--year", "2026"]).unwrap();
    assert_eq!(cli.command.request().path(), "/host/calendar?listingId=l1&month=12&year=2026");
}

#[test]
fn analytics_period_parses_wire_names() {
    let cli = parse(&["analytics", "--period", "year"]).unwrap();
    assert_eq!(
        cli.command.request(),
        HostRequest::Analytics(AnalyticsQuery { period: Some(AnalyticsPeriod::Year) })
    );
    assert!(parse(&["analytics", "--period", "decade"]).is_err());
}

#[test]
fn bookings_without_limit_has_no_query() {
    let cli = parse(&["bookings"]).unwrap();
    assert_eq!(cli.command.request().path(), "/host/bookings");
}

#[test]
fn explicit_token_flag_is_kept() {
    let cli = parse(&["--token", "abc", "stats"]).unwrap();
    assert_eq!(cli.token.as_deref(), Some("abc"));
}

#[test]
fn subcommand_is_required() {
    assert!(parse(&[]).is_err());
}

#[tokio::test]
async fn run_returns_envelope_json() {
    use axum::Router;
    use axum::routing::get;

    let router = Router::new().route(
        "/api/host/stats",
        get(|| async { axum::Json(serde_json::json!({ "data": { "totalBookings": 7 } })) }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let config = crate::HostConfig::default().with_base_url(&format!("http://{addr}/api")).unwrap();
    let service = HostService::new(&config).unwrap();
    let value = run(&service, HostRequest::Stats).await.unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["data"]["totalBookings"], 7);
}
