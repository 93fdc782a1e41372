use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::extract::RawQuery;
use axum::routing::get;
use marketplace::host::{AnalyticsPeriod, BookingStatus, ListingStatus};
use serde_json::json;

use super::*;

async fn spawn_mock(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api")
}

fn service_for(base_url: &str) -> HostService {
    let config = HostConfig::default().with_base_url(base_url).unwrap();
    HostService::new(&config).unwrap()
}

#[tokio::test]
async fn stats_decodes_envelope() {
    let router = Router::new().route(
        "/api/host/stats",
        get(|| async {
            axum::Json(json!({
                "success": true,
                "data": { "totalListings": 3, "activeListings": 2, "averageRating": 4.8 }
            }))
        }),
    );
    let service = service_for(&spawn_mock(router).await);

    let env = service.get_dashboard_stats().await.unwrap();
    assert!(env.success);
    assert_eq!(env.data.total_listings, 3);
    assert_eq!(env.data.active_listings, 2);
    assert!(env.data.recent_reviews.is_empty());
}

#[tokio::test]
async fn listings_sends_only_provided_params() {
    let seen = Arc::new(Mutex::new(Vec::<Option<String>>::new()));
    let seen_route = seen.clone();
    let router = Router::new().route(
        "/api/host/listings",
        get(move |RawQuery(query): RawQuery| {
            let seen = seen_route.clone();
            async move {
                seen.lock().unwrap().push(query);
                axum::Json(json!({
                    "success": true,
                    "data": [{ "id": "l1", "title": "Loft", "status": "active", "price": 99.0 }],
                    "pagination": { "page": 2, "limit": 1, "total": 4, "totalPages": 4 }
                }))
            }
        }),
    );
    let service = service_for(&spawn_mock(router).await);

    let page = service
        .get_listings(ListingsQuery { page: Some(2), limit: Some(1), status: Some(ListingStatus::Active) })
        .await
        .unwrap();
    assert_eq!(page.data[0].id, "l1");
    assert_eq!(page.pagination.page, 2);

    service.get_listings(ListingsQuery::default()).await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].as_deref(), Some("page=2&limit=1&status=active"));
    assert_eq!(seen[1], None);
}

#[tokio::test]
async fn bookings_decode_typed_rows() {
    let router = Router::new().route(
        "/api/host/bookings",
        get(|RawQuery(query): RawQuery| async move {
            assert_eq!(query.as_deref(), Some("limit=5"));
            axum::Json(json!({
                "success": true,
                "data": [{
                    "id": "b1", "listingId": "l1", "checkIn": "2026-11-02", "checkOut": "2026-11-06",
                    "guests": 3, "totalPrice": 610.0, "status": "pending"
                }]
            }))
        }),
    );
    let service = service_for(&spawn_mock(router).await);

    let env = service.get_bookings(BookingsQuery { limit: Some(5) }).await.unwrap();
    assert_eq!(env.data.len(), 1);
    assert_eq!(env.data[0].status, BookingStatus::Pending);
    assert_eq!(env.data[0].nights(), 4);
}

#[tokio::test]
async fn bookings_with_timestamp_dates_decode() {
    let router = Router::new().route(
        "/api/host/bookings",
        get(|| async {
            axum::Json(json!({
                "success": true,
                "data": [{
                    "id": "b2", "listingId": "l1",
                    "checkIn": "2026-07-01T00:00:00.000Z", "checkOut": "2026-07-04T00:00:00.000Z",
                    "guests": 2, "totalPrice": 300.0, "status": "confirmed"
                }]
            }))
        }),
    );
    let service = service_for(&spawn_mock(router).await);

    let env = service.get_bookings(BookingsQuery::default()).await.unwrap();
    assert_eq!(env.data[0].id, "b2");
    assert_eq!(env.data[0].nights(), 3);
    assert_eq!(env.data[0].check_in.to_string(), "2026-07-01");
}

#[tokio::test]
async fn calendar_and_analytics_pass_through_opaque_payloads() {
    let router = Router::new()
        .route(
            "/api/host/calendar",
            get(|RawQuery(query): RawQuery| async move {
                axum::Json(json!({ "success": true, "data": { "query": query, "days": [1, 2] } }))
            }),
        )
        .route(
            "/api/host/analytics",
            get(|RawQuery(query): RawQuery| async move {
                axum::Json(json!({ "success": true, "data": { "query": query } }))
            }),
        );
    let service = service_for(&spawn_mock(router).await);

    let calendar = service
        .get_calendar(CalendarQuery { listing_id: Some("l9".to_owned()), month: Some(3), year: Some(2027) })
        .await
        .unwrap();
    assert_eq!(calendar.data["query"], "listingId=l9&month=3&year=2027");
    assert_eq!(calendar.data["days"], json!([1, 2]));

    let analytics = service
        .get_analytics(AnalyticsQuery { period: Some(AnalyticsPeriod::Week) })
        .await
        .unwrap();
    assert_eq!(analytics.data["query"], "period=week");
}

#[tokio::test]
async fn bearer_token_is_attached_when_configured() {
    let router = Router::new().route(
        "/api/host/analytics",
        get(|headers: HeaderMap| async move {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_owned();
            axum::Json(json!({ "success": true, "data": { "auth": auth } }))
        }),
    );
    let base = spawn_mock(router).await;
    let mut config = HostConfig::default().with_base_url(&base).unwrap();
    config.api_token = Some("secret-token".to_owned());
    let service = HostService::new(&config).unwrap();

    let env = service.get_analytics(AnalyticsQuery::default()).await.unwrap();
    assert_eq!(env.data["auth"], "Bearer secret-token");

    let anonymous = service_for(&base).get_analytics(AnalyticsQuery::default()).await.unwrap();
    assert_eq!(anonymous.data["auth"], "");
}

#[tokio::test]
async fn non_success_status_is_returned_with_body() {
    let router = Router::new().route(
        "/api/host/stats",
        get(|| async { (StatusCode::UNAUTHORIZED, "token expired") }),
    );
    let service = service_for(&spawn_mock(router).await);

    let err = service.get_dashboard_stats().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    match err {
        HostError::Status { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "token expired");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let router = Router::new().route("/api/host/stats", get(|| async { "<html>oops</html>" }));
    let service = service_for(&spawn_mock(router).await);

    let err = service.get_dashboard_stats().await.unwrap_err();
    assert!(matches!(err, HostError::Decode(_)));
    assert!(err.status().is_none());
}

#[tokio::test]
async fn unreachable_server_is_a_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let service = service_for(&format!("http://{addr}/api"));

    let err = service.get_bookings(BookingsQuery::default()).await.unwrap_err();
    assert!(matches!(err, HostError::Request(_)));
}
