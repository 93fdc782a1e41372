//! REST API helpers for communicating with the StayFinder API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is logged once with the operation name and returned to the
//! caller unchanged as a `String`. No retries, no caching.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use marketplace::ListingDraft;
#[cfg(any(test, feature = "hydrate"))]
use marketplace::host::HostRequest;
use marketplace::host::{
    AnalyticsQuery, ApiEnvelope, Booking, BookingsQuery, CalendarQuery, DashboardStats, Listing, ListingsQuery,
    PaginatedEnvelope,
};
use serde_json::Value;

/// Same-origin API root.
pub const API_BASE: &str = "/api";

#[cfg(any(test, feature = "hydrate"))]
fn host_url(request: &HostRequest) -> String {
    format!("{API_BASE}{}", request.path())
}

#[cfg(any(test, feature = "hydrate"))]
fn create_listing_url() -> String {
    format!("{API_BASE}/listings")
}

#[cfg(any(test, feature = "hydrate"))]
fn booking_url(booking_id: &str) -> String {
    format!("{API_BASE}/bookings/{booking_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(operation: &str, status: u16) -> String {
    format!("{operation} request failed: {status}")
}

#[cfg(feature = "hydrate")]
fn logged<T>(operation: &str, result: Result<T, String>) -> Result<T, String> {
    if let Err(e) = &result {
        leptos::logging::error!("{operation} failed: {e}");
    }
    result
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(operation: &str, url: &str) -> Result<T, String> {
    let result = async {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(operation, resp.status()));
        }
        resp.json::<T>().await.map_err(|e| e.to_string())
    }
    .await;
    logged(operation, result)
}

#[cfg(feature = "hydrate")]
async fn get_host<T: serde::de::DeserializeOwned>(request: HostRequest) -> Result<T, String> {
    get_json(request.operation(), &host_url(&request)).await
}

/// Fetch dashboard counters from `/api/host/stats`.
///
/// # Errors
///
/// Returns an error string if the request fails or the response is not a stats envelope.
pub async fn fetch_dashboard_stats() -> Result<ApiEnvelope<DashboardStats>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_host(HostRequest::Stats).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch one page of the host's listings from `/api/host/listings`.
///
/// # Errors
///
/// Returns an error string if the request fails or the response does not decode.
pub async fn fetch_listings(query: ListingsQuery) -> Result<PaginatedEnvelope<Listing>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_host(HostRequest::Listings(query)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}

/// Fetch recent bookings from `/api/host/bookings`.
///
/// # Errors
///
/// Returns an error string if the request fails or the response does not decode.
pub async fn fetch_bookings(query: BookingsQuery) -> Result<ApiEnvelope<Vec<Booking>>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_host(HostRequest::Bookings(query)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}

/// Fetch the availability calendar from `/api/host/calendar`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body is not JSON.
pub async fn fetch_calendar(query: CalendarQuery) -> Result<ApiEnvelope<Value>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_host(HostRequest::Calendar(query)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}

/// Fetch analytics from `/api/host/analytics`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body is not JSON.
pub async fn fetch_analytics(query: AnalyticsQuery) -> Result<ApiEnvelope<Value>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_host(HostRequest::Analytics(query)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}

/// Create a listing via `POST /api/listings` with the flattened draft as body.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects the listing.
pub async fn create_listing(draft: &ListingDraft) -> Result<ApiEnvelope<Value>, String> {
    #[cfg(feature = "hydrate")]
    {
        let result = async {
            let resp = gloo_net::http::Request::post(&create_listing_url())
                .json(draft)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(request_failed_message("create listing", resp.status()));
            }
            resp.json::<ApiEnvelope<Value>>().await.map_err(|e| e.to_string())
        }
        .await;
        logged("create listing", result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err("not available on server".to_owned())
    }
}

/// Fetch one booking from `/api/bookings/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the booking does not decode.
pub async fn fetch_booking(booking_id: &str) -> Result<Booking, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<ApiEnvelope<Booking>>("booking", &booking_url(booking_id))
            .await
            .map(|env| env.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = booking_id;
        Err("not available on server".to_owned())
    }
}
