//! Native client for the host dashboard API.
//!
//! ERROR HANDLING
//! ==============
//! Every operation logs a failure once with the operation name and then
//! returns the same `HostError` to the caller. There are no retries and no
//! caching; each call is one GET.

mod error;

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use marketplace::host::{
    AnalyticsQuery, ApiEnvelope, Booking, BookingsQuery, CalendarQuery, DashboardStats, HostRequest, Listing,
    ListingsQuery, PaginatedEnvelope,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::HostConfig;
pub use error::HostError;

/// Stateless handle for the five host read operations.
#[derive(Clone, Debug)]
pub struct HostService {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl HostService {
    /// Build a client from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::HttpClientBuild`] if the HTTP client cannot be created.
    pub fn new(config: &HostConfig) -> Result<Self, HostError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| HostError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone(), api_token: config.api_token.clone() })
    }

    /// `GET /host/stats`.
    ///
    /// # Errors
    ///
    /// Returns the logged [`HostError`] on transport, status, or decode failure.
    pub async fn get_dashboard_stats(&self) -> Result<ApiEnvelope<DashboardStats>, HostError> {
        self.get(HostRequest::Stats).await
    }

    /// `GET /host/listings?page&limit&status`.
    ///
    /// # Errors
    ///
    /// Returns the logged [`HostError`] on transport, status, or decode failure.
    pub async fn get_listings(&self, query: ListingsQuery) -> Result<PaginatedEnvelope<Listing>, HostError> {
        self.get(HostRequest::Listings(query)).await
    }

    /// `GET /host/bookings?limit`.
    ///
    /// # Errors
    ///
    /// Returns the logged [`HostError`] on transport, status, or decode failure.
    pub async fn get_bookings(&self, query: BookingsQuery) -> Result<ApiEnvelope<Vec<Booking>>, HostError> {
        self.get(HostRequest::Bookings(query)).await
    }

    /// `GET /host/calendar?listingId&month&year`. The payload is opaque.
    ///
    /// # Errors
    ///
    /// Returns the logged [`HostError`] on transport, status, or decode failure.
    pub async fn get_calendar(&self, query: CalendarQuery) -> Result<ApiEnvelope<Value>, HostError> {
        self.get(HostRequest::Calendar(query)).await
    }

    /// `GET /host/analytics?period`. The payload is opaque.
    ///
    /// # Errors
    ///
    /// Returns the logged [`HostError`] on transport, status, or decode failure.
    pub async fn get_analytics(&self, query: AnalyticsQuery) -> Result<ApiEnvelope<Value>, HostError> {
        self.get(HostRequest::Analytics(query)).await
    }

    async fn get<T: DeserializeOwned>(&self, request: HostRequest) -> Result<T, HostError> {
        let result = self.fetch(&request).await;
        if let Err(e) = &result {
            tracing::error!(operation = request.operation(), error = %e, "host API call failed");
        }
        result
    }

    async fn fetch<T: DeserializeOwned>(&self, request: &HostRequest) -> Result<T, HostError> {
        let url = format!("{}{}", self.base_url, request.path());
        tracing::debug!(operation = request.operation(), %url, "host API request");

        let mut builder = self.http.get(url);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }
        let response = builder
            .send()
            .await
            .map_err(|e| HostError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| HostError::Request(e.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(HostError::Status { status, body: text });
        }
        serde_json::from_str(&text).map_err(|e| HostError::Decode(e.to_string()))
    }
}
