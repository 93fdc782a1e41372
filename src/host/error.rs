//! Host API client errors.

/// Failure of one host API call. Returned to the caller unchanged after
/// being logged.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("host request failed: {0}")]
    Request(String),

    /// The API answered with a non-success HTTP status.
    #[error("host API returned status {status}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("host response decode failed: {0}")]
    Decode(String),
}

impl HostError {
    /// HTTP status, when the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
