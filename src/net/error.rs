//! Failure taxonomy for REST calls.

/// Errors returned by every API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("network request failed: {0}")]
    Network(String),

    /// The backend answered with a non-success HTTP status.
    #[error("request failed with status {status}")]
    Status { status: u16 },

    /// The response body could not be decoded into the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// HTTP is only available in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// True when the backend rejected the bearer credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403 })
    }
}
