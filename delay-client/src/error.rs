//! Error types for the prediction client

use delay_core::dto::job::EnvelopeError;
use serde::Deserialize;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while submitting or polling a prediction
///
/// Every variant is terminal for the poll loop: nothing is retried.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, timeout, body read)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Service returned a non-success status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the service
        message: String,
    },

    /// Body was not a well-formed status envelope
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Poll status outside {OK, WAIT}
    #[error("Unknown status in poll response: {0}")]
    UnknownStatus(String),

    /// Submission answered with a status other than OK
    #[error("Submission rejected with status {0}")]
    SubmissionRejected(String),

    /// No terminal response within the attempt budget
    #[error("No prediction after {attempts} poll attempt(s)")]
    PollingExhausted { attempts: u32 },

    #[error("Prediction request cancelled")]
    Cancelled,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Error body shape used by the service for failed requests
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl ClientError {
    /// Create an API error from status code and raw response body
    ///
    /// A JSON body of the form `{"error": "..."}` is unwrapped to its message.
    pub fn api_error(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|parsed| parsed.error)
            .unwrap_or(body);

        Self::ApiError { status, message }
    }

    /// Network or HTTP-level failure
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::RequestFailed(_) | Self::ApiError { .. })
    }

    /// The service answered, but not with something this client understands
    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::Protocol(_) | Self::UnknownStatus(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

impl From<EnvelopeError> for ClientError {
    fn from(err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::UnknownStatus(status) => Self::UnknownStatus(status),
            other => Self::Protocol(other.to_string()),
        }
    }
}
