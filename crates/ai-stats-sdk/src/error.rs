//! Error types for the AI Stats SDK.

use thiserror::Error;

/// Result type for SDK operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using the AI Stats SDK.
#[derive(Error, Debug)]
pub enum Error {
    /// The gateway answered with a status code of 400 or above.
    ///
    /// The body is kept verbatim and is not parsed.
    #[error("request failed with status {status}")]
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Transport-level failure reported by the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A path template placeholder had no value in the path parameters.
    #[error("operation {operation} is missing path parameter '{parameter}'")]
    MissingPathParameter {
        /// Operation whose template could not be resolved.
        operation: &'static str,
        /// Name of the missing placeholder.
        parameter: String,
    },

    /// A path parameter value cannot stand as a single path segment.
    ///
    /// Empty values and the dot segments `.` and `..` would change which
    /// route the request reaches, so they are refused before sending.
    #[error("operation {operation} has invalid value {value:?} for path parameter '{parameter}'")]
    InvalidPathParameter {
        /// Operation whose template could not be resolved.
        operation: &'static str,
        /// Name of the placeholder.
        parameter: String,
        /// Rejected value.
        value: String,
    },

    /// Invalid client setup (base URL, header name or value).
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue.
        message: String,
    },

    /// A record could not be encoded, or a response could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a request-failed error.
    pub fn request_failed(status: u16, body: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            body: body.into(),
        }
    }

    /// Get the HTTP status code if the gateway answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get the raw response body of a failed request.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::RequestFailed { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Check if the gateway rejected the request (4xx).
    pub fn is_client_error(&self) -> bool {
        matches!(self.status_code(), Some(400..=499))
    }

    /// Check if the gateway failed to serve the request (5xx and above).
    pub fn is_server_error(&self) -> bool {
        matches!(self.status_code(), Some(500..))
    }
}
