//! Error types for the client library.

use thiserror::Error;

/// Errors that can occur when talking to the V API.
///
/// This enum covers all error conditions from network failures to
/// validation errors raised inside an otherwise successful response
/// envelope.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Network or HTTP request failure.
    ///
    /// Indicates issues like DNS resolution, connection failures, or socket errors.
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Non-success HTTP status from the API.
    ///
    /// The server answered outside the 2xx range. The message carries
    /// whatever detail could be extracted from the response body.
    #[error("HTTP {status} from the V API: {message}")]
    HttpError {
        /// HTTP status code returned by the server.
        status: u16,
        /// Error detail extracted from the response body.
        message: String,
    },

    /// JSON serialization or deserialization error.
    ///
    /// Occurs when request/response JSON cannot be properly encoded or decoded.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Validation failure reported inside the response envelope.
    ///
    /// The HTTP exchange succeeded but the API flagged the request as
    /// invalid. The message is the server's own explanation.
    #[error("enl.one API validation error: {0}")]
    ValidationError(String),

    /// Malformed request.
    ///
    /// The request structure is invalid or missing required parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Client configuration issue.
    ///
    /// Invalid base URL, missing required fields, or incompatible settings.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// No usable credentials were supplied.
    ///
    /// Clients need an API key or an OAuth session token to authenticate.
    #[error("You need to either provide an Apikey or an OAuth session token")]
    MissingCredentials,
}

impl ClientError {
    /// Check if this is a validation error raised by the API itself.
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this error happened in transit rather than in the API's
    /// own validation.
    ///
    /// Returns `true` for network failures, non-success HTTP statuses, and
    /// undecodable response bodies.
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::NetworkError(_) | Self::HttpError { .. } | Self::SerializationError(_)
        )
    }

    /// Get the server's explanation if this is a validation error.
    pub fn validation_message(&self) -> Option<&str> {
        match self {
            Self::ValidationError(message) => Some(message.as_str()),
            _ => None,
        }
    }
}
