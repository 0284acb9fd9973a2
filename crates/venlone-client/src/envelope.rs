//! Response envelope handling for the V API.
//!
//! Every route answers with the same wrapper: `{status, message, data}`.
//! A `status` of `"error"` marks a request the API rejected during its
//! own validation; `message` then explains why. Any other response puts
//! the payload in `data`.

use log::{debug, error, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ClientError;

/// Response envelope wrapping every V API payload.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    /// Outcome marker, `"error"` when the API rejected the request.
    pub status: Option<String>,
    /// Human-readable explanation accompanying an error status.
    pub message: Option<String>,
    /// Payload of a successful response.
    pub data: Option<Value>,
}

impl ApiEnvelope {
    /// Unwrap the envelope into its payload.
    ///
    /// A missing `data` field on a successful response yields
    /// `Value::Null` rather than an error; some routes answer with an
    /// empty envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ValidationError`] carrying the server's
    /// message when the status marks the request as rejected.
    pub fn into_data(self) -> Result<Value, ClientError> {
        if self.status.as_deref() == Some("error") {
            let message = self.message.unwrap_or_default();
            error!("API rejected the request: {message}");
            return Err(ClientError::ValidationError(message));
        }
        Ok(self.data.unwrap_or(Value::Null))
    }
}

/// Parse a response body and unwrap its envelope.
///
/// # Errors
///
/// Returns [`ClientError::SerializationError`] when the body is not a
/// valid envelope, and [`ClientError::ValidationError`] when the API
/// flagged the request.
pub fn unwrap_body(body: &str) -> Result<Value, ClientError> {
    let envelope: ApiEnvelope =
        serde_json::from_str(body).map_err(ClientError::SerializationError)?;
    envelope.into_data()
}

/// Extract the most useful error detail from a non-success body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiEnvelope>(body) {
        Ok(envelope) => match envelope.message {
            Some(message) => {
                debug!("Parsed structured error response");
                message
            }
            None => body.to_string(),
        },
        Err(parse_err) => {
            debug!("Failed to parse error response as JSON: {parse_err}. Using raw text instead.");
            body.to_string()
        }
    }
}

/// Read a response to completion and unwrap its envelope.
pub(crate) async fn read_envelope(response: reqwest::Response) -> Result<Value, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.map_err(|e| {
            warn!("Failed to read error response body: {e}");
            ClientError::NetworkError(e)
        })?;
        let message = error_message(&error_text);
        error!(
            "API request failed with status {}: {}",
            status.as_u16(),
            message
        );
        return Err(ClientError::HttpError {
            status: status.as_u16(),
            message,
        });
    }

    let response_text = response.text().await?;
    debug!("Raw API response: {response_text}");
    unwrap_body(&response_text)
}
