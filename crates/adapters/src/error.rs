//! Errors raised while delivering a notification.
//!
//! These never reach the trigger's caller; the notifier logs them and drops
//! them at its boundary.

use thiserror::Error;
use userhooks_protocol::ProtocolError;

/// Result type alias for delivery operations.
pub type Result<T> = std::result::Result<T, NotifyError>;

/// Delivery failures, categorized for logging.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Network error: {reason}")]
    NetworkError { reason: String },

    #[error("Request timed out: {reason}")]
    Timeout { reason: String },

    #[error("Webhook relay responded with HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("Serialization error: {source}")]
    SerializationError { source: ProtocolError },

    #[error("Client configuration error: {reason}")]
    ConfigurationError { reason: String },
}

impl NotifyError {
    /// Whether the relay answered at all.
    pub fn is_http_status(&self) -> bool {
        matches!(self, NotifyError::HttpStatus { .. })
    }
}

impl From<ProtocolError> for NotifyError {
    fn from(err: ProtocolError) -> Self {
        NotifyError::SerializationError { source: err }
    }
}

impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NotifyError::Timeout {
                reason: err.to_string(),
            }
        } else if err.is_builder() {
            NotifyError::InvalidRequest {
                reason: err.to_string(),
            }
        } else if err.is_connect() {
            NotifyError::NetworkError {
                reason: format!("connection failed: {}", err),
            }
        } else {
            NotifyError::NetworkError {
                reason: err.to_string(),
            }
        }
    }
}
