//! Transport to the workflow generator.
//!
//! A backend performs exactly one request per call and hands back the raw
//! reply text on success. It does not retry, cache or interpret the body;
//! sanitizing and decoding happen in the session.

use crate::blueprint::ConsultationForm;
use async_trait::async_trait;
use thiserror::Error;

#[cfg(feature = "http")]
pub mod webhook;

#[cfg(feature = "http")]
pub use webhook::WebhookBackend;

/// Transport-level failures. None of them depend on the reply body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, connect, reset).
    #[error("Could not reach the server: {0}")]
    Unreachable(String),

    /// The server answered with a non-success status.
    #[error("Server Error ({status})")]
    Status { status: u16 },

    #[error("Request timed out")]
    TimedOut,

    /// The response body could not be read as text.
    #[error("Failed to read response body: {0}")]
    Body(String),
}

impl TransportError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TransportError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

/// Something that can turn a consultation form into a raw generator reply.
#[async_trait]
pub trait BlueprintBackend: Send + Sync {
    /// Sends the form once and returns the reply body on a success status.
    async fn submit(&self, form: &ConsultationForm) -> Result<String, TransportError>;

    /// Where requests go, for logging.
    fn endpoint(&self) -> &str;
}
