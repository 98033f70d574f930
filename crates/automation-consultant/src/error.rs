//! Error taxonomy for a consultation attempt.
//!
//! Every failure ends the attempt the same way: the session goes back to an
//! editable form with the error attached. `Display` carries the diagnostic
//! detail for logs; [`ConsultError::user_message`] is what a user sees.

use crate::backend::TransportError;
use crate::blueprint::{DecodeError, FormField};
use crate::extract::SanitizeError;
use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "Please fill in at least the Industry and Manual Task fields.";
pub const TRANSPORT_MESSAGE: &str =
    "Network Error: Could not reach the AI server. Please check your connection.";
pub const ACKNOWLEDGEMENT_MESSAGE: &str =
    "The Consultant AI is thinking but didn't return the blueprint immediately. Please try again.";
pub const INVALID_FORMAT_MESSAGE: &str =
    "The AI returned an invalid format. Please try submitting again.";

/// Errors that can end a consultation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsultError {
    /// Required form fields are empty; nothing was sent.
    #[error("Missing required fields: {}", field_list(.missing))]
    Validation { missing: Vec<FormField> },

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The backend accepted the job but returned no blueprint.
    #[error("Backend replied with an asynchronous acknowledgement ('{marker}') instead of a result")]
    AsyncAcknowledgement { marker: String },

    #[error("No JSON object found in response")]
    NoJsonFound,

    #[error("Malformed JSON at line {line}, column {column}: {message}")]
    MalformedJson {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Schema mismatch at '{field}': expected {expected}")]
    SchemaMismatch {
        field: String,
        expected: &'static str,
    },
}

/// Fieldless view of [`ConsultError`], handy for matching and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Transport,
    AsyncAcknowledgement,
    NoJsonFound,
    MalformedJson,
    SchemaMismatch,
}

impl ConsultError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConsultError::Validation { .. } => ErrorKind::Validation,
            ConsultError::Transport(_) => ErrorKind::Transport,
            ConsultError::AsyncAcknowledgement { .. } => ErrorKind::AsyncAcknowledgement,
            ConsultError::NoJsonFound => ErrorKind::NoJsonFound,
            ConsultError::MalformedJson { .. } => ErrorKind::MalformedJson,
            ConsultError::SchemaMismatch { .. } => ErrorKind::SchemaMismatch,
        }
    }

    /// True when the reply arrived but could not be turned into a blueprint.
    pub fn is_invalid_format(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::NoJsonFound | ErrorKind::MalformedJson | ErrorKind::SchemaMismatch
        )
    }

    /// The message to show the user.
    ///
    /// Format failures share one message since the user can only resubmit;
    /// transport failures never echo status or body.
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Validation => VALIDATION_MESSAGE,
            ErrorKind::Transport => TRANSPORT_MESSAGE,
            ErrorKind::AsyncAcknowledgement => ACKNOWLEDGEMENT_MESSAGE,
            ErrorKind::NoJsonFound | ErrorKind::MalformedJson | ErrorKind::SchemaMismatch => {
                INVALID_FORMAT_MESSAGE
            }
        }
    }
}

impl From<SanitizeError> for ConsultError {
    fn from(err: SanitizeError) -> Self {
        match err {
            SanitizeError::AsyncAcknowledgement { marker } => {
                ConsultError::AsyncAcknowledgement { marker }
            }
            SanitizeError::NoJsonFound => ConsultError::NoJsonFound,
        }
    }
}

impl From<DecodeError> for ConsultError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::MalformedJson {
                line,
                column,
                message,
            } => ConsultError::MalformedJson {
                line,
                column,
                message,
            },
            DecodeError::SchemaMismatch { field, expected } => {
                ConsultError::SchemaMismatch { field, expected }
            }
        }
    }
}

fn field_list(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(FormField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
