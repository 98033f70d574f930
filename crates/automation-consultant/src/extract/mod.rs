//! Response sanitizing for workflow-generator replies.
//!
//! The backend is a natural-language system: its reply may wrap the JSON in
//! commentary, fence it in Markdown, or be an "accepted" acknowledgement with
//! no result at all. This module turns that text into a single JSON object
//! candidate without parsing it.
//!
//! # Examples
//!
//! ```rust
//! use automation_consultant::extract::ResponseSanitizer;
//!
//! let sanitizer = ResponseSanitizer::new();
//! let response = r#"Here's the plan: {"industry": "Retail"} Hope this helps!"#;
//! assert_eq!(sanitizer.sanitize(response).unwrap(), r#"{"industry": "Retail"}"#);
//! ```
//!
//! When a reply contains several top-level objects, the first balanced one is
//! taken:
//!
//! ```rust
//! use automation_consultant::extract::sanitize_response;
//!
//! let json = sanitize_response(r#"{"a": "{not a brace}"} {"b": 2}"#).unwrap();
//! assert_eq!(json, r#"{"a": "{not a brace}"}"#);
//! ```

pub mod core;
pub mod error;
pub mod extractors;

pub use self::core::{ContentExtractor, DEFAULT_ACK_MARKER, ExtractionStrategy, SanitizerConfig};
pub use self::error::SanitizeError;
pub use self::extractors::ResponseSanitizer;

/// Sanitizes a raw reply with the default marker and strategy chain.
pub fn sanitize_response(text: &str) -> Result<&str, SanitizeError> {
    ResponseSanitizer::new().sanitize(text)
}
