//! Configuration for a consultation session.

use crate::extract::{ExtractionStrategy, SanitizerConfig};
use std::env;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const ENDPOINT_ENV: &str = "CONSULTANT_ENDPOINT";
pub const TIMEOUT_ENV: &str = "CONSULTANT_TIMEOUT_SECS";
pub const ACK_MARKER_ENV: &str = "CONSULTANT_ACK_MARKER";

const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Errors raised while building a [`ConsultantConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid endpoint URL '{value}': {source}")]
    InvalidEndpoint {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Endpoint must use http or https, got '{0}'")]
    UnsupportedScheme(String),

    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("Environment variable {var} has an invalid value: '{value}'")]
    InvalidEnv { var: &'static str, value: String },
}

/// Settings handed to the acquisition controller at construction.
///
/// # Examples
///
/// ```rust
/// use automation_consultant::config::ConsultantConfig;
/// use std::time::Duration;
///
/// let config = ConsultantConfig::new("https://hooks.example.com/webhook/consultant")
///     .unwrap()
///     .with_request_timeout(Some(Duration::from_secs(30)));
/// assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultantConfig {
    /// Webhook receiving the form.
    pub endpoint: Url,

    /// Upper bound on one request; `None` waits indefinitely.
    ///
    /// **Default:** 120 seconds
    pub request_timeout: Option<Duration>,

    /// Acknowledgement marker and extraction strategies for replies.
    pub sanitizer: SanitizerConfig,
}

impl ConsultantConfig {
    /// Creates a config for `endpoint` with default timeout and sanitizing.
    pub fn new(endpoint: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: parse_endpoint(endpoint)?,
            request_timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            sanitizer: SanitizerConfig::default(),
        })
    }

    /// Loads configuration from environment variables.
    ///
    /// - `CONSULTANT_ENDPOINT` (required)
    /// - `CONSULTANT_TIMEOUT_SECS` (optional, `0` disables the timeout)
    /// - `CONSULTANT_ACK_MARKER` (optional)
    pub fn try_from_env() -> Result<Self, ConfigError> {
        let endpoint = env::var(ENDPOINT_ENV).map_err(|_| ConfigError::MissingEnv(ENDPOINT_ENV))?;
        let mut config = Self::new(&endpoint)?;

        if let Ok(raw) = env::var(TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: TIMEOUT_ENV,
                value: raw.clone(),
            })?;
            config.request_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        if let Ok(marker) = env::var(ACK_MARKER_ENV) {
            config.sanitizer.ack_marker = marker;
        }

        Ok(config)
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_ack_marker(mut self, marker: impl Into<String>) -> Self {
        self.sanitizer.ack_marker = marker.into();
        self
    }

    pub fn with_strategies(mut self, strategies: Vec<ExtractionStrategy>) -> Self {
        self.sanitizer.extraction_strategies = strategies;
        self
    }

    pub fn with_sanitizer(mut self, sanitizer: SanitizerConfig) -> Self {
        self.sanitizer = sanitizer;
        self
    }
}

fn parse_endpoint(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim()).map_err(|source| ConfigError::InvalidEndpoint {
        value: value.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}
