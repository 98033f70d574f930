//! WebhookBackend - POSTs the consultation form to an n8n-style webhook.
//!
//! # Example
//!
//! ```rust,no_run
//! use automation_consultant::backend::{BlueprintBackend, WebhookBackend};
//! use automation_consultant::blueprint::{ConsultationForm, FormField};
//! use automation_consultant::config::ConsultantConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConsultantConfig::new("https://hooks.example.com/webhook/consultant")?;
//! let backend = WebhookBackend::new(&config);
//!
//! let form = ConsultationForm::new()
//!     .with(FormField::Industry, "Retail")
//!     .with(FormField::ManualTask, "Re-key web orders into the ERP");
//! let raw = backend.submit(&form).await?;
//! # Ok(())
//! # }
//! ```

use super::{BlueprintBackend, TransportError};
use crate::blueprint::ConsultationForm;
use crate::config::ConsultantConfig;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, warn};
use url::Url;

const JSON_MIME: &str = "application/json";

/// Backend implementation for a JSON webhook endpoint.
#[derive(Debug, Clone)]
pub struct WebhookBackend {
    client: Client,
    endpoint: Url,
}

impl WebhookBackend {
    /// Creates a backend for the configured endpoint.
    ///
    /// The client carries no timeout of its own; the session applies
    /// `request_timeout` around every call.
    pub fn new(config: &ConsultantConfig) -> Self {
        Self::with_client(Client::new(), config.endpoint.clone())
    }

    /// Uses a caller-provided client (proxies, TLS settings, ...).
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl BlueprintBackend for WebhookBackend {
    async fn submit(&self, form: &ConsultationForm) -> Result<String, TransportError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, JSON_MIME)
            .header(ACCEPT, JSON_MIME)
            .json(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::TimedOut
                } else {
                    TransportError::Unreachable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                target = "automation_consultant::backend",
                status = status.as_u16(),
                endpoint = %self.endpoint,
                "webhook returned non-success status"
            );
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;
        debug!(
            target = "automation_consultant::backend",
            bytes = text.len(),
            "webhook reply received"
        );
        Ok(text)
    }

    fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_comes_from_config() {
        let config = ConsultantConfig::new("http://localhost:5678/webhook/consult").unwrap();
        let backend = WebhookBackend::new(&config);
        assert_eq!(backend.endpoint(), "http://localhost:5678/webhook/consult");
    }
}
