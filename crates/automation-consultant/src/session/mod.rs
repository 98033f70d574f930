//! Acquisition controller: drives one consultation session.
//!
//! The controller owns the [`SessionState`] and is the only thing that changes
//! it. A submission is split in three so the network call never borrows the
//! controller:
//!
//! 1. [`AcquisitionController::begin`] validates the form, moves to `InFlight`
//!    and hands out a [`PendingAcquisition`] tagged with an attempt number.
//! 2. [`PendingAcquisition::run`] performs the single request.
//! 3. [`AcquisitionController::resolve`] applies the outcome, but only if the
//!    session is still waiting on that attempt. Replies for an attempt that was
//!    abandoned by a reset are discarded.
//!
//! [`AcquisitionController::submit`] chains the three for callers that do not
//! need to reset while a request is outstanding.
//!
//! # Example
//!
//! ```rust,no_run
//! use automation_consultant::blueprint::FormField;
//! use automation_consultant::config::ConsultantConfig;
//! use automation_consultant::session::AcquisitionController;
//!
//! # #[cfg(feature = "http")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConsultantConfig::try_from_env()?;
//! let mut session = AcquisitionController::new(config);
//!
//! session.update_field(FormField::Industry, "Retail");
//! session.update_field(FormField::ManualTask, "Re-key web orders into the ERP");
//!
//! let state = session.submit().await;
//! if let Some(error) = state.error() {
//!     eprintln!("{}", error.user_message());
//! }
//! if let Some(text) = session.clipboard_text() {
//!     println!("{text}");
//! }
//! # Ok(())
//! # }
//! ```

mod state;

pub use state::SessionState;

use crate::backend::{BlueprintBackend, TransportError};
use crate::blueprint::{ConsultationForm, FormField};
use crate::config::ConsultantConfig;
use crate::error::ConsultError;
use crate::extract::ResponseSanitizer;
use crate::format::format_blueprint;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// What happened to an outcome handed to [`AcquisitionController::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The session moved to `Ready` or `Failed`.
    Applied,
    /// The session was no longer waiting on this attempt; nothing changed.
    Stale,
}

/// The raw result of one request, tagged with the attempt that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquisitionOutcome {
    pub attempt: u64,
    pub response: Result<String, TransportError>,
}

impl AcquisitionOutcome {
    pub fn new(attempt: u64, response: Result<String, TransportError>) -> Self {
        Self { attempt, response }
    }
}

/// A submitted form waiting to be sent.
///
/// Holds its own copy of the form and a handle on the backend, so it can be
/// awaited (or spawned) while the controller stays usable.
#[must_use = "the session stays in flight until the outcome is resolved or the session is reset"]
pub struct PendingAcquisition {
    attempt: u64,
    form: ConsultationForm,
    backend: Arc<dyn BlueprintBackend>,
    timeout: Option<Duration>,
}

impl PendingAcquisition {
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    pub fn form(&self) -> &ConsultationForm {
        &self.form
    }

    /// Sends the form once. A configured timeout turns into
    /// [`TransportError::TimedOut`].
    pub async fn run(self) -> AcquisitionOutcome {
        info!(
            target = "automation_consultant::session",
            attempt = self.attempt,
            endpoint = self.backend.endpoint(),
            "submitting consultation"
        );

        let call = self.backend.submit(&self.form);
        let response = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(response) => response,
                Err(_) => {
                    warn!(
                        target = "automation_consultant::session",
                        attempt = self.attempt,
                        timeout_ms = limit.as_millis() as u64,
                        "request timed out"
                    );
                    Err(TransportError::TimedOut)
                }
            },
            None => call.await,
        };

        AcquisitionOutcome::new(self.attempt, response)
    }
}

/// Owns the session state and the backend it talks to.
pub struct AcquisitionController {
    backend: Arc<dyn BlueprintBackend>,
    config: ConsultantConfig,
    sanitizer: ResponseSanitizer,
    state: SessionState,
    last_attempt: u64,
}

impl AcquisitionController {
    /// Creates a session posting to the configured webhook.
    #[cfg(feature = "http")]
    pub fn new(config: ConsultantConfig) -> Self {
        let backend = crate::backend::WebhookBackend::new(&config);
        Self::with_backend(Arc::new(backend), config)
    }

    /// Creates a session over any backend.
    pub fn with_backend(backend: Arc<dyn BlueprintBackend>, config: ConsultantConfig) -> Self {
        Self {
            backend,
            sanitizer: ResponseSanitizer::with_config(config.sanitizer.clone()),
            config,
            state: SessionState::default(),
            last_attempt: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &ConsultantConfig {
        &self.config
    }

    /// The form, while it is editable.
    pub fn form_mut(&mut self) -> Option<&mut ConsultationForm> {
        self.state.form_mut()
    }

    /// Sets one field. Returns `false` when the form is not editable.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) -> bool {
        match self.state.form_mut() {
            Some(form) => {
                form.set(field, value);
                true
            }
            None => false,
        }
    }

    /// Starts a submission.
    ///
    /// Returns `None` without touching the network when the form is invalid
    /// (the session moves to `Failed` with a validation error), when a request
    /// is already in flight, or when a blueprint is on display.
    pub fn begin(&mut self) -> Option<PendingAcquisition> {
        let form = match &self.state {
            SessionState::Idle { form } | SessionState::Failed { form, .. } => form.clone(),
            other => {
                warn!(
                    target = "automation_consultant::session",
                    state = other.name(),
                    "submission ignored"
                );
                return None;
            }
        };

        let missing = form.missing_required();
        if !missing.is_empty() {
            let error = ConsultError::Validation { missing };
            warn!(
                target = "automation_consultant::session",
                error = %error,
                "submission rejected"
            );
            self.state = SessionState::Failed { form, error };
            return None;
        }

        self.last_attempt += 1;
        let attempt = self.last_attempt;
        self.state = SessionState::InFlight {
            form: form.clone(),
            attempt,
        };

        Some(PendingAcquisition {
            attempt,
            form,
            backend: Arc::clone(&self.backend),
            timeout: self.config.request_timeout,
        })
    }

    /// Applies an outcome if the session is still waiting on its attempt.
    pub fn resolve(&mut self, outcome: AcquisitionOutcome) -> Resolution {
        match std::mem::take(&mut self.state) {
            SessionState::InFlight { form, attempt } if attempt == outcome.attempt => {
                self.state = self.settle(form, attempt, outcome.response);
                Resolution::Applied
            }
            other => {
                debug!(
                    target = "automation_consultant::session",
                    attempt = outcome.attempt,
                    state = other.name(),
                    "discarding stale outcome"
                );
                self.state = other;
                Resolution::Stale
            }
        }
    }

    /// Begins, runs and resolves one submission.
    pub async fn submit(&mut self) -> &SessionState {
        if let Some(pending) = self.begin() {
            let outcome = pending.run().await;
            self.resolve(outcome);
        }
        &self.state
    }

    /// Starts a new consultation: empty form, no blueprint, no error.
    ///
    /// An outstanding request is not cancelled; its reply will be discarded.
    pub fn reset(&mut self) {
        if let Some(attempt) = self.state.attempt() {
            info!(
                target = "automation_consultant::session",
                attempt, "abandoning in-flight attempt"
            );
        }
        self.state = SessionState::default();
    }

    /// Plain-text blueprint for the clipboard, while one is on display.
    pub fn clipboard_text(&self) -> Option<String> {
        self.state.blueprint().map(format_blueprint)
    }

    fn settle(
        &self,
        form: ConsultationForm,
        attempt: u64,
        response: Result<String, TransportError>,
    ) -> SessionState {
        let result = response
            .map_err(ConsultError::from)
            .and_then(|raw| crate::parse_blueprint_with(&self.sanitizer, &raw));

        match result {
            Ok(blueprint) => {
                info!(
                    target = "automation_consultant::session",
                    attempt,
                    steps = blueprint.step_count(),
                    tools = blueprint.saas_stack.len(),
                    "blueprint ready"
                );
                SessionState::Ready { blueprint }
            }
            Err(error) => {
                warn!(
                    target = "automation_consultant::session",
                    attempt,
                    kind = ?error.kind(),
                    status = error_status(&error),
                    error = %error,
                    "consultation failed"
                );
                SessionState::Failed { form, error }
            }
        }
    }
}

fn error_status(error: &ConsultError) -> Option<u16> {
    match error {
        ConsultError::Transport(transport) => transport.status_code(),
        _ => None,
    }
}
