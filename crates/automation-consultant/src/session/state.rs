//! Session state for a consultation.
//!
//! Each variant carries only the data that is valid while it is active:
//! - `Idle` -> `InFlight` (valid form submitted)
//! - `Idle` -> `Failed` (validation error, nothing sent)
//! - `InFlight` -> `Ready` (reply decoded into a blueprint)
//! - `InFlight` -> `Failed` (any transport, sanitize or decode failure)
//! - `Failed` -> `InFlight` (resubmission)
//! - any state -> `Idle` with an empty form (reset)

use crate::blueprint::{AutomationBlueprint, ConsultationForm};
use crate::error::ConsultError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Editable form, no error.
    Idle { form: ConsultationForm },
    /// A request is outstanding; the form is locked.
    InFlight {
        form: ConsultationForm,
        attempt: u64,
    },
    /// A decoded blueprint is on display.
    Ready { blueprint: AutomationBlueprint },
    /// Editable form with an error banner. The form is what was submitted.
    Failed {
        form: ConsultationForm,
        error: ConsultError,
    },
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Idle {
            form: ConsultationForm::default(),
        }
    }
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle { .. } => "idle",
            SessionState::InFlight { .. } => "in_flight",
            SessionState::Ready { .. } => "ready",
            SessionState::Failed { .. } => "failed",
        }
    }

    /// The form, in every state that has one.
    pub fn form(&self) -> Option<&ConsultationForm> {
        match self {
            SessionState::Idle { form }
            | SessionState::InFlight { form, .. }
            | SessionState::Failed { form, .. } => Some(form),
            SessionState::Ready { .. } => None,
        }
    }

    pub(super) fn form_mut(&mut self) -> Option<&mut ConsultationForm> {
        match self {
            SessionState::Idle { form } | SessionState::Failed { form, .. } => Some(form),
            SessionState::InFlight { .. } | SessionState::Ready { .. } => None,
        }
    }

    pub fn blueprint(&self) -> Option<&AutomationBlueprint> {
        match self {
            SessionState::Ready { blueprint } => Some(blueprint),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ConsultError> {
        match self {
            SessionState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn attempt(&self) -> Option<u64> {
        match self {
            SessionState::InFlight { attempt, .. } => Some(*attempt),
            _ => None,
        }
    }

    /// Whether the form can be edited and submitted.
    pub fn is_editable(&self) -> bool {
        matches!(self, SessionState::Idle { .. } | SessionState::Failed { .. })
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, SessionState::InFlight { .. })
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, SessionState::Ready { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SessionState::Failed { .. })
    }
}
