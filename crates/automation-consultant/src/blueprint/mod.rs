//! Consultation input and the automation blueprint produced for it.

pub mod decode;
pub mod form;
pub mod types;

pub use decode::{DecodeError, REQUIRED_TEXT_FIELDS, decode_blueprint};
pub use form::{ConsultationForm, FormField, UnknownField};
pub use types::{AutomationBlueprint, StackTool, WorkflowStep};
