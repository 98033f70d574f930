//! 'automation-consultant' - turn a described manual process into an automation blueprint.
//!
//! A user describes a manual business process in a [`ConsultationForm`]; the
//! form is posted to an AI workflow generator (typically an n8n webhook) and
//! the reply is turned into a typed [`AutomationBlueprint`].
//!
//! The generator is a natural-language system, so the interesting part is the
//! last mile: replies may wrap the JSON in prose, fence it in Markdown, be
//! malformed, or be a bare "Workflow was started" acknowledgement. The crate
//! is organised around that pipeline:
//!
//! - [`extract`]: pulls one JSON object candidate out of the reply text.
//! - [`blueprint`]: the form, the blueprint types and the validating decoder.
//! - [`backend`]: the single outbound request.
//! - [`session`]: the state machine a presentation layer renders from.
//! - [`format`]: plain-text rendering for the clipboard.
//!
//! Rendering, clipboard access and retries are left to the caller.

pub mod backend;
pub mod blueprint;
pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod observability;
pub mod session;

pub use backend::{BlueprintBackend, TransportError};
#[cfg(feature = "http")]
pub use backend::WebhookBackend;
pub use blueprint::{AutomationBlueprint, ConsultationForm, FormField, StackTool, WorkflowStep};
pub use config::{ConfigError, ConsultantConfig};
pub use error::{ConsultError, ErrorKind};
pub use extract::{ResponseSanitizer, SanitizeError};
pub use format::format_blueprint;
pub use session::{AcquisitionController, AcquisitionOutcome, Resolution, SessionState};

/// Turns a raw generator reply into a blueprint.
///
/// Uses a [`ResponseSanitizer`] with the default acknowledgement marker and
/// extraction strategies, then validates and decodes the candidate.
///
/// ```rust
/// use automation_consultant::{parse_blueprint, ErrorKind};
///
/// let raw = r#"Here is your plan: {"industry":"Retail","pain_point":"manual entry",
///     "solution_title":"Auto-sync","solution_description":"syncs orders",
///     "workflow_steps":[{"tool_name":"Gmail","description":"watch inbox"}],
///     "saas_stack":[]} Hope this helps!"#;
/// let blueprint = parse_blueprint(raw).unwrap();
/// assert_eq!(blueprint.workflow_steps.len(), 1);
///
/// let err = parse_blueprint("Workflow was started").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::AsyncAcknowledgement);
/// ```
pub fn parse_blueprint(raw: &str) -> Result<AutomationBlueprint, ConsultError> {
    parse_blueprint_with(&ResponseSanitizer::new(), raw)
}

/// Like [`parse_blueprint`], with a caller-configured sanitizer.
pub fn parse_blueprint_with(
    sanitizer: &ResponseSanitizer,
    raw: &str,
) -> Result<AutomationBlueprint, ConsultError> {
    let candidate = sanitizer.sanitize(raw)?;
    Ok(blueprint::decode_blueprint(candidate)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROSE_WRAPPED_REPLY: &str = r#"Here is your plan: {"industry":"Retail","pain_point":"manual entry","solution_title":"Auto-sync","solution_description":"syncs orders","workflow_steps":[{"tool_name":"Gmail","description":"watch inbox"}],"saas_stack":[]} Hope this helps!"#;

    const BLUEPRINT_JSON: &str = r#"{"industry":"Retail","pain_point":"manual entry","solution_title":"Auto-sync","solution_description":"syncs orders","workflow_steps":[{"tool_name":"Gmail","description":"watch inbox"}]}"#;

    #[test]
    fn test_prose_wrapped_reply_decodes() {
        let blueprint = parse_blueprint(PROSE_WRAPPED_REPLY).unwrap();
        assert_eq!(blueprint.industry, "Retail");
        assert_eq!(blueprint.workflow_steps.len(), 1);
        assert_eq!(blueprint.workflow_steps[0].tool_name, "Gmail");
        assert!(blueprint.saas_stack.is_empty());
    }

    #[test]
    fn test_acknowledgement_reply() {
        let err = parse_blueprint("Workflow was started").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AsyncAcknowledgement);
    }

    #[test]
    fn test_incomplete_object_is_schema_mismatch() {
        let err = parse_blueprint(r#"{"industry":"Retail"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaMismatch);
    }

    #[test]
    fn test_prose_only_reply() {
        let err = parse_blueprint("I could not design a workflow for this.").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoJsonFound);
    }

    #[test]
    fn test_truncated_reply_is_malformed() {
        let raw = r#"Plan: {"industry": "Retail", "workflow_steps": [{"tool_name": "Gmail"}"#;
        let err = parse_blueprint(raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedJson);
    }

    #[test]
    fn test_braces_in_leading_prose() {
        let replies = [
            format!("Replace {{name}} with your value. {BLUEPRINT_JSON}"),
            format!("Use a {{ in the template. {BLUEPRINT_JSON}"),
        ];
        for raw in &replies {
            let blueprint = parse_blueprint(raw).unwrap();
            assert_eq!(blueprint.solution_title, "Auto-sync");
        }
    }

    #[test]
    fn test_fenced_reply() {
        let raw = "```json\n{\"industry\":\"Legal\",\"pain_point\":\"intake\",\"solution_title\":\"Intake bot\",\"solution_description\":\"triages\",\"workflow_steps\":[{\"tool_name\":\"Typeform\",\"description\":\"collect\"}]}\n```";
        let blueprint = parse_blueprint(raw).unwrap();
        assert_eq!(blueprint.solution_title, "Intake bot");
    }
}
