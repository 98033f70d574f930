//! Plain-text rendering of a blueprint for pasting into a ticket or chat.

use crate::blueprint::AutomationBlueprint;
use std::fmt::Write;

/// Renders a blueprint as plain text.
///
/// Workflow steps are numbered from 1 in execution order; the stack keeps the
/// generator's order. Empty actions and connection types are left out, and the
/// stack section is omitted when the stack is empty.
///
/// ```rust
/// use automation_consultant::blueprint::{AutomationBlueprint, WorkflowStep};
/// use automation_consultant::format::format_blueprint;
///
/// let blueprint = AutomationBlueprint {
///     industry: "Retail".into(),
///     pain_point: "manual entry".into(),
///     solution_title: "Auto-sync".into(),
///     solution_description: "syncs orders".into(),
///     workflow_steps: vec![WorkflowStep {
///         tool_name: "Gmail".into(),
///         action: String::new(),
///         description: "watch inbox".into(),
///     }],
///     saas_stack: vec![],
/// };
/// assert!(format_blueprint(&blueprint).contains("1. Gmail: watch inbox"));
/// ```
pub fn format_blueprint(blueprint: &AutomationBlueprint) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_blueprint(&mut out, blueprint);
    out
}

fn write_blueprint(out: &mut String, blueprint: &AutomationBlueprint) -> std::fmt::Result {
    writeln!(out, "AUTOMATION BLUEPRINT")?;
    writeln!(out, "Industry: {}", blueprint.industry)?;
    writeln!(out)?;
    writeln!(out, "PAIN POINT")?;
    writeln!(out, "{}", blueprint.pain_point)?;
    writeln!(out)?;
    writeln!(out, "SOLUTION: {}", blueprint.solution_title)?;
    writeln!(out, "{}", blueprint.solution_description)?;
    writeln!(out)?;
    writeln!(out, "WORKFLOW")?;
    for (i, step) in blueprint.workflow_steps.iter().enumerate() {
        write!(out, "{}. {}", i + 1, step.tool_name)?;
        if step.has_action() {
            write!(out, " [{}]", step.action)?;
        }
        writeln!(out, ": {}", step.description)?;
    }

    if !blueprint.saas_stack.is_empty() {
        writeln!(out)?;
        writeln!(out, "RECOMMENDED STACK")?;
        for tool in &blueprint.saas_stack {
            write!(out, "- {}", tool.tool_name)?;
            if tool.has_connection_type() {
                write!(out, " ({})", tool.connection_type)?;
            }
            writeln!(out, ": {}", tool.role)?;
        }
    }

    Ok(())
}
