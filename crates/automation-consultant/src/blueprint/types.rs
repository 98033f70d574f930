//! Typed automation blueprint, as decoded from the generator's reply.

use serde::{Deserialize, Deserializer, Serialize};

/// The automation plan returned by the workflow generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationBlueprint {
    pub industry: String,
    pub pain_point: String,
    pub solution_title: String,
    pub solution_description: String,
    /// Execution order.
    pub workflow_steps: Vec<WorkflowStep>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub saas_stack: Vec<StackTool>,
}

impl AutomationBlueprint {
    pub fn step_count(&self) -> usize {
        self.workflow_steps.len()
    }
}

/// One step of the proposed workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub tool_name: String,
    /// Empty when the generator gave no action label.
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    pub description: String,
}

impl WorkflowStep {
    pub fn has_action(&self) -> bool {
        !self.action.is_empty()
    }
}

/// A tool in the recommended SaaS stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackTool {
    pub tool_name: String,
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub connection_type: String,
}

impl StackTool {
    pub fn has_connection_type(&self) -> bool {
        !self.connection_type.is_empty()
    }

    /// True when the connection type mentions a native integration.
    pub fn is_native_integration(&self) -> bool {
        self.connection_type.to_lowercase().contains("native")
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
