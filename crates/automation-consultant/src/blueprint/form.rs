//! The consultation form: the user's description of a manual process.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The six fields of a consultation form, named as they travel on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Industry,
    Role,
    ManualTask,
    Tools,
    Trigger,
    Goal,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Industry,
        FormField::Role,
        FormField::ManualTask,
        FormField::Tools,
        FormField::Trigger,
        FormField::Goal,
    ];

    /// Fields that must be non-empty (after trimming) before submission.
    pub const REQUIRED: [FormField; 2] = [FormField::Industry, FormField::ManualTask];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Industry => "industry",
            FormField::Role => "role",
            FormField::ManualTask => "manual_task",
            FormField::Tools => "tools",
            FormField::Trigger => "trigger",
            FormField::Goal => "goal",
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field name that does not belong to the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// User-supplied description of the process to automate.
///
/// Unfilled optional fields are empty strings, so the serialized body always
/// carries all six keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationForm {
    pub industry: String,
    pub role: String,
    pub manual_task: String,
    pub tools: String,
    pub trigger: String,
    pub goal: String,
}

impl ConsultationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Sets a field by its wire name, e.g. `"manual_task"`.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        let field: FormField = name.parse()?;
        self.set(field, value);
        Ok(())
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Industry => &self.industry,
            FormField::Role => &self.role,
            FormField::ManualTask => &self.manual_task,
            FormField::Tools => &self.tools,
            FormField::Trigger => &self.trigger,
            FormField::Goal => &self.goal,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Industry => &mut self.industry,
            FormField::Role => &mut self.role,
            FormField::ManualTask => &mut self.manual_task,
            FormField::Tools => &mut self.tools,
            FormField::Trigger => &mut self.trigger,
            FormField::Goal => &mut self.goal,
        }
    }

    /// Required fields that are empty after trimming, in form order.
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    pub fn is_submittable(&self) -> bool {
        self.missing_required().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
