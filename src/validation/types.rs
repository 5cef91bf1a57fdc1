//! Raw input and normalized output of one submission

use super::error::ValidationErrors;
use serde::{Deserialize, Serialize};

/// Raw, unvalidated values of one submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub password: String,
    /// `None` when the form has no technology list
    pub techs: Option<Vec<TechEntryInput>>,
}

/// One technology row exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TechEntryInput {
    pub title: String,
    pub knowledge: String,
}

impl TechEntryInput {
    pub fn new(title: impl Into<String>, knowledge: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            knowledge: knowledge.into(),
        }
    }
}

/// A validated technology row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechEntry {
    pub title: String,
    pub knowledge: u8,
}

/// Validated and transformed payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedOutput {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub techs: Option<Vec<TechEntry>>,
}

impl NormalizedOutput {
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub type ValidationResult = Result<NormalizedOutput, ValidationErrors>;
