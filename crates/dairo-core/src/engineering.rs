//! Request and response bodies for the engineer and explain operations.
//!
//! Field names follow the JSON contract used by the web UI (camelCase).
//! Required fields are modelled as `Option` so a missing field reaches the
//! service layer and is reported as invalid input instead of a parse failure.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineerRequest {
    #[serde(default)]
    pub user_prompt: Option<String>,
    /// Persona key; unknown values fall back to the default persona
    #[serde(default)]
    pub persona: Option<String>,
}

impl EngineerRequest {
    pub fn new(user_prompt: impl Into<String>) -> Self {
        Self {
            user_prompt: Some(user_prompt.into()),
            persona: None,
        }
    }

    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = Some(persona.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineerResponse {
    pub engineered_prompt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    #[serde(default)]
    pub original_prompt: Option<String>,
    #[serde(default)]
    pub engineered_prompt: Option<String>,
}

impl ExplainRequest {
    pub fn new(original_prompt: impl Into<String>, engineered_prompt: impl Into<String>) -> Self {
        Self {
            original_prompt: Some(original_prompt.into()),
            engineered_prompt: Some(engineered_prompt.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

/// Result of running both calls back to back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineeringOutcome {
    pub original_prompt: String,
    pub engineered_prompt: String,
    pub explanation: String,
}

/// Returns the field value when it holds something other than whitespace.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
