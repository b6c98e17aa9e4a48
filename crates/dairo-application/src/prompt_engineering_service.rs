//! Prompt Engineering Service
//!
//! Turns a raw user prompt into an engineered one and asks the model to
//! explain the difference. Each operation is one outbound completion call.

use dairo_core::agent::{AgentProvider, CompletionAgent};
use dairo_core::engineering::{
    EngineerRequest, EngineerResponse, EngineeringOutcome, ExplainRequest, ExplainResponse,
    non_blank,
};
use dairo_core::persona::Persona;
use dairo_core::prompt::{render_engineer_prompt, render_explain_prompt};
use dairo_core::{DairoError, Result};
use std::sync::Arc;

pub const USER_PROMPT_REQUIRED: &str = "User prompt is required.";
pub const EXPLAIN_PROMPTS_REQUIRED: &str = "Original and engineered prompts are required.";
pub const EMPTY_ENGINEERED_PROMPT: &str = "Failed to get a valid response from the AI model.";
pub const EMPTY_EXPLANATION: &str = "Failed to get a valid explanation from the AI model.";

/// Stateless service shared by every request.
#[derive(Clone)]
pub struct PromptEngineeringService {
    provider: Arc<dyn AgentProvider>,
}

impl PromptEngineeringService {
    pub fn new(provider: Arc<dyn AgentProvider>) -> Self {
        Self { provider }
    }

    /// Fails with a config error when no provider credential is available.
    pub async fn ensure_configured(&self) -> Result<()> {
        self.provider.agent().await.map(|_| ())
    }

    /// Rewrites the user's prompt following prompt-engineering principles.
    ///
    /// The credential is checked before the request is validated, so an
    /// unconfigured server answers with a config error for any input.
    pub async fn engineer(&self, request: EngineerRequest) -> Result<EngineerResponse> {
        let agent = self.provider.agent().await?;

        let user_prompt = non_blank(request.user_prompt.as_deref())
            .ok_or_else(|| DairoError::invalid_input(USER_PROMPT_REQUIRED))?;
        let persona = Persona::resolve(request.persona.as_deref());

        tracing::info!(
            "[PromptEngineeringService] Engineering prompt ({} chars) as persona '{}' with {}",
            user_prompt.len(),
            persona.key(),
            agent.model()
        );

        let meta_prompt = render_engineer_prompt(persona.descriptor(), user_prompt)?;
        let engineered_prompt =
            complete_non_blank(agent.as_ref(), &meta_prompt, EMPTY_ENGINEERED_PROMPT).await?;

        Ok(EngineerResponse { engineered_prompt })
    }

    /// Explains why the engineered prompt improves on the original.
    pub async fn explain(&self, request: ExplainRequest) -> Result<ExplainResponse> {
        let agent = self.provider.agent().await?;

        let (Some(original_prompt), Some(engineered_prompt)) = (
            non_blank(request.original_prompt.as_deref()),
            non_blank(request.engineered_prompt.as_deref()),
        ) else {
            return Err(DairoError::invalid_input(EXPLAIN_PROMPTS_REQUIRED));
        };

        tracing::info!(
            "[PromptEngineeringService] Explaining engineered prompt ({} -> {} chars) with {}",
            original_prompt.len(),
            engineered_prompt.len(),
            agent.model()
        );

        let meta_prompt = render_explain_prompt(original_prompt, engineered_prompt)?;
        let explanation =
            complete_non_blank(agent.as_ref(), &meta_prompt, EMPTY_EXPLANATION).await?;

        Ok(ExplainResponse { explanation })
    }

    /// Runs engineer then explain; explain is only issued once engineer succeeded.
    pub async fn engineer_and_explain(&self, request: EngineerRequest) -> Result<EngineeringOutcome> {
        let original_prompt = request.user_prompt.clone().unwrap_or_default();
        let engineered = self.engineer(request).await?;
        let explained = self
            .explain(ExplainRequest::new(
                original_prompt.clone(),
                engineered.engineered_prompt.clone(),
            ))
            .await?;

        Ok(EngineeringOutcome {
            original_prompt,
            engineered_prompt: engineered.engineered_prompt,
            explanation: explained.explanation,
        })
    }
}

async fn complete_non_blank(
    agent: &dyn CompletionAgent,
    meta_prompt: &str,
    empty_message: &str,
) -> Result<String> {
    let reply = agent.complete(meta_prompt).await?;
    let reply = reply.trim();
    if reply.is_empty() {
        tracing::warn!("[PromptEngineeringService] Model returned no content");
        return Err(DairoError::upstream(empty_message));
    }
    Ok(reply.to_string())
}
