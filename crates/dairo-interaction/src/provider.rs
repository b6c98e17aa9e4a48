//! Builds an OpenRouter agent per request from the current credential.

use crate::openrouter_api_agent::OpenRouterApiAgent;
use dairo_core::agent::{AgentProvider, CompletionAgent};
use dairo_core::config::ModelSettings;
use dairo_core::secret::SecretService;
use dairo_core::{DairoError, Result};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// [`AgentProvider`] backed by OpenRouter.
///
/// Holds one pooled HTTP client for the process; the API key is looked up on
/// every call through the [`SecretService`].
pub struct OpenRouterAgentProvider {
    secret_service: Arc<dyn SecretService>,
    settings: ModelSettings,
    client: Client,
}

impl OpenRouterAgentProvider {
    pub fn new(secret_service: Arc<dyn SecretService>, settings: ModelSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| DairoError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            secret_service,
            settings,
            client,
        })
    }

    pub fn settings(&self) -> &ModelSettings {
        &self.settings
    }
}

#[async_trait::async_trait]
impl AgentProvider for OpenRouterAgentProvider {
    async fn agent(&self) -> Result<Arc<dyn CompletionAgent>> {
        let secrets = self.secret_service.load_secrets().await?;
        let credential = secrets
            .openrouter_credential()
            .ok_or_else(DairoError::missing_api_key)?;

        let model = credential
            .model_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(self.settings.name.as_str());

        let agent = OpenRouterApiAgent::with_shared_client(
            self.client.clone(),
            credential.api_key.clone(),
            model,
        )
        .with_base_url(&self.settings.base_url)
        .with_max_tokens(self.settings.max_tokens);

        Ok(Arc::new(agent))
    }
}
