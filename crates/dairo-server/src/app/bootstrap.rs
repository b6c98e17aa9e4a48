//! Composition root: wires configuration, secrets and the provider together.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use dairo_application::PromptEngineeringService;
use dairo_core::config::AppConfig;
use dairo_core::secret::SecretService;
use dairo_infrastructure::{ConfigService, DairoPaths, SecretServiceImpl};
use dairo_interaction::OpenRouterAgentProvider;

use crate::app::AppState;

/// Resolves the config directory and loads `config.toml` (plus env overrides).
pub fn load_config(config_dir: Option<&Path>) -> Result<(DairoPaths, AppConfig)> {
    let paths = DairoPaths::new(config_dir).map_err(|e| anyhow!("{}", e))?;
    let config = ConfigService::new(paths.clone())
        .load()
        .context("Failed to load configuration")?;
    Ok((paths, config))
}

/// Builds the request-handling state from loaded configuration.
pub fn build_state(paths: &DairoPaths, config: &AppConfig) -> Result<AppState> {
    let secret_service: Arc<dyn SecretService> = Arc::new(SecretServiceImpl::new(paths.clone()));
    let provider = OpenRouterAgentProvider::new(secret_service, config.model.clone())
        .context("Failed to initialize OpenRouter provider")?;

    tracing::info!(
        "[Bootstrap] Model: {} via {}",
        provider.settings().name,
        provider.settings().base_url
    );

    let service = PromptEngineeringService::new(Arc::new(provider));
    Ok(AppState::new(service))
}
