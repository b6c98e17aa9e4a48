//! Secret service implementation.
//!
//! Resolves the OpenRouter credential from `secret.json`, falling back to the
//! `OPENROUTER_API_KEY` environment variable.

use crate::env::EnvLookup;
use crate::paths::DairoPaths;
use dairo_core::config::{OpenRouterSecret, SecretConfig};
use dairo_core::secret::SecretService;
use dairo_core::{DairoError, Result};
use std::path::PathBuf;

pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Client-facing message for an unreadable or malformed `secret.json`.
pub const SECRET_LOAD_FAILED_MESSAGE: &str = "Failed to load API credentials.";

/// File-then-environment secret lookup.
///
/// Nothing is cached: the file and the environment are read on every call so
/// that a key added or removed while the server runs takes effect on the next
/// request.
///
/// # Example
///
/// ```ignore
/// use dairo_infrastructure::{DairoPaths, SecretServiceImpl};
/// use dairo_core::secret::SecretService;
///
/// let service = SecretServiceImpl::new(DairoPaths::new(None)?);
/// let secrets = service.load_secrets().await?;
/// ```
#[derive(Clone, Debug)]
pub struct SecretServiceImpl {
    secret_file: PathBuf,
    env: EnvLookup,
}

impl SecretServiceImpl {
    pub fn new(paths: DairoPaths) -> Self {
        Self::with_env(paths, EnvLookup::process())
    }

    pub fn with_env(paths: DairoPaths, env: EnvLookup) -> Self {
        Self {
            secret_file: paths.secret_file(),
            env,
        }
    }

    fn load_file(&self) -> Result<Option<SecretConfig>> {
        let content = match std::fs::read_to_string(&self.secret_file) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                tracing::error!(
                    "[SecretService] Failed to read {}: {}",
                    self.secret_file.display(),
                    e
                );
                return Err(DairoError::config(SECRET_LOAD_FAILED_MESSAGE));
            }
        };

        // Parse errors mention the file but never its content
        let config = serde_json::from_str::<SecretConfig>(&content).map_err(|e| {
            tracing::error!(
                "[SecretService] Failed to parse {} (line {})",
                self.secret_file.display(),
                e.line()
            );
            DairoError::config(SECRET_LOAD_FAILED_MESSAGE)
        })?;
        Ok(Some(config))
    }
}

#[async_trait::async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig> {
        let file = self.load_file()?;
        if let Some(config) = &file
            && config.openrouter_credential().is_some()
        {
            return Ok(config.clone());
        }

        // A model pinned in the file still applies to the environment key
        let model_name = file
            .and_then(|config| config.openrouter)
            .and_then(|secret| secret.model_name);

        let openrouter = self.env.non_blank(API_KEY_ENV).map(|api_key| {
            tracing::debug!("[SecretService] Using {} from environment", API_KEY_ENV);
            OpenRouterSecret {
                api_key,
                model_name,
            }
        });

        Ok(SecretConfig { openrouter })
    }
}
