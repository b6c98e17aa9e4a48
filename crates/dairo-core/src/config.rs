//! Configuration models.
//!
//! `AppConfig` mirrors `config.toml`; `SecretConfig` mirrors `secret.json`.
//! Every section is optional in the file and falls back to its defaults.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat-v3-0324:free";
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub model: ModelSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Socket address the HTTP server listens on
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// Settings for the chat-completion provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Model identifier sent with every completion request
    pub name: String,
    /// Provider API root; `/chat/completions` is appended
    pub base_url: String,
    pub timeout_secs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_tokens: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is not set
    pub level: String,
    /// Also write a daily rolling log file under the config directory
    pub file: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: false,
        }
    }
}

/// Root structure of `secret.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub openrouter: Option<OpenRouterSecret>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenRouterSecret {
    /// May be absent when the file only pins a model; the key then comes from the environment
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

impl SecretConfig {
    /// The OpenRouter credential, if one with a non-blank key is present.
    pub fn openrouter_credential(&self) -> Option<&OpenRouterSecret> {
        self.openrouter
            .as_ref()
            .filter(|secret| !secret.api_key.trim().is_empty())
    }
}
