//! Agent abstractions over the chat-completion provider.

use crate::error::Result;
use std::sync::Arc;

/// A single-turn text completion backend.
#[async_trait::async_trait]
pub trait CompletionAgent: Send + Sync {
    /// Model identifier used for requests
    fn model(&self) -> &str;

    /// Sends `prompt` as one user message and returns the reply text.
    ///
    /// Implementations return an upstream error when the provider answers
    /// with a non-success status or without any content.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Hands out a ready-to-use agent for the current request.
///
/// Credentials are resolved on every call, so a provider without a configured
/// key fails with a config error no matter what the request contains.
#[async_trait::async_trait]
pub trait AgentProvider: Send + Sync {
    async fn agent(&self) -> Result<Arc<dyn CompletionAgent>>;
}
