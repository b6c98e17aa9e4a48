//! Chat-completion provider integration.

pub mod openrouter_api_agent;
pub mod provider;

pub use openrouter_api_agent::OpenRouterApiAgent;
pub use provider::OpenRouterAgentProvider;
