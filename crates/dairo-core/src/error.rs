//! Error types for the Dairo application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned to callers when no provider credential is configured.
pub const MISSING_API_KEY_MESSAGE: &str = "OpenRouter API key not configured.";

/// A shared error type for the entire Dairo application.
///
/// Every failure a request can hit falls into one of these flat variants.
/// None of them are retried; the HTTP layer turns each into a JSON error body.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DairoError {
    /// Configuration error (missing credential, unreadable config or secret file)
    #[error("{0}")]
    Config(String),

    /// A required request field is missing or the body could not be parsed
    #[error("{0}")]
    InvalidInput(String),

    /// The LLM provider failed: non-success status, transport failure, or empty content.
    ///
    /// `status` is the provider's HTTP status when one was received.
    #[error("{message}")]
    Upstream { status: Option<u16>, message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DairoError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates the Config error used when the provider credential is absent
    pub fn missing_api_key() -> Self {
        Self::Config(MISSING_API_KEY_MESSAGE.to_string())
    }

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates an Upstream error carrying the provider's HTTP status
    pub fn upstream_status(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Creates an Upstream error for failures where no status was received
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            status: None,
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is an invalid input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this is an upstream error
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }

    /// Provider status attached to an upstream error, if any
    pub fn upstream_status_code(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => *status,
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<minijinja::Error> for DairoError {
    fn from(err: minijinja::Error) -> Self {
        Self::Internal(format!("Template rendering failed: {}", err))
    }
}

/// A type alias for `Result<T, DairoError>`.
pub type Result<T> = std::result::Result<T, DairoError>;
