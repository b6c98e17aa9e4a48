//! Secret management service trait.
//!
//! Defines the interface for loading the provider credential.

use crate::config::SecretConfig;
use crate::error::Result;

/// Service for loading secret configuration.
///
/// # Security Note
///
/// Implementations must never log the loaded key or put it in error messages.
#[async_trait::async_trait]
pub trait SecretService: Send + Sync {
    /// Loads the current secret configuration.
    ///
    /// An absent credential is not an error here; callers decide whether a
    /// missing key is fatal.
    async fn load_secrets(&self) -> Result<SecretConfig>;
}
