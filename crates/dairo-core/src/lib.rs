pub mod agent;
pub mod config;
pub mod engineering;
pub mod error;
pub mod persona;
pub mod prompt;
pub mod secret;

// Re-export common error type
pub use error::{DairoError, Result};
