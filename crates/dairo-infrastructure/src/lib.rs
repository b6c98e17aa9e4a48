pub mod config_service;
pub mod env;
pub mod paths;
pub mod secret_service;

pub use config_service::ConfigService;
pub use env::EnvLookup;
pub use paths::{DairoPaths, PathError};
pub use secret_service::SecretServiceImpl;
