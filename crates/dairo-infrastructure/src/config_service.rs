//! Loads `config.toml` and applies environment overrides.

use crate::env::EnvLookup;
use crate::paths::DairoPaths;
use dairo_core::config::AppConfig;
use dairo_core::{DairoError, Result};

pub const BIND_ENV: &str = "DAIRO_BIND";
pub const MODEL_ENV: &str = "OPENROUTER_MODEL";
pub const BASE_URL_ENV: &str = "OPENROUTER_BASE_URL";

/// Service for loading application configuration.
///
/// A missing `config.toml` is not an error: the defaults apply. A file that
/// exists but does not parse is reported as a config error.
pub struct ConfigService {
    paths: DairoPaths,
    env: EnvLookup,
}

impl ConfigService {
    pub fn new(paths: DairoPaths) -> Self {
        Self::with_env(paths, EnvLookup::process())
    }

    pub fn with_env(paths: DairoPaths, env: EnvLookup) -> Self {
        Self { paths, env }
    }

    pub fn paths(&self) -> &DairoPaths {
        &self.paths
    }

    pub fn load(&self) -> Result<AppConfig> {
        let config_file = self.paths.config_file();

        let mut config = if config_file.exists() {
            let content = std::fs::read_to_string(&config_file).map_err(|e| {
                DairoError::config(format!(
                    "Failed to read configuration file at {}: {}",
                    config_file.display(),
                    e
                ))
            })?;
            toml::from_str::<AppConfig>(&content).map_err(|e| {
                DairoError::config(format!(
                    "Failed to parse configuration file at {}: {}",
                    config_file.display(),
                    e
                ))
            })?
        } else {
            tracing::debug!(
                "[ConfigService] No config file at {}, using defaults",
                config_file.display()
            );
            AppConfig::default()
        };

        self.apply_env_overrides(&mut config);
        Ok(config)
    }

    fn apply_env_overrides(&self, config: &mut AppConfig) {
        if let Some(bind) = self.env.non_blank(BIND_ENV) {
            config.server.bind = bind;
        }
        if let Some(model) = self.env.non_blank(MODEL_ENV) {
            config.model.name = model;
        }
        if let Some(base_url) = self.env.non_blank(BASE_URL_ENV) {
            config.model.base_url = base_url;
        }
    }
}
