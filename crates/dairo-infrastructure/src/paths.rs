//! Unified path management for dairo configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/dairo/             # Config directory
//! ├── config.toml              # Server, model and logging settings
//! ├── secret.json              # API keys
//! └── logs/                    # Application logs
//!     └── dairo.log.YYYY-MM-DD
//! ```

use std::path::{Path, PathBuf};

const APP_DIR: &str = "dairo";
const CONFIG_FILE: &str = "config.toml";
const SECRET_FILE: &str = "secret.json";
const LOG_DIR: &str = "logs";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolves every file dairo reads from disk.
///
/// All paths hang off a single base directory: either the one given
/// explicitly (CLI `--config-dir`, tests) or the platform config dir.
#[derive(Debug, Clone)]
pub struct DairoPaths {
    base_dir: PathBuf,
}

impl DairoPaths {
    /// Creates paths rooted at `base_dir`, or at the platform default when `None`.
    pub fn new(base_dir: Option<&Path>) -> Result<Self, PathError> {
        let base_dir = match base_dir {
            Some(dir) => dir.to_path_buf(),
            None => dirs::config_dir()
                .ok_or(PathError::ConfigDirNotFound)?
                .join(APP_DIR),
        };
        Ok(Self { base_dir })
    }

    pub fn config_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE)
    }

    pub fn secret_file(&self) -> PathBuf {
        self.base_dir.join(SECRET_FILE)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join(LOG_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_dir() {
        let paths = DairoPaths::new(Some(Path::new("/tmp/dairo-test"))).unwrap();
        assert_eq!(paths.config_dir(), Path::new("/tmp/dairo-test"));
        assert_eq!(paths.config_file(), Path::new("/tmp/dairo-test/config.toml"));
        assert_eq!(paths.secret_file(), Path::new("/tmp/dairo-test/secret.json"));
        assert_eq!(paths.log_dir(), Path::new("/tmp/dairo-test/logs"));
    }

    #[test]
    fn test_default_base_dir_ends_with_app_dir() {
        // Skipped on hosts without a resolvable config dir
        if let Ok(paths) = DairoPaths::new(None) {
            assert!(paths.config_dir().ends_with(APP_DIR));
        }
    }
}
