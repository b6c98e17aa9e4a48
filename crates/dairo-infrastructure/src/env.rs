//! Environment variable access that tests can substitute.

use std::collections::HashMap;
use std::sync::Arc;

type LookupFn = dyn Fn(&str) -> Option<String> + Send + Sync;

/// Reads environment variables through a replaceable function.
///
/// Services take an `EnvLookup` instead of calling `std::env::var` directly,
/// so tests never have to mutate the process environment.
#[derive(Clone)]
pub struct EnvLookup {
    lookup: Arc<LookupFn>,
}

impl EnvLookup {
    /// Reads from the real process environment.
    pub fn process() -> Self {
        Self {
            lookup: Arc::new(|key| std::env::var(key).ok()),
        }
    }

    /// A fixed set of variables.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            lookup: Arc::new(move |key| vars.get(key).cloned()),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
    }

    /// The variable's value, treating unset and whitespace-only alike.
    pub fn non_blank(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

impl std::fmt::Debug for EnvLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvLookup").finish_non_exhaustive()
    }
}
