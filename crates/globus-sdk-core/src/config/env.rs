//! Environment variable overrides

use std::collections::HashMap;
use std::env;

/// Prefix of every override variable: `GLOBUS_SDK_<OPTION>`
pub const ENV_PREFIX: &str = "GLOBUS_SDK_";

/// Name of the environment variable that overrides `option`.
///
/// Only the option is encoded, never the section or environment, so
/// `auth_token` maps to `GLOBUS_SDK_AUTH_TOKEN` everywhere.
pub fn env_var_name(option: &str) -> String {
    format!("{}{}", ENV_PREFIX, option.to_uppercase())
}

/// Read access to environment variables
///
/// Implementations:
/// - `ProcessEnv`: the real process environment
/// - `MemoryEnv`: a fixed map, for tests and embedding
pub trait EnvReader: Send + Sync {
    /// Value of `name`, or `None` if it is not set.
    ///
    /// A variable that is set to the empty string is present.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvReader for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

/// Fixed set of variables
#[derive(Debug, Clone, Default)]
pub struct MemoryEnv {
    vars: HashMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl EnvReader for MemoryEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
