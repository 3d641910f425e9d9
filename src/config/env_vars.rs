use std::collections::HashMap;

use crate::constants::API_KEY_ENV_VAR;
use crate::error::{ReporterError, Result};

/// Key-value view of the process environment.
///
/// The pipeline only ever reads the environment through this trait so that
/// tests can supply a plain map instead of mutating process state.
pub trait Environment {
    /// Value of `key`, or `None` when it is unset.
    fn var(&self, key: &str) -> Option<String>;

    /// Value of `key`, with unset variables reported as the empty string.
    fn var_or_empty(&self, key: &str) -> String {
        self.var(key).unwrap_or_default()
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    /// Non-unicode values are kept, with invalid sequences replaced by U+FFFD.
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Read the reporter API key, failing when it is unset or empty.
pub fn resolve_api_key(env: &dyn Environment) -> Result<String> {
    match env.var(API_KEY_ENV_VAR) {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(ReporterError::Config(format!(
            "Could not find environment variable, {}",
            API_KEY_ENV_VAR
        ))),
    }
}
