//! CI provider detection and run metadata collection.
//!
//! Providers are held in a fixed, priority-ordered table. Each one is
//! recognised by a sentinel environment variable set to exactly `"true"` and
//! describes its run through a fixed list of environment variables that are
//! copied verbatim into the report.
//!
//! ## Supported Providers
//!
//! | Name | Sentinel |
//! |---|---|
//! | `circle_ci` | `CIRCLECI` |
//! | `github_action` | `GITHUB_ACTIONS` |
//!
//! CircleCI is checked first, so a run where both sentinels are active is
//! reported as CircleCI.

use std::collections::BTreeMap;

use log::{debug, info};

use crate::config::Environment;
use crate::constants::SENTINEL_ACTIVE_VALUE;
use crate::error::{ReporterError, Result};

mod circleci;
mod github;

pub use circleci::CIRCLE_CI;
pub use github::GITHUB_ACTIONS;

/// Supported providers in detection order.
pub static PROVIDERS: &[CiProvider] = &[CIRCLE_CI, GITHUB_ACTIONS];

/// Static description of a CI provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CiProvider {
    /// Name sent as the report's `provider`
    pub name: &'static str,
    /// Human readable name for logs
    pub display_name: &'static str,
    /// Environment variable that must equal `"true"` on this provider
    pub sentinel: &'static str,
    /// Environment variables copied into the report metadata
    pub metadata_keys: &'static [&'static str],
}

impl CiProvider {
    /// Whether this provider's sentinel is active in `env`.
    pub fn is_active(&self, env: &dyn Environment) -> bool {
        env.var(self.sentinel).as_deref() == Some(SENTINEL_ACTIVE_VALUE)
    }

    /// Copy every metadata variable from `env`, unset ones as `""`.
    pub fn collect(&self, env: &dyn Environment) -> BTreeMap<String, String> {
        self.metadata_keys
            .iter()
            .map(|key| (key.to_string(), env.var_or_empty(key)))
            .collect()
    }
}

/// Pick the first provider in `providers` whose sentinel is active.
pub fn detect_from<'a>(providers: &'a [CiProvider], env: &dyn Environment) -> Result<&'a CiProvider> {
    for provider in providers {
        debug!("Checking {}={:?}", provider.sentinel, env.var(provider.sentinel));
        if provider.is_active(env) {
            info!("Detected CI provider: {}", provider.display_name);
            return Ok(provider);
        }
    }

    Err(ReporterError::UnsupportedProvider)
}

/// Detect the CI provider running this job.
///
/// # Errors
///
/// `UnsupportedProvider` when no supported provider's sentinel is active.
pub fn detect(env: &dyn Environment) -> Result<&'static CiProvider> {
    detect_from(PROVIDERS, env)
}
