// Re-export all items from the submodules
mod env_vars;
mod reporter_config;

// Re-export environment lookup
pub use env_vars::{
    Environment,
    ProcessEnvironment,
    resolve_api_key,
};

// Re-export run configuration
pub use reporter_config::{
    ReporterConfig,
    upload_timeout_from_secs,
};
