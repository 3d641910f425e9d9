use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    API_TIMEOUT, DEFAULT_API_URL, DEFAULT_ARCHIVE_NAME, DEFAULT_UPLOAD_TIMEOUT_SECS,
    REPORTS_ENDPOINT, UPLOAD_ENDPOINT,
};
use crate::security::path_validator::ReportPattern;

/// Settings for one reporting run.
///
/// Built once from the command line and passed by reference to every stage;
/// nothing in the pipeline reads global state for these values.
#[derive(Debug, Clone)]
pub struct ReporterConfig {
    /// Flakebot API base URL without a trailing slash
    pub api_url: String,
    /// Timeout for the issuance and submission calls
    pub request_timeout: Duration,
    /// Timeout for the storage upload, `None` for unbounded
    pub upload_timeout: Option<Duration>,
    /// Where the archive is written
    pub archive_path: PathBuf,
    /// Pattern a file name must match to count as a test report
    pub pattern: ReportPattern,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: API_TIMEOUT,
            upload_timeout: upload_timeout_from_secs(DEFAULT_UPLOAD_TIMEOUT_SECS),
            archive_path: PathBuf::from(DEFAULT_ARCHIVE_NAME),
            pattern: ReportPattern::default(),
        }
    }
}

impl ReporterConfig {
    /// Default configuration pointed at a different API base URL.
    pub fn with_api_url(api_url: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Full URL of the presigned upload issuance endpoint.
    pub fn upload_endpoint(&self) -> String {
        format!("{}{}", self.api_url, UPLOAD_ENDPOINT)
    }

    /// Full URL of the report submission endpoint.
    pub fn reports_endpoint(&self) -> String {
        format!("{}{}", self.api_url, REPORTS_ENDPOINT)
    }
}

/// Map a seconds value from the command line to an upload timeout; 0 is unbounded.
pub fn upload_timeout_from_secs(secs: u64) -> Option<Duration> {
    if secs == 0 {
        None
    } else {
        Some(Duration::from_secs(secs))
    }
}
