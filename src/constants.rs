//! Global constants for the reporter.
//!
//! This module centralizes all hardcoded values: service endpoints, header
//! names, environment variable names and timeouts.

use std::time::Duration;

// Service endpoints
/// Default Flakebot API base URL, overridable with `--api`
pub const DEFAULT_API_URL: &str = "https://api.flakebot.com";

/// Path of the presigned upload issuance endpoint
pub const UPLOAD_ENDPOINT: &str = "/reports/upload/";

/// Path of the report submission endpoint
pub const REPORTS_ENDPOINT: &str = "/reports/";

/// Header carrying the reporter API key
pub const API_KEY_HEADER: &str = "X-Reporter-Key";

// Environment
/// Environment variable holding the reporter API key
pub const API_KEY_ENV_VAR: &str = "FLAKEBOT_REPORTER_KEY";

/// Value a CI sentinel variable must hold exactly to be considered active
pub const SENTINEL_ACTIVE_VALUE: &str = "true";

// Timeout constants
/// Timeout for the issuance and submission calls in seconds
pub const API_TIMEOUT_SECS: u64 = 30;

/// Default timeout for the storage upload in seconds (0 disables the bound)
pub const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 600;

/// Timeout applied to the issuance and submission calls
pub const API_TIMEOUT: Duration = Duration::from_secs(API_TIMEOUT_SECS);

// Archive constants
/// Fixed archive name created in the working directory
pub const DEFAULT_ARCHIVE_NAME: &str = "report.zip";

/// Loose report-file pattern: "xml" preceded by any single character
pub const DEFAULT_REPORT_PATTERN: &str = ".xml";

/// Multipart field name for the archive payload
pub const ARCHIVE_FORM_FIELD: &str = "file";

/// Content type of the archive part in the multipart upload
pub const ARCHIVE_CONTENT_TYPE: &str = "application/octet-stream";

/// Read buffer size when streaming files into the archive (512KB)
pub const COMPRESSION_CHUNK_SIZE: usize = 512 * 1024;
