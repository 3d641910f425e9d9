//! Flakebot service and object storage integration.
//!
//! Uploading a report takes three HTTP calls, all blocking:
//!
//! ```text
//! ┌──────────┐  POST /reports/upload/   ┌──────────────┐
//! │ Reporter │─────────────────────────▶│ Flakebot API │  200 {url, fields}
//! └────┬─────┘                          └──────────────┘
//!      │        POST {url} multipart    ┌──────────────┐
//!      ├───────────────────────────────▶│ Object store │  204
//!      │                                └──────────────┘
//!      │        POST /reports/          ┌──────────────┐
//!      └───────────────────────────────▶│ Flakebot API │  201
//!                                       └──────────────┘
//! ```
//!
//! ## Usage Example
//!
//! ```no_run
//! use flakebot_reporter::cloud::UploadCoordinator;
//! use flakebot_reporter::config::ReporterConfig;
//! use std::path::Path;
//!
//! # fn example() -> flakebot_reporter::error::Result<()> {
//! let config = ReporterConfig::default();
//! let coordinator = UploadCoordinator::new(&config)?;
//!
//! let descriptor = coordinator.request_presigned_upload("rk_live_...")?;
//! coordinator.upload(Path::new("report.zip"), &descriptor)?;
//! println!("Uploaded as {}", descriptor.fields.key);
//! # Ok(())
//! # }
//! ```

/// HTTP client construction
pub mod client;

/// Presigned URL issuance and multipart storage upload
pub mod upload;

/// Report submission
pub mod report;

pub use report::ReportSubmitter;
pub use upload::UploadCoordinator;
