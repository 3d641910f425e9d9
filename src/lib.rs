//! # flakebot-reporter
//!
//! Uploads the test reports of a CI job to Flakebot for flaky-test analysis.
//!
//! ## Overview
//!
//! The reporter is run once per CI job. It packages the job's test report
//! files into a ZIP archive, uploads the archive straight to object storage
//! through a presigned URL, detects which CI provider ran the job and
//! submits a report tying the archive to that run's metadata. It stops at
//! the first failing stage.
//!
//! ## Usage
//!
//! ```no_run
//! use flakebot_reporter::config::{ProcessEnvironment, ReporterConfig};
//! use flakebot_reporter::pipeline;
//! use std::path::Path;
//!
//! # fn main() -> flakebot_reporter::error::Result<()> {
//! let config = ReporterConfig::default();
//! let report = pipeline::run(&config, Path::new("test-results"), &ProcessEnvironment)?;
//!
//! println!("Submitted {} from {}", report.archive, report.provider);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`config`]: Run configuration and environment access
//! - [`security`]: Input path validation
//! - [`utils`]: Report archive creation
//! - [`cloud`]: Presigned upload and report submission
//! - [`ci`]: CI provider detection and metadata collection
//! - [`pipeline`]: The end-to-end submission sequence
//! - [`models`]: Wire data models
//! - [`error`]: Error types
//! - [`constants`]: Application-wide constants

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Core data models exchanged with the service
pub mod models;

/// Error taxonomy shared by all stages
pub mod error;

/// Report archive creation
pub mod utils;

/// Flakebot API and object storage integration
pub mod cloud;

/// Run configuration and environment access
pub mod config;

/// CI provider detection and metadata collection
pub mod ci;

/// End-to-end submission pipeline
pub mod pipeline;

/// Application constants and configuration values
pub mod constants;

/// Input path validation
pub mod security;
