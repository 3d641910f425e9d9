//! The five-stage submission pipeline.
//!
//! validate path → request presigned upload → build archive → upload
//! archive → detect provider and collect metadata → submit report.
//!
//! Stages run strictly in order on the calling thread and the first failure
//! is returned as is. Nothing is rolled back: an archive already written
//! stays on disk when a later stage fails.

use std::path::Path;

use log::info;

use crate::ci;
use crate::cloud::{ReportSubmitter, UploadCoordinator};
use crate::config::{resolve_api_key, Environment, ReporterConfig};
use crate::error::Result;
use crate::models::Report;
use crate::security::validate_report_path;
use crate::utils::compress::create_report_archive;

/// Run the whole pipeline for `path`, returning the submitted report.
///
/// The API key is resolved after path validation but before any network
/// call, so a missing key never reaches the service.
pub fn run(config: &ReporterConfig, path: &Path, env: &dyn Environment) -> Result<Report> {
    let kind = validate_report_path(path, config.pattern)?;
    info!("Validated {} ({:?})", path.display(), kind);

    let api_key = resolve_api_key(env)?;

    let coordinator = UploadCoordinator::new(config)?;
    let descriptor = coordinator.request_presigned_upload(&api_key)?;

    let archive = create_report_archive(path, &config.archive_path)?;
    coordinator.upload(&archive, &descriptor)?;

    let provider = ci::detect(env)?;
    let report = Report {
        archive: descriptor.fields.key,
        provider: provider.name.to_string(),
        metadata: provider.collect(env),
    };

    ReportSubmitter::new(config)?.submit(&report, &api_key)?;

    Ok(report)
}
