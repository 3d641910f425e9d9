use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::cloud::client::create_http_client;
use crate::config::ReporterConfig;
use crate::constants::API_KEY_HEADER;
use crate::error::{ReporterError, Result};
use crate::models::Report;

/// Sends the final report correlating the uploaded archive with its CI run.
pub struct ReportSubmitter {
    reports_endpoint: String,
    client: Client,
}

impl ReportSubmitter {
    pub fn new(config: &ReporterConfig) -> Result<Self> {
        Ok(Self {
            reports_endpoint: config.reports_endpoint(),
            client: create_http_client(Some(config.request_timeout))?,
        })
    }

    /// POST `report` as JSON. Only a 201 response counts as success.
    pub fn submit(&self, report: &Report, api_key: &str) -> Result<()> {
        info!(
            "Submitting report for archive {} ({})",
            report.archive, report.provider
        );
        debug!("POST {} with {} metadata entries", self.reports_endpoint, report.metadata.len());

        let response = self
            .client
            .post(&self.reports_endpoint)
            .header(API_KEY_HEADER, api_key)
            .json(report)
            .send()?;

        let status = response.status();
        if status != StatusCode::CREATED {
            return Err(ReporterError::BadStatus { status });
        }

        info!("Report submitted");
        Ok(())
    }
}
