use std::fs;
use std::path::Path;

use log::{debug, info};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::cloud::client::create_http_client;
use crate::config::ReporterConfig;
use crate::constants::{API_KEY_HEADER, ARCHIVE_CONTENT_TYPE, ARCHIVE_FORM_FIELD};
use crate::error::{ReporterError, Result};
use crate::models::PresignedUpload;

/// Two-phase archive upload: presigned URL issuance, then a multipart POST
/// straight to object storage.
///
/// The issuance call is bounded by the configured request timeout. The
/// storage upload uses its own, separately configured bound. Neither call is
/// retried.
pub struct UploadCoordinator {
    upload_endpoint: String,
    api_client: Client,
    storage_client: Client,
}

impl UploadCoordinator {
    /// Create a coordinator for the service described by `config`.
    pub fn new(config: &ReporterConfig) -> Result<Self> {
        Ok(Self {
            upload_endpoint: config.upload_endpoint(),
            api_client: create_http_client(Some(config.request_timeout))?,
            storage_client: create_http_client(config.upload_timeout)?,
        })
    }

    /// Ask the reporting service for a presigned upload descriptor.
    ///
    /// # Errors
    ///
    /// * `Transport` - the request could not be sent or the body not read
    /// * `BadStatus` - the service answered with anything but 200
    /// * `Decode` - the body is not a valid descriptor
    pub fn request_presigned_upload(&self, api_key: &str) -> Result<PresignedUpload> {
        info!("Requesting presigned upload URL");
        debug!("POST {}", self.upload_endpoint);

        let response = self
            .api_client
            .post(&self.upload_endpoint)
            .header(API_KEY_HEADER, api_key)
            .body(Vec::new())
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ReporterError::BadStatus { status });
        }

        let body = response.bytes()?;
        let descriptor: PresignedUpload = serde_json::from_slice(&body)?;

        debug!("Received upload descriptor for key {}", descriptor.fields.key);
        Ok(descriptor)
    }

    /// Upload the archive at `archive_path` using a presigned descriptor.
    ///
    /// The descriptor's fields are sent verbatim as form fields, followed by
    /// the archive bytes in the `file` field under the archive's base name.
    ///
    /// # Errors
    ///
    /// * `Archive` - the archive cannot be read
    /// * `Transport` - the request could not be sent
    /// * `BadStatus` - storage answered with anything but 204
    pub fn upload(&self, archive_path: &Path, descriptor: &PresignedUpload) -> Result<()> {
        let bytes = fs::read(archive_path).map_err(|e| ReporterError::Archive {
            path: archive_path.to_path_buf(),
            source: e,
        })?;
        let file_name = archive_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        info!("Uploading {} ({} bytes)", archive_path.display(), bytes.len());
        debug!("POST {}", descriptor.url);

        let mut form = Form::new();
        for (name, value) in descriptor.fields.form_fields() {
            form = form.text(name, value.to_string());
        }
        let archive = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(ARCHIVE_CONTENT_TYPE)?;
        form = form.part(ARCHIVE_FORM_FIELD, archive);

        let response = self
            .storage_client
            .post(&descriptor.url)
            .multipart(form)
            .send()?;

        let status = response.status();
        if status != StatusCode::NO_CONTENT {
            return Err(ReporterError::BadStatus { status });
        }

        info!("Archive uploaded");
        Ok(())
    }
}
