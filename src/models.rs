use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Presigned upload descriptor returned by the issuance endpoint.
///
/// `fields` must be forwarded verbatim as multipart form fields on the
/// storage upload. `fields.key` later becomes the report's `archive`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PresignedUpload {
    pub url: String,
    pub fields: PresignedFields,
}

/// Form fields scoping the presigned upload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PresignedFields {
    pub key: String,
    #[serde(rename = "AWSAccessKeyId")]
    pub aws_access_key_id: String,
    pub policy: String,
    pub signature: String,
}

impl PresignedFields {
    /// Fields in the order they are written to the multipart form.
    pub fn form_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("key", self.key.as_str()),
            ("AWSAccessKeyId", self.aws_access_key_id.as_str()),
            ("policy", self.policy.as_str()),
            ("signature", self.signature.as_str()),
        ]
    }
}

/// Record correlating an uploaded archive with the CI run that produced it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Correlation key from the presigned upload used in this run
    pub archive: String,
    pub provider: String,
    /// Environment variable name to value; unset variables map to ""
    pub metadata: BTreeMap<String, String>,
}
