use clap::Parser;
use std::path::PathBuf;

use crate::config::{upload_timeout_from_secs, ReporterConfig};
use crate::constants::{DEFAULT_API_URL, DEFAULT_ARCHIVE_NAME, DEFAULT_UPLOAD_TIMEOUT_SECS};
use crate::security::ReportPattern;

/// Command-line arguments for the reporter.
///
/// The reporter sends your test reports to Flakebot for processing and
/// analysis. The API key is read from `FLAKEBOT_REPORTER_KEY`.
#[derive(Parser, Debug)]
#[clap(
    name = "reporter",
    about = "Reporting tool for Flakebot",
    long_about = "The reporter command sends your test reports to Flakebot for processing and analysis."
)]
pub struct Args {
    /// Test report file or directory of test reports
    pub path: PathBuf,

    /// Override the Flakebot API Url
    #[clap(short, long, default_value = DEFAULT_API_URL)]
    pub api: String,

    /// Where to write the report archive
    #[clap(short, long, default_value = DEFAULT_ARCHIVE_NAME)]
    pub output: PathBuf,

    /// Timeout for the archive upload in seconds (0 waits indefinitely)
    #[clap(long, default_value_t = DEFAULT_UPLOAD_TIMEOUT_SECS)]
    pub upload_timeout: u64,

    /// Only accept report files ending in ".xml"
    #[clap(long)]
    pub strict_extension: bool,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Build the run configuration described by these arguments.
    pub fn to_config(&self) -> ReporterConfig {
        ReporterConfig {
            upload_timeout: upload_timeout_from_secs(self.upload_timeout),
            archive_path: self.output.clone(),
            pattern: if self.strict_extension {
                ReportPattern::Suffix
            } else {
                ReportPattern::Loose
            },
            ..ReporterConfig::with_api_url(&self.api)
        }
    }
}
