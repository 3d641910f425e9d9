//! Utility functions for report processing.
//!
//! ## Creating a report archive
//!
//! ```no_run
//! use flakebot_reporter::utils::compress::create_report_archive;
//! use std::path::Path;
//!
//! # fn example() -> flakebot_reporter::error::Result<()> {
//! let archive = create_report_archive(Path::new("test-results"), Path::new("report.zip"))?;
//! println!("Created archive: {}", archive.display());
//! # Ok(())
//! # }
//! ```

/// ZIP archive creation for report files
pub mod compress;
