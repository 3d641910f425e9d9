//! Input path validation for report archiving.
//!
//! This module decides whether the path handed to the reporter is worth
//! archiving: it must exist, and either be a report file itself or a
//! directory holding at least one report file. Only metadata and directory
//! listings are read; file contents are never inspected.

use std::fs;
use std::io;
use std::path::Path;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::constants::DEFAULT_REPORT_PATTERN;
use crate::error::ValidationError;

lazy_static! {
    static ref LOOSE_REPORT_REGEX: Regex = Regex::new(DEFAULT_REPORT_PATTERN).unwrap();
}

/// Rule deciding which file names count as test reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportPattern {
    /// Any name containing "xml" preceded by at least one character
    /// (`report.xml`, but also `fooxml` or `a.xml.bak`).
    #[default]
    Loose,
    /// Names ending in the literal, case-sensitive suffix `.xml`.
    Suffix,
}

impl ReportPattern {
    /// Returns true when `name` looks like a test report under this rule.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            ReportPattern::Loose => LOOSE_REPORT_REGEX.is_match(name),
            ReportPattern::Suffix => name.len() > ".xml".len() && name.ends_with(".xml"),
        }
    }
}

/// What kind of input passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Directory,
    File,
}

/// Validates that `path` is acceptable for archiving.
///
/// # Errors
///
/// * `NotFound` - the path does not exist
/// * `EmptyDirectory` - the path is a directory without entries
/// * `NoMatchingFiles` - no non-directory entry of the directory matches `pattern`
/// * `UnsupportedFileType` - the path is a file whose name does not match `pattern`
/// * `Io` - the path exists but could not be inspected
pub fn validate_report_path(path: &Path, pattern: ReportPattern) -> Result<PathKind, ValidationError> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(ValidationError::NotFound),
        Err(e) => return Err(io_error(path, e)),
    };

    if metadata.is_dir() {
        validate_directory(path, pattern)?;
        return Ok(PathKind::Directory);
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    if !pattern.matches(&name) {
        return Err(ValidationError::UnsupportedFileType);
    }

    Ok(PathKind::File)
}

fn validate_directory(path: &Path, pattern: ReportPattern) -> Result<(), ValidationError> {
    let mut entry_count = 0usize;

    for entry in fs::read_dir(path).map_err(|e| io_error(path, e))? {
        let entry = entry.map_err(|e| io_error(path, e))?;
        entry_count += 1;

        // Symlinks are not followed: a link to a directory counts as a file entry
        let is_dir = entry.file_type().map_err(|e| io_error(&entry.path(), e))?.is_dir();
        if !is_dir && pattern.matches(&entry.file_name().to_string_lossy()) {
            debug!("Found report file {}", entry.path().display());
            return Ok(());
        }
    }

    if entry_count == 0 {
        Err(ValidationError::EmptyDirectory)
    } else {
        Err(ValidationError::NoMatchingFiles)
    }
}

fn io_error(path: &Path, source: io::Error) -> ValidationError {
    ValidationError::Io {
        path: path.to_path_buf(),
        source,
    }
}
