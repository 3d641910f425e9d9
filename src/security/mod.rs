//! Input validation.
//!
//! This module checks the user-supplied report path before anything is
//! archived or sent over the network.

pub mod path_validator;

pub use path_validator::{validate_report_path, PathKind, ReportPattern};
