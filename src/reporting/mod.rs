//! Reporting
//!
//! This module builds the status and IP reports written at the end of a
//! run, and holds the structured logging helpers.

pub mod logging;
pub mod report;

// Re-export commonly used items
pub use report::{Report, ReportPaths};
