//! Concurrent URL status and IP checker.
//!
//! Reads a list of URLs, probes each one with a HEAD request (retrying
//! transient failures), resolves each host and writes an input-ordered
//! status report and IP report.

pub mod batch;
pub mod config;
pub mod core;
pub mod discovery;
pub mod probe;
pub mod reporting;
pub mod ui;

// Re-export commonly used items at the crate root
pub use batch::{BatchOrchestrator, BatchSummary};
pub use config::Config;
pub use crate::core::{CancelToken, Result, UrlSweepError};
pub use crate::core::{ProbeErrorKind, ProbeOutcome, RetryState, UrlEntry, UrlResult};
pub use probe::{HttpProber, RetryController, RetryPolicy, SystemResolver};
pub use reporting::{Report, ReportPaths};
