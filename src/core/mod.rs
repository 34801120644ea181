//! Core types and foundational components
//!
//! This module contains the fundamental data types, error handling,
//! cancellation and constants used throughout the application.

pub mod cancel;
pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items for convenience
pub use cancel::CancelToken;
pub use error::{Result, UrlSweepError};
pub use types::{ProbeErrorKind, ProbeOutcome, RetryState, UrlEntry, UrlResult};
