//! Probing a single URL
//!
//! This module turns raw input lines into absolute URLs, resolves their
//! hosts, issues HEAD requests and drives the per-URL retry state machine.

pub mod executor;
pub mod normalize;
pub mod resolver;
pub mod retry;

// Re-export commonly used items
pub use executor::{HttpProber, Probe, ProbeError, ProbeResponse};
pub use normalize::normalize_url;
pub use resolver::{Resolve, SystemResolver};
pub use retry::{AttemptEvent, AttemptObserver, AttemptVerdict, RetryController, RetryPolicy};
