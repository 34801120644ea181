//! Concurrent checking of a whole URL list
//!
//! This module fans out one retry run and one host resolution per input
//! line and collects the results back into input order.

pub mod orchestrator;

// Re-export commonly used items
pub use orchestrator::{BatchOrchestrator, BatchSummary};
