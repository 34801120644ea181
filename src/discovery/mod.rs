//! Input loading
//!
//! This module reads the URL list a run is started with.

pub mod url_list;

// Re-export commonly used items
pub use url_list::{load_entries, parse_entries};
