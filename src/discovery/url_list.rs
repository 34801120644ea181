use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::core::error::{Result, UrlSweepError};
use crate::core::types::UrlEntry;

/// Read `path` and turn each of its lines into a [`UrlEntry`].
///
/// Blank lines are kept so the report stays aligned with the file.
pub fn load_entries(path: &Path) -> Result<Vec<UrlEntry>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => UrlSweepError::FileNotFound(path.display().to_string()),
        _ => UrlSweepError::Io(e),
    })?;

    Ok(parse_entries(&content))
}

/// One entry per line; a final line terminator does not add an entry.
pub fn parse_entries(content: &str) -> Vec<UrlEntry> {
    content.lines().map(UrlEntry::new).collect()
}
