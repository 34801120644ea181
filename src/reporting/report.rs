use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::output;
use crate::core::error::Result;
use crate::core::types::UrlResult;

/// Status lines and IP lines, index-aligned with the input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    status_lines: Vec<String>,
    ip_lines: Vec<String>,
}

impl Report {
    /// Build the report from results already in input order.
    pub fn from_results(results: &[UrlResult]) -> Self {
        let (status_lines, ip_lines) = results
            .iter()
            .map(|result| (status_line(result), result.ip().to_string()))
            .unzip();

        Self {
            status_lines,
            ip_lines,
        }
    }

    pub fn status_lines(&self) -> &[String] {
        &self.status_lines
    }

    pub fn ip_lines(&self) -> &[String] {
        &self.ip_lines
    }

    pub fn len(&self) -> usize {
        self.status_lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.status_lines.is_empty()
    }

    /// Status lines joined by newlines, without a trailing newline.
    pub fn status_block(&self) -> String {
        self.status_lines.join("\n")
    }

    /// IP lines joined by newlines, without a trailing newline.
    pub fn ip_block(&self) -> String {
        self.ip_lines.join("\n")
    }

    /// Write both blocks, creating the output directory if needed.
    pub fn write(&self, paths: &ReportPaths) -> Result<()> {
        if let Some(dir) = paths.status.parent() {
            fs::create_dir_all(dir)?;
        }
        if let Some(dir) = paths.ip.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&paths.status, self.status_block())?;
        fs::write(&paths.ip, self.ip_block())?;
        Ok(())
    }
}

/// `<url>: <status>`, or `<url>:` when no status was ever obtained.
fn status_line(result: &UrlResult) -> String {
    match result.status_code() {
        Some(status) => format!("{}: {}", result.url, status),
        None => format!("{}:", result.url),
    }
}

/// Where the two report files of a run go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub status: PathBuf,
    pub ip: PathBuf,
}

impl ReportPaths {
    /// `output_<name>.txt` and `ip_<name>.txt` in `output_dir`, where
    /// `<name>` is the input file's name.
    ///
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use urlsweep::reporting::ReportPaths;
    ///
    /// let paths = ReportPaths::for_input("results", Path::new("lists/urls.txt"));
    /// assert_eq!(paths.status, Path::new("results/output_urls.txt.txt"));
    /// assert_eq!(paths.ip, Path::new("results/ip_urls.txt.txt"));
    /// ```
    pub fn for_input<D: AsRef<Path>>(output_dir: D, input: &Path) -> Self {
        let name = input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.to_string_lossy().into_owned());
        let dir = output_dir.as_ref();

        Self {
            status: dir.join(format!(
                "{}{name}{}",
                output::STATUS_FILE_PREFIX,
                output::FILE_EXTENSION
            )),
            ip: dir.join(format!(
                "{}{name}{}",
                output::IP_FILE_PREFIX,
                output::FILE_EXTENSION
            )),
        }
    }
}
