use std::fmt;

/// Error types for urlsweep operations
#[derive(Debug)]
pub enum UrlSweepError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client error
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Input file not found
    FileNotFound(String),

    /// The batch was cancelled before every URL finished
    Cancelled,
}

impl fmt::Display for UrlSweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlSweepError::Io(err) => write!(f, "IO error: {err}"),
            UrlSweepError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UrlSweepError::Http(err) => write!(f, "HTTP error: {err}"),
            UrlSweepError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            UrlSweepError::FileNotFound(path) => write!(f, "File not found: {path}"),
            UrlSweepError::Cancelled => write!(f, "Run cancelled"),
        }
    }
}

impl std::error::Error for UrlSweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlSweepError::Io(err) => Some(err),
            UrlSweepError::Http(err) => Some(err),
            UrlSweepError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UrlSweepError {
    fn from(err: std::io::Error) -> Self {
        UrlSweepError::Io(err)
    }
}

impl From<reqwest::Error> for UrlSweepError {
    fn from(err: reqwest::Error) -> Self {
        UrlSweepError::Http(err)
    }
}

impl From<toml::de::Error> for UrlSweepError {
    fn from(err: toml::de::Error) -> Self {
        UrlSweepError::TomlParsing(err)
    }
}

/// Type alias for Results using UrlSweepError
pub type Result<T> = std::result::Result<T, UrlSweepError>;
