use std::fmt;

use crate::core::constants::sentinels;

/// One line of the input file.
///
/// `normalized` always carries a scheme. Built through the normalizer and
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    raw: String,
    normalized: String,
}

impl UrlEntry {
    /// Create an entry from a raw input line, normalizing it.
    ///
    /// # Examples
    /// ```
    /// use urlsweep::core::types::UrlEntry;
    ///
    /// let entry = UrlEntry::new("  example.com\n");
    /// assert_eq!(entry.normalized(), "http://example.com");
    /// assert_eq!(entry.raw(), "  example.com\n");
    /// ```
    pub fn new<S: Into<String>>(raw: S) -> Self {
        let raw = raw.into();
        let normalized = crate::probe::normalize::normalize_url(&raw);
        Self { raw, normalized }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

/// Classification of a failed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeErrorKind {
    Timeout,
    ConnectionError,
    Cancelled,
}

impl ProbeErrorKind {
    /// Whether another attempt may be made after this failure.
    pub fn is_retryable(self) -> bool {
        !matches!(self, ProbeErrorKind::Cancelled)
    }
}

impl fmt::Display for ProbeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeErrorKind::Timeout => write!(f, "timeout"),
            ProbeErrorKind::ConnectionError => write!(f, "connection error"),
            ProbeErrorKind::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Result of a single attempt against a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// Absent when no HTTP exchange completed
    pub status_code: Option<u16>,
    pub server_header: String,
    pub error_kind: Option<ProbeErrorKind>,
    /// Resolved address or [`sentinels::IP_NOT_FOUND`]
    pub ip: String,
}

impl ProbeOutcome {
    /// Outcome of a completed HTTP exchange.
    pub fn responded(status_code: u16, server_header: String) -> Self {
        Self {
            status_code: Some(status_code),
            server_header,
            error_kind: None,
            ip: sentinels::IP_NOT_FOUND.to_string(),
        }
    }

    /// Outcome of an attempt that never obtained a status code.
    pub fn failed(kind: ProbeErrorKind) -> Self {
        Self {
            status_code: None,
            server_header: sentinels::UNKNOWN_SERVER.to_string(),
            error_kind: Some(kind),
            ip: sentinels::IP_NOT_FOUND.to_string(),
        }
    }

    pub fn with_ip(self, ip: String) -> Self {
        Self { ip, ..self }
    }
}

/// Per-URL retry state machine.
///
/// `Attempting(n)` counts from 1; the other three states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryState {
    Attempting(u32),
    Succeeded,
    Exhausted,
    Aborted,
}

impl RetryState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RetryState::Attempting(_))
    }
}

/// Final outcome for one input URL after all attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlResult {
    pub url: String,
    /// Last attempt's outcome; on exhaustion or abort only the error kind is set
    pub outcome: ProbeOutcome,
    pub attempts_made: u32,
    /// Always a terminal state
    pub state: RetryState,
}

impl UrlResult {
    pub fn new(url: String, outcome: ProbeOutcome, attempts_made: u32, state: RetryState) -> Self {
        debug_assert!(state.is_terminal(), "UrlResult requires a terminal state");
        Self {
            url,
            outcome,
            attempts_made,
            state,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        self.outcome.status_code
    }

    pub fn ip(&self) -> &str {
        &self.outcome.ip
    }

    pub fn with_ip(self, ip: String) -> Self {
        Self {
            outcome: self.outcome.with_ip(ip),
            ..self
        }
    }
}

impl fmt::Display for UrlResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.outcome.status_code, self.outcome.error_kind) {
            (Some(status), _) => write!(f, "{} - {} - {}", status, self.url, self.outcome.ip),
            (None, Some(kind)) => write!(
                f,
                "{} - {} after {} attempt(s) - {}",
                self.url, kind, self.attempts_made, self.outcome.ip
            ),
            (None, None) => write!(f, "{} - {}", self.url, self.outcome.ip),
        }
    }
}
