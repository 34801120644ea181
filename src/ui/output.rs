//! Console lines for attempt events and the end of a run

use std::path::Path;

use crate::batch::BatchSummary;
use crate::core::constants::http_status;
use crate::core::types::{RetryState, UrlResult};
use crate::probe::retry::AttemptEvent;
use crate::ui::color::{Colors, colorize};

/// Console category of an attempt event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    Success,
    Redirect,
    Forbidden,
    OtherStatus,
    Retry,
    Cancelled,
    Exhausted,
}

impl EventCategory {
    pub fn of(event: &AttemptEvent) -> Self {
        match event {
            AttemptEvent::Succeeded { status_code, .. } => Self::of_status(*status_code),
            AttemptEvent::Retrying { .. } => EventCategory::Retry,
            AttemptEvent::Cancelled { .. } => EventCategory::Cancelled,
            AttemptEvent::Exhausted { .. } => EventCategory::Exhausted,
        }
    }

    pub fn of_status(status_code: u16) -> Self {
        match status_code {
            http_status::OK => EventCategory::Success,
            code if http_status::REDIRECTS.contains(&code) => EventCategory::Redirect,
            http_status::FORBIDDEN => EventCategory::Forbidden,
            _ => EventCategory::OtherStatus,
        }
    }

    fn color(self) -> &'static str {
        match self {
            EventCategory::Success => Colors::BRIGHT_GREEN,
            EventCategory::Redirect => Colors::BRIGHT_CYAN,
            EventCategory::Forbidden | EventCategory::Retry => Colors::BRIGHT_YELLOW,
            EventCategory::OtherStatus | EventCategory::Cancelled | EventCategory::Exhausted => {
                Colors::BRIGHT_RED
            }
        }
    }
}

/// One progress line for an attempt event.
///
/// Completed exchanges yield `None`: they are reported by [`format_response`]
/// once the host's IP is known.
pub fn format_event(event: &AttemptEvent) -> Option<String> {
    let category = EventCategory::of(event);
    let line = match event {
        AttemptEvent::Succeeded { .. } => return None,
        AttemptEvent::Retrying {
            url,
            attempt,
            detail,
            ..
        } => format!(
            "{} {url} - {detail}",
            colorize(&format!("[Attempt {attempt}]"), category.color())
        ),
        AttemptEvent::Cancelled { url, .. } => format!(
            "{} {url} - Request cancelled",
            colorize("[Cancelled]", category.color())
        ),
        AttemptEvent::Exhausted {
            url,
            attempts,
            detail,
            ..
        } => format!(
            "{} {url} - All {attempts} attempt(s) exhausted ({detail})",
            colorize("[Failed]", category.color())
        ),
    };
    Some(line)
}

/// Status line of a URL that got an answer, with its server and IP.
pub fn format_response(result: &UrlResult) -> Option<String> {
    let status_code = result.status_code()?;
    if result.state != RetryState::Succeeded {
        return None;
    }

    let category = EventCategory::of_status(status_code);
    let label = match category {
        EventCategory::Success => format!("[{status_code} OK]"),
        EventCategory::Redirect => format!("[{status_code} Redirect]"),
        EventCategory::Forbidden => format!("[{status_code} Forbidden]"),
        _ => format!("[{status_code} Error]"),
    };
    Some(format!(
        "{} {} | Server: {} | IP: {}",
        colorize(&label, category.color()),
        result.url,
        result.outcome.server_header,
        result.ip()
    ))
}

/// Summary line printed after the batch.
pub fn format_summary(summary: &BatchSummary) -> String {
    let text = format!(
        "Checked {} URL(s): {} answered, {} failed",
        summary.total(),
        summary.succeeded,
        summary.exhausted + summary.aborted
    );
    let color = if summary.exhausted + summary.aborted == 0 {
        Colors::GREEN
    } else {
        Colors::YELLOW
    };
    colorize(&text, &format!("{}{}", Colors::BOLD, color))
}

/// Where the report files went.
pub fn display_saved_paths(status: &Path, ip: &Path) {
    println!("\nResults saved in: {}", status.display());
    println!("IP addresses saved in: {}", ip.display());
}

/// Fatal error line on stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", colorize(&format!("Error: {message}"), Colors::RED));
}
