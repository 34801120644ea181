use crate::batch::BatchSummary;
use crate::config::Config;
use crate::core::types::{RetryState, UrlResult};
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    // try_init: a second initialization (tests, embedding) is not an error
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    info!(
        "Configuration: concurrency={}, timeout={}s",
        config.concurrency(),
        config.timeout_duration().as_secs()
    );
    info!(
        "Retry: attempts={}, delay={}ms",
        config.max_attempts(),
        config.retry_delay_duration().as_millis()
    );
    info!(
        "Output: dir={}, skip_ssl={}",
        config.output_dir().display(),
        config.skip_ssl_verification.unwrap_or(false)
    );
}

/// Log input file information
pub fn log_input_info(path: &Path, url_count: usize) {
    info!("Read {url_count} URL(s) from {}", path.display());
}

/// Log batch start
pub fn log_batch_start(url_count: usize, concurrency: usize) {
    info!("Checking {url_count} URL(s), {concurrency} at a time");
}

/// Log batch completion
pub fn log_batch_complete(summary: &BatchSummary, duration_ms: u128) {
    if summary.exhausted == 0 && summary.aborted == 0 {
        info!(
            "✅ Batch complete: {}/{} URLs answered ({duration_ms}ms)",
            summary.succeeded,
            summary.total()
        );
    } else {
        warn!(
            "❌ Batch complete: {}/{} URLs answered, {} exhausted, {} aborted ({duration_ms}ms)",
            summary.succeeded,
            summary.total(),
            summary.exhausted,
            summary.aborted
        );
    }
}

/// Log a URL's final result for debugging
pub fn log_url_result(result: &UrlResult) {
    match (result.state, result.status_code()) {
        (RetryState::Succeeded, Some(status)) => debug!(
            "✓ {} -> {status} [{}] after {} attempt(s)",
            result.url,
            result.ip(),
            result.attempts_made
        ),
        (state, _) => debug!(
            "✗ {} -> {state:?} ({:?}) after {} attempt(s)",
            result.url, result.outcome.error_kind, result.attempts_made
        ),
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ProbeErrorKind, ProbeOutcome};
    use std::io;

    #[test]
    fn test_logger_initialization_is_repeatable() {
        init_logger(true, false);
        init_logger(false, true);
        init_logger(false, false);
    }

    #[test]
    fn test_log_config_info() {
        log_config_info(&Config::default());
        log_config_info(&Config {
            timeout: None,
            max_attempts: None,
            retry_delay: None,
            concurrency: None,
            output_dir: None,
            user_agent: None,
            skip_ssl_verification: None,
            verbose: None,
        });
    }

    #[test]
    fn test_log_batch_lifecycle() {
        log_input_info(Path::new("urls.txt"), 3);
        log_batch_start(3, 100);
        log_batch_complete(
            &BatchSummary {
                succeeded: 3,
                exhausted: 0,
                aborted: 0,
            },
            12,
        );
        log_batch_complete(
            &BatchSummary {
                succeeded: 1,
                exhausted: 1,
                aborted: 1,
            },
            12,
        );
    }

    #[test]
    fn test_log_url_result_variants() {
        log_url_result(&UrlResult::new(
            "http://a.test".to_string(),
            ProbeOutcome::responded(200, "Unknown".to_string()),
            1,
            RetryState::Succeeded,
        ));
        log_url_result(&UrlResult::new(
            "http://b.test".to_string(),
            ProbeOutcome::failed(ProbeErrorKind::Timeout),
            3,
            RetryState::Exhausted,
        ));
    }

    #[test]
    fn test_log_error_with_and_without_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "missing");
        log_error("Could not read input", Some(&io_error));
        log_error("Plain error", None);
    }
}
