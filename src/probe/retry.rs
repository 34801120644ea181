//! Per-URL retry state machine around a [`Probe`]

use log::debug;
use std::time::Duration;

use crate::core::CancelToken;
use crate::core::constants::{defaults, timeouts};
use crate::core::types::{ProbeErrorKind, ProbeOutcome, RetryState, UrlResult};
use crate::probe::executor::{Probe, ProbeError, ProbeResponse};

/// How one attempt ended, as far as the state machine is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptVerdict {
    /// An HTTP exchange completed, whatever the status code
    Responded,
    RetryableFailure,
    Cancelled,
}

impl AttemptVerdict {
    fn of(result: &std::result::Result<ProbeResponse, ProbeError>) -> Self {
        match result {
            Ok(_) => AttemptVerdict::Responded,
            Err(ProbeError::Cancelled) => AttemptVerdict::Cancelled,
            Err(_) => AttemptVerdict::RetryableFailure,
        }
    }
}

impl RetryState {
    /// Transition function of the retry state machine. Terminal states absorb.
    pub fn next(self, verdict: AttemptVerdict, max_attempts: u32) -> RetryState {
        match (self, verdict) {
            (RetryState::Attempting(_), AttemptVerdict::Responded) => RetryState::Succeeded,
            (RetryState::Attempting(_), AttemptVerdict::Cancelled) => RetryState::Aborted,
            (RetryState::Attempting(n), AttemptVerdict::RetryableFailure) if n < max_attempts => {
                RetryState::Attempting(n + 1)
            }
            (RetryState::Attempting(_), AttemptVerdict::RetryableFailure) => RetryState::Exhausted,
            (terminal, _) => terminal,
        }
    }
}

/// Notification emitted for every attempt outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptEvent {
    Succeeded {
        url: String,
        attempt: u32,
        status_code: u16,
        server_header: String,
    },
    Retrying {
        url: String,
        attempt: u32,
        kind: ProbeErrorKind,
        detail: String,
    },
    Cancelled {
        url: String,
        attempt: u32,
    },
    Exhausted {
        url: String,
        attempts: u32,
        kind: ProbeErrorKind,
        detail: String,
    },
}

impl AttemptEvent {
    pub fn url(&self) -> &str {
        match self {
            AttemptEvent::Succeeded { url, .. }
            | AttemptEvent::Retrying { url, .. }
            | AttemptEvent::Cancelled { url, .. }
            | AttemptEvent::Exhausted { url, .. } => url,
        }
    }
}

/// Receives attempt events. Purely observational.
pub trait AttemptObserver: Send + Sync {
    fn on_attempt(&self, event: &AttemptEvent);

    /// Called once per URL when its result, IP included, is final.
    fn on_result(&self, _result: &UrlResult) {}
}

/// Observer that drops every event.
impl AttemptObserver for () {
    fn on_attempt(&self, _event: &AttemptEvent) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts per URL, the first one included. At least 1.
    pub max_attempts: u32,
    /// Pause between two attempts; none after the last one
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: defaults::MAX_ATTEMPTS,
            delay: Duration::from_millis(timeouts::DEFAULT_RETRY_DELAY_MS),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RetryController {
    policy: RetryPolicy,
}

impl RetryController {
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    /// Drive `url` from `Attempting(1)` to a terminal state.
    pub async fn run<P: Probe + ?Sized>(
        &self,
        probe: &P,
        url: &str,
        cancel: &CancelToken,
        observer: &dyn AttemptObserver,
    ) -> UrlResult {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut state = RetryState::Attempting(1);
        let mut attempts_made = 0;
        let mut outcome = ProbeOutcome::failed(ProbeErrorKind::Cancelled);

        while let RetryState::Attempting(attempt) = state {
            let result = probe.probe(url, cancel).await;
            attempts_made = attempt;
            state = state.next(AttemptVerdict::of(&result), max_attempts);

            match result {
                Ok(response) => {
                    observer.on_attempt(&AttemptEvent::Succeeded {
                        url: url.to_string(),
                        attempt,
                        status_code: response.status_code,
                        server_header: response.server_header.clone(),
                    });
                    outcome = ProbeOutcome::responded(response.status_code, response.server_header);
                }
                Err(err) => {
                    outcome = ProbeOutcome::failed(err.kind());
                    let event = match state {
                        RetryState::Attempting(_) => AttemptEvent::Retrying {
                            url: url.to_string(),
                            attempt,
                            kind: err.kind(),
                            detail: err.to_string(),
                        },
                        RetryState::Exhausted => AttemptEvent::Exhausted {
                            url: url.to_string(),
                            attempts: attempt,
                            kind: err.kind(),
                            detail: err.to_string(),
                        },
                        _ => AttemptEvent::Cancelled {
                            url: url.to_string(),
                            attempt,
                        },
                    };
                    observer.on_attempt(&event);
                }
            }

            if matches!(state, RetryState::Attempting(_)) && !self.pause(cancel).await {
                debug!("{url}: cancelled while waiting to retry");
                state = RetryState::Aborted;
                outcome = ProbeOutcome::failed(ProbeErrorKind::Cancelled);
                observer.on_attempt(&AttemptEvent::Cancelled {
                    url: url.to_string(),
                    attempt,
                });
            }
        }

        debug!("{url}: {state:?} after {attempts_made} attempt(s)");
        UrlResult::new(url.to_string(), outcome, attempts_made, state)
    }

    /// Wait out the retry delay. Returns false if cancelled meanwhile.
    async fn pause(&self, cancel: &CancelToken) -> bool {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => false,
            _ = tokio::time::sleep(self.policy.delay) => true,
        }
    }
}
