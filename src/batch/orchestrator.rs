use futures::{StreamExt, stream};
use log::{debug, warn};

use crate::core::CancelToken;
use crate::core::constants::sentinels;
use crate::core::error::{Result, UrlSweepError};
use crate::core::types::{ProbeErrorKind, ProbeOutcome, RetryState, UrlEntry, UrlResult};
use crate::probe::executor::Probe;
use crate::probe::resolver::Resolve;
use crate::probe::retry::{AttemptObserver, RetryController};
use crate::reporting::logging;

/// Counts of terminal states over a finished batch
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub exhausted: usize,
    pub aborted: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[UrlResult]) -> Self {
        results
            .iter()
            .fold(Self::default(), |mut summary, result| {
                match result.state {
                    RetryState::Succeeded => summary.succeeded += 1,
                    RetryState::Exhausted => summary.exhausted += 1,
                    RetryState::Aborted => summary.aborted += 1,
                    RetryState::Attempting(_) => {}
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.exhausted + self.aborted
    }
}

/// Runs every entry of a batch through the retry controller.
pub struct BatchOrchestrator<P, R> {
    probe: P,
    resolver: R,
    controller: RetryController,
    concurrency: usize,
}

impl<P: Probe, R: Resolve> BatchOrchestrator<P, R> {
    pub fn new(probe: P, resolver: R, controller: RetryController, concurrency: usize) -> Self {
        Self {
            probe,
            resolver,
            controller,
            concurrency: concurrency.max(1),
        }
    }

    /// Check every entry, at most `concurrency` at a time.
    ///
    /// Results come back in input order whatever the completion order.
    /// Individual failures never stop the batch; cancellation of `cancel`
    /// discards everything and returns [`UrlSweepError::Cancelled`].
    pub async fn run(
        &self,
        entries: &[UrlEntry],
        cancel: &CancelToken,
        observer: &dyn AttemptObserver,
    ) -> Result<Vec<UrlResult>> {
        logging::log_batch_start(entries.len(), self.concurrency);

        // Each slot is overwritten once its URL finishes
        let mut slots: Vec<UrlResult> = entries.iter().map(unfinished).collect();
        let mut completed = stream::iter(entries.iter().enumerate())
            .map(|(index, entry)| async move {
                let url = entry.normalized();
                let resolve = async {
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => sentinels::IP_NOT_FOUND.to_string(),
                        ip = self.resolver.resolve(url) => ip,
                    }
                };
                let (result, ip) = tokio::join!(
                    self.controller.run(&self.probe, url, cancel, observer),
                    resolve,
                );
                (index, result.with_ip(ip))
            })
            .buffer_unordered(self.concurrency);

        while let Some((index, result)) = completed.next().await {
            logging::log_url_result(&result);
            observer.on_result(&result);
            slots[index] = result;
        }

        if cancel.is_cancelled() {
            warn!("Batch cancelled, discarding partial results");
            return Err(UrlSweepError::Cancelled);
        }

        let summary = BatchSummary::from_results(&slots);
        debug!("Batch finished: {summary:?}");
        Ok(slots)
    }
}

fn unfinished(entry: &UrlEntry) -> UrlResult {
    UrlResult::new(
        entry.normalized().to_string(),
        ProbeOutcome::failed(ProbeErrorKind::Cancelled),
        0,
        RetryState::Aborted,
    )
}
