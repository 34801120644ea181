use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

use crate::batch::BatchSummary;
use crate::core::types::UrlResult;
use crate::probe::retry::{AttemptEvent, AttemptObserver};
use crate::ui::output::{format_event, format_response, format_summary};

/// Console collaborator of a batch: one line per attempt event, plus an
/// optional bar counting finished URLs.
///
/// Lines and bar share stdout, so redirecting it captures every line.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    show_bar: bool,
    quiet: bool,
}

impl ProgressReporter {
    pub fn new(show_bar: bool, quiet: bool) -> Self {
        Self {
            bar: None,
            show_bar,
            quiet,
        }
    }

    pub fn start(&mut self, total_urls: usize) {
        // A hidden bar swallows println, so only draw on a real terminal
        if !self.show_bar || self.quiet || !std::io::stdout().is_terminal() {
            return;
        }

        let pb =
            ProgressBar::with_draw_target(Some(total_urls as u64), ProgressDrawTarget::stdout());
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.yellow/red}] {pos}/{len} URLs checked ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.set_message("Checking URLs");
        pb.enable_steady_tick(Duration::from_millis(120));
        self.bar = Some(pb);
    }

    pub fn finish(&self, summary: &BatchSummary) {
        if let Some(ref pb) = self.bar {
            pb.finish_and_clear();
        }
        self.print_line(format_summary(summary));
    }

    /// Drop the bar without a summary, e.g. after cancellation.
    pub fn abandon(&self) {
        if let Some(ref pb) = self.bar {
            pb.abandon();
        }
    }

    fn print_line(&self, line: String) {
        if self.quiet {
            return;
        }
        match self.bar {
            Some(ref pb) => pb.println(line),
            None => println!("{line}"),
        }
    }
}

impl AttemptObserver for ProgressReporter {
    fn on_attempt(&self, event: &AttemptEvent) {
        if let Some(line) = format_event(event) {
            self.print_line(line);
        }
    }

    fn on_result(&self, result: &UrlResult) {
        if let Some(line) = format_response(result) {
            self.print_line(line);
        }
        if let Some(ref pb) = self.bar {
            pb.inc(1);
        }
    }
}
