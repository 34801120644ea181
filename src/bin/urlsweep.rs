use clap::Parser;
use log::warn;
use urlsweep::batch::{BatchOrchestrator, BatchSummary};
use urlsweep::config::{CliConfig, Config};
use urlsweep::core::constants::exit_codes;
use urlsweep::core::{CancelToken, UrlSweepError};
use urlsweep::discovery::load_entries;
use urlsweep::probe::{HttpProber, RetryController, SystemResolver};
use urlsweep::reporting::logging;
use urlsweep::reporting::{Report, ReportPaths};
use urlsweep::ui::output;
use urlsweep::ui::{Cli, ProgressReporter, cli_to_config};

#[tokio::main]
async fn main() {
    // Wrong argument count exits here with clap's usage error (code 2)
    let cli = Cli::parse();

    match run_urlsweep_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            output::display_error(&e.to_string());
            std::process::exit(exit_code_for(&e));
        }
    }
}

/// Main checking logic extracted from main() for testing
pub async fn run_urlsweep_logic(cli: &Cli) -> Result<i32, UrlSweepError> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);
    logging::log_config_info(&config);

    let entries = load_entries(&cli.input).inspect_err(|e| {
        logging::log_error("Could not read input file", Some(e));
    })?;
    logging::log_input_info(&cli.input, entries.len());

    let orchestrator = BatchOrchestrator::new(
        HttpProber::from_config(&config)?,
        SystemResolver::new(config.timeout_duration()),
        RetryController::new(config.retry_policy()),
        config.concurrency(),
    );

    let cancel = CancelToken::new();
    spawn_interrupt_handler(cancel.clone());

    let mut progress = ProgressReporter::new(!cli_config.no_progress, cli_config.quiet);
    progress.start(entries.len());

    let start_time = std::time::Instant::now();
    let results = orchestrator
        .run(&entries, &cancel, &progress)
        .await
        .inspect_err(|_| progress.abandon())?;

    let summary = BatchSummary::from_results(&results);
    logging::log_batch_complete(&summary, start_time.elapsed().as_millis());
    progress.finish(&summary);

    let report = Report::from_results(&results);
    let paths = ReportPaths::for_input(config.output_dir(), &cli.input);
    report.write(&paths).inspect_err(|e| {
        logging::log_error("Could not write report", Some(e));
    })?;

    if !cli_config.quiet {
        output::display_saved_paths(&paths.status, &paths.ip);
    }

    Ok(exit_codes::SUCCESS)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, UrlSweepError> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()
    };

    // CLI arguments take precedence over the config file
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Cancel the batch on Ctrl-C
fn spawn_interrupt_handler(cancel: CancelToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling in-flight probes");
            cancel.cancel();
        }
    });
}

fn exit_code_for(err: &UrlSweepError) -> i32 {
    match err {
        UrlSweepError::Cancelled => exit_codes::INTERRUPTED,
        _ => exit_codes::FAILURE,
    }
}
