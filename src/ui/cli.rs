// Command-line interface definitions and parsing for urlsweep

use crate::config::CliConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Text file with one URL per line
    pub input: PathBuf,

    // Core Options
    /// Per-attempt timeout in seconds (default: 10)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Core Options"
    )]
    pub timeout: Option<u64>,

    /// URLs checked at the same time (default: 100)
    #[arg(long, value_name = "COUNT", help_heading = "Core Options")]
    pub concurrency: Option<usize>,

    /// Directory for the report files (default: results)
    #[arg(long, value_name = "DIR", help_heading = "Core Options")]
    pub output_dir: Option<String>,

    // Retry
    /// Attempts per URL, the first one included (default: 3)
    #[arg(long, value_name = "COUNT", help_heading = "Retry")]
    pub attempts: Option<u32>,

    /// Delay between attempts in ms (default: 2000)
    #[arg(long, value_name = "MS", help_heading = "Retry")]
    pub retry_delay: Option<u64>,

    // Output & Verbosity
    /// Suppress progress output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Disable the progress bar
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Network & Security
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network & Security")]
    pub user_agent: Option<String>,

    /// Skip SSL certificate verification
    #[arg(long, help_heading = "Network & Security")]
    pub insecure: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert parsed arguments into the overrides merged on top of file config
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        timeout: cli.timeout,
        max_attempts: cli.attempts,
        retry_delay: cli.retry_delay,
        concurrency: cli.concurrency,
        output_dir: cli.output_dir.clone(),
        user_agent: cli.user_agent.clone(),
        skip_ssl_verification: cli.insecure,
        quiet: cli.quiet,
        verbose: cli.verbose,
        no_progress: cli.no_progress,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
