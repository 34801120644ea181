//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{defaults, output, timeouts};
use crate::core::error::{Result, UrlSweepError};
use crate::probe::retry::RetryPolicy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Per-attempt timeout in seconds for HTTP requests
    pub timeout: Option<u64>,

    /// Attempts per URL, the first one included
    pub max_attempts: Option<u32>,

    /// Delay between attempts in milliseconds
    pub retry_delay: Option<u64>,

    /// Probes allowed in flight at once
    pub concurrency: Option<usize>,

    /// Directory the report files are written to
    pub output_dir: Option<String>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Skip SSL certificate verification
    pub skip_ssl_verification: Option<bool>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            max_attempts: Some(defaults::MAX_ATTEMPTS),
            retry_delay: Some(timeouts::DEFAULT_RETRY_DELAY_MS),
            concurrency: Some(defaults::CONCURRENCY),
            output_dir: Some(output::RESULTS_DIR.to_string()),
            user_agent: None,
            skip_ssl_verification: Some(false),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UrlSweepError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            UrlSweepError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        for i in 0..=defaults::CONFIG_SEARCH_DEPTH {
            let path = PathBuf::from(format!(
                "{}{}",
                "../".repeat(i),
                defaults::CONFIG_FILE_NAME
            ));
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => {
                    debug!("Loaded configuration from {}", path.display());
                    return config;
                }
                Err(e) => debug!("Ignoring {}: {e}", path.display()),
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(attempts) = cli_config.max_attempts {
            self.max_attempts = Some(attempts);
        }
        if let Some(retry_delay) = cli_config.retry_delay {
            self.retry_delay = Some(retry_delay);
        }
        if let Some(concurrency) = cli_config.concurrency {
            self.concurrency = Some(concurrency);
        }
        if let Some(ref output_dir) = cli_config.output_dir {
            self.output_dir = Some(output_dir.clone());
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if cli_config.skip_ssl_verification {
            self.skip_ssl_verification = Some(true);
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    /// Get retry delay as Duration
    pub fn retry_delay_duration(&self) -> Duration {
        Duration::from_millis(
            self.retry_delay
                .unwrap_or(timeouts::DEFAULT_RETRY_DELAY_MS),
        )
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts.unwrap_or(defaults::MAX_ATTEMPTS)
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency.unwrap_or(defaults::CONCURRENCY)
    }

    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(self.output_dir.as_deref().unwrap_or(output::RESULTS_DIR))
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts(),
            delay: self.retry_delay_duration(),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout < timeouts::MIN_TIMEOUT_SECONDS {
                return Err(UrlSweepError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > timeouts::MAX_TIMEOUT_SECONDS {
                return Err(UrlSweepError::Config(format!(
                    "Timeout of {timeout} seconds is larger than the maximum of {} seconds.",
                    timeouts::MAX_TIMEOUT_SECONDS
                )));
            }
        }

        if let Some(attempts) = self.max_attempts {
            if attempts == 0 {
                return Err(UrlSweepError::Config(
                    "Attempts cannot be 0. Every URL needs at least one attempt.".to_string(),
                ));
            }
            if attempts > 20 {
                return Err(UrlSweepError::Config(format!(
                    "{attempts} attempts is very high and may cause long delays. Consider using a smaller value."
                )));
            }
        }

        if let Some(concurrency) = self.concurrency {
            if concurrency == 0 {
                return Err(UrlSweepError::Config(
                    "Concurrency cannot be 0. Expected a positive integer.".to_string(),
                ));
            }
            if concurrency > 10_000 {
                return Err(UrlSweepError::Config(format!(
                    "Concurrency of {concurrency} is extremely high and may exhaust file descriptors. Consider using a smaller value."
                )));
            }
        }

        if let Some(ref dir) = self.output_dir
            && dir.trim().is_empty()
        {
            return Err(UrlSweepError::Config(
                "Output directory cannot be empty.".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub timeout: Option<u64>,        // --timeout
    pub max_attempts: Option<u32>,   // --attempts
    pub retry_delay: Option<u64>,    // --retry-delay
    pub concurrency: Option<usize>,  // --concurrency
    pub output_dir: Option<String>,  // --output-dir
    pub user_agent: Option<String>,  // --user-agent
    pub skip_ssl_verification: bool, // --insecure

    pub quiet: bool,       // --quiet
    pub verbose: bool,     // --verbose
    pub no_progress: bool, // --no-progress

    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
