/// Application-wide constants to avoid magic values throughout the codebase.
///
/// HTTP status code constants
pub mod http_status {
    /// HTTP 200 OK - successful response
    pub const OK: u16 = 200;
    /// HTTP 301 Moved Permanently - permanent redirect
    pub const MOVED_PERMANENTLY: u16 = 301;
    /// HTTP 302 Found - temporary redirect
    pub const FOUND: u16 = 302;
    /// HTTP 308 Permanent Redirect
    pub const PERMANENT_REDIRECT: u16 = 308;
    /// HTTP 403 Forbidden - access forbidden
    pub const FORBIDDEN: u16 = 403;

    /// Status codes reported as redirects on the console
    pub const REDIRECTS: [u16; 3] = [MOVED_PERMANENTLY, FOUND, PERMANENT_REDIRECT];
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default per-attempt request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
    /// Maximum reasonable timeout in seconds (1 hour)
    pub const MAX_TIMEOUT_SECONDS: u64 = 3600;
    /// Minimum timeout in seconds
    pub const MIN_TIMEOUT_SECONDS: u64 = 1;
    /// Default delay between attempts in milliseconds
    pub const DEFAULT_RETRY_DELAY_MS: u64 = 2000;
}

/// Default configuration values
pub mod defaults {
    /// Attempts per URL, the first one included
    pub const MAX_ATTEMPTS: u32 = 3;
    /// Probes allowed in flight at once
    pub const CONCURRENCY: usize = 100;
    /// Scheme assumed for input lines that carry none
    pub const SCHEME_PREFIX: &str = "http://";
    /// Config file looked up in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".urlsweep.toml";
    /// Parent directories searched for a config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// Placeholder values written instead of missing data
pub mod sentinels {
    /// Written on the IP line when the host could not be resolved
    pub const IP_NOT_FOUND: &str = "IP not found";
    /// Server header value when the response carries none
    pub const UNKNOWN_SERVER: &str = "Unknown";
}

/// Output file naming
pub mod output {
    /// Directory the report files are written to
    pub const RESULTS_DIR: &str = "results";
    /// Prefix of the status report file
    pub const STATUS_FILE_PREFIX: &str = "output_";
    /// Prefix of the IP report file
    pub const IP_FILE_PREFIX: &str = "ip_";
    /// Extension appended to both report files
    pub const FILE_EXTENSION: &str = ".txt";
}

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    /// Conventional code for a run stopped by SIGINT
    pub const INTERRUPTED: i32 = 130;
}
