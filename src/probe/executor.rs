//! Single HEAD request against a URL

use async_trait::async_trait;
use reqwest::header::SERVER;
use reqwest::redirect::Policy;
use std::fmt;
use std::time::Duration;

use crate::config::Config;
use crate::core::CancelToken;
use crate::core::constants::sentinels::UNKNOWN_SERVER;
use crate::core::error::Result;
use crate::core::types::ProbeErrorKind;

/// What a completed HTTP exchange tells us about a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status_code: u16,
    pub server_header: String,
}

/// Why an attempt produced no response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The per-attempt timeout expired
    Timeout(String),
    /// Connection refused, reset, DNS failure, invalid URL...
    Connection(String),
    /// Aborted through the batch's cancel token
    Cancelled,
}

impl ProbeError {
    pub fn kind(&self) -> ProbeErrorKind {
        match self {
            ProbeError::Timeout(_) => ProbeErrorKind::Timeout,
            ProbeError::Connection(_) => ProbeErrorKind::ConnectionError,
            ProbeError::Cancelled => ProbeErrorKind::Cancelled,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.kind().is_retryable()
    }

    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        let description = std::error::Error::source(err)
            .map(|e| e.to_string())
            .unwrap_or_else(|| err.to_string());

        if err.is_timeout() {
            ProbeError::Timeout(description)
        } else {
            ProbeError::Connection(description)
        }
    }
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Timeout(desc) => write!(f, "timeout: {desc}"),
            ProbeError::Connection(desc) => write!(f, "{desc}"),
            ProbeError::Cancelled => write!(f, "request cancelled"),
        }
    }
}

#[async_trait]
pub trait Probe: Send + Sync {
    /// Issue one request. Any completed exchange is `Ok`, whatever its status.
    async fn probe(
        &self,
        url: &str,
        cancel: &CancelToken,
    ) -> std::result::Result<ProbeResponse, ProbeError>;
}

/// Probe backed by a single shared, connection-pooling reqwest client.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        // Redirects are reported, not followed
        let mut client_builder = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .redirect(Policy::none())
            .user_agent(user_agent)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(60));

        if config.skip_ssl_verification.unwrap_or(false) {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        Ok(Self::new(client_builder.build()?))
    }
}

#[async_trait]
impl Probe for HttpProber {
    async fn probe(
        &self,
        url: &str,
        cancel: &CancelToken,
    ) -> std::result::Result<ProbeResponse, ProbeError> {
        if cancel.is_cancelled() {
            return Err(ProbeError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ProbeError::Cancelled),
            response = self.client.head(url).send() => match response {
                Ok(resp) => Ok(ProbeResponse {
                    status_code: resp.status().as_u16(),
                    server_header: resp
                        .headers()
                        .get(SERVER)
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or(UNKNOWN_SERVER)
                        .to_string(),
                }),
                Err(err) => Err(ProbeError::from_reqwest(&err)),
            },
        }
    }
}
