//! Best-effort host to IP resolution for the report

use async_trait::async_trait;
use log::debug;
use std::net::IpAddr;
use std::time::Duration;

use crate::core::constants::sentinels::IP_NOT_FOUND;

#[async_trait]
pub trait Resolve: Send + Sync {
    /// Resolve the host of `url`, returning the sentinel on any failure.
    async fn resolve(&self, url: &str) -> String;
}

/// Resolver backed by the operating system's lookup through tokio.
#[derive(Debug, Clone)]
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    async fn lookup(&self, url: &str) -> Option<IpAddr> {
        let parsed = reqwest::Url::parse(url).ok()?;
        let host = parsed.host_str().filter(|host| !host.is_empty())?;

        // IPv6 literals come back bracketed from host_str
        let bare = host.trim_start_matches('[').trim_end_matches(']');
        if let Ok(ip) = bare.parse::<IpAddr>() {
            return Some(ip);
        }

        let port = parsed.port_or_known_default().unwrap_or(80);
        let addrs = tokio::time::timeout(self.timeout, tokio::net::lookup_host((host, port)))
            .await
            .ok()?
            .ok()?;

        pick_address(addrs.map(|addr| addr.ip()))
    }
}

#[async_trait]
impl Resolve for SystemResolver {
    async fn resolve(&self, url: &str) -> String {
        match self.lookup(url).await {
            Some(ip) => ip.to_string(),
            None => {
                debug!("Could not resolve host of {url}");
                IP_NOT_FOUND.to_string()
            }
        }
    }
}

/// First IPv4 address if there is one, otherwise the first address.
fn pick_address<I: Iterator<Item = IpAddr>>(addrs: I) -> Option<IpAddr> {
    let mut first = None;
    for ip in addrs {
        if ip.is_ipv4() {
            return Some(ip);
        }
        first.get_or_insert(ip);
    }
    first
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    fn resolver() -> SystemResolver {
        SystemResolver::new(Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_resolve__unknown_host_returns_sentinel() {
        // .invalid is reserved and never resolves (RFC 2606)
        let ip = resolver().resolve("http://no-such-host.invalid").await;
        assert_eq!(ip, "IP not found");
    }

    #[tokio::test]
    async fn test_resolve__unparsable_url_returns_sentinel() {
        assert_eq!(resolver().resolve("http://").await, "IP not found");
        assert_eq!(
            resolver().resolve("http://bad url with spaces").await,
            "IP not found"
        );
        assert_eq!(resolver().resolve("").await, "IP not found");
    }

    #[tokio::test]
    async fn test_resolve__ip_literal_is_returned_as_is() {
        assert_eq!(resolver().resolve("http://127.0.0.1:8080/x").await, "127.0.0.1");
        assert_eq!(resolver().resolve("https://[::1]/").await, "::1");
    }

    #[test]
    fn test_pick_address__prefers_ipv4() {
        let v6 = IpAddr::V6(Ipv6Addr::LOCALHOST);
        let v4 = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));

        assert_eq!(pick_address(vec![v6, v4].into_iter()), Some(v4));
        assert_eq!(pick_address(vec![v6].into_iter()), Some(v6));
        assert_eq!(pick_address(Vec::new().into_iter()), None);
    }
}
