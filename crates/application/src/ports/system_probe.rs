use async_trait::async_trait;
use cleardns_domain::DomainError;
use std::net::Ipv4Addr;

/// The operating system's resolver, consulted once per resolution as a fast
/// first probe. On a censored network its answer may already be forged, so
/// the caller screens whatever comes back.
#[async_trait]
pub trait SystemProbe: Send + Sync {
    /// First IPv4 address the system resolver returns, if any. Lookup
    /// failures surface as `Ok(None)`; the probe is advisory.
    async fn probe(&self, domain: &str) -> Result<Option<Ipv4Addr>, DomainError>;
}
