use async_trait::async_trait;
use cleardns_application::ports::SystemProbe;
use cleardns_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr};
use tracing::debug;

/// Probe backed by the operating system's resolver.
///
/// The lookup runs through whatever the OS is configured to use, which on a
/// censored network is exactly the path an injector targets. Its answer is
/// a candidate, nothing more.
pub struct OsSystemProbe;

#[async_trait]
impl SystemProbe for OsSystemProbe {
    async fn probe(&self, domain: &str) -> Result<Option<Ipv4Addr>, DomainError> {
        // lookup_host wants a socket address; the port takes no part in the
        // name lookup itself.
        match tokio::net::lookup_host((domain, 0u16)).await {
            Ok(addrs) => {
                let first = addrs
                    .filter_map(|addr| match addr.ip() {
                        IpAddr::V4(v4) => Some(v4),
                        IpAddr::V6(_) => None,
                    })
                    .next();
                debug!(domain = %domain, ip = ?first, "system lookup");
                Ok(first)
            }
            Err(e) => {
                // The probe is advisory; a failed lookup just routes the
                // resolution onto the direct-query path.
                debug!(domain = %domain, error = %e, "system lookup failed");
                Ok(None)
            }
        }
    }
}
