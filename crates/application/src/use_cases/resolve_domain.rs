use crate::ports::{AnswerCache, SystemProbe, UpstreamTransport};
use cleardns_domain::wire::{first_a_record, QueryMessage};
use cleardns_domain::{DomainError, ForgedAnswerFilter, ResolverConfig};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, warn};

/// End-to-end resolution of one domain to one IPv4 address.
///
/// Probes the system resolver first, and only falls back to querying the
/// upstream server directly when that answer matches the forged set. The
/// fallback keeps listening past forged datagrams because an on-path
/// injector races its answer ahead of the real one on the same socket.
pub struct ResolveDomainUseCase {
    probe: Arc<dyn SystemProbe>,
    transport: Arc<dyn UpstreamTransport>,
    filter: ForgedAnswerFilter,
    cache: Option<Arc<dyn AnswerCache>>,
    max_rounds: u32,
    wait_per_round: u32,
}

impl ResolveDomainUseCase {
    pub fn new(
        probe: Arc<dyn SystemProbe>,
        transport: Arc<dyn UpstreamTransport>,
        filter: ForgedAnswerFilter,
        cache: Option<Arc<dyn AnswerCache>>,
        config: &ResolverConfig,
    ) -> Self {
        Self {
            probe,
            transport,
            filter,
            cache,
            max_rounds: config.max_rounds,
            wait_per_round: config.wait_per_round,
        }
    }

    /// Resolves `domain` to an address that is not a known forgery.
    ///
    /// `Ok(None)` means every round was exhausted without a clean answer.
    /// On a censored network that is an ordinary outcome, not an error.
    pub async fn execute(&self, domain: &str) -> Result<Option<Ipv4Addr>, DomainError> {
        match self.probe.probe(domain).await? {
            Some(candidate) if !self.filter.is_forged(candidate) => {
                debug!(domain = %domain, ip = %candidate, "system answer clean");
                return Ok(Some(candidate));
            }
            Some(candidate) => {
                warn!(domain = %domain, ip = %candidate, "system answer matches forged set");
            }
            None => {
                debug!(domain = %domain, "system resolver returned nothing");
            }
        }

        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(domain) {
                debug!(domain = %domain, ip = %hit, "cache hit");
                return Ok(Some(hit));
            }
        }

        for round in 1..=self.max_rounds {
            if let Some(addr) = self.query_round(domain, round).await? {
                if let Some(cache) = &self.cache {
                    cache.put(domain, addr);
                }
                return Ok(Some(addr));
            }
        }

        debug!(domain = %domain, rounds = self.max_rounds, "all rounds exhausted without a clean answer");
        Ok(None)
    }

    /// One send-then-wait cycle. `Ok(None)` moves the caller on to the
    /// next round.
    async fn query_round(
        &self,
        domain: &str,
        round: u32,
    ) -> Result<Option<Ipv4Addr>, DomainError> {
        // Fresh message per round so no transaction id is ever replayed.
        let query = QueryMessage::for_domain(domain)?;
        let mut receiver = self.transport.start_round(query.as_bytes()).await?;

        for _ in 0..self.wait_per_round {
            let datagram = match receiver.next_datagram().await? {
                Some(datagram) => datagram,
                None => {
                    debug!(domain = %domain, round = round, "receive window elapsed");
                    return Ok(None);
                }
            };

            let answer = match first_a_record(&datagram, &query) {
                Ok(answer) => answer,
                Err(DomainError::MalformedResponse(reason)) => {
                    debug!(domain = %domain, round = round, reason = %reason, "undecodable datagram discarded");
                    continue;
                }
                Err(e) => return Err(e),
            };

            match answer {
                Some(addr) if self.filter.is_forged(addr) => {
                    warn!(domain = %domain, round = round, ip = %addr, "forged answer discarded, still listening");
                }
                Some(addr) => {
                    debug!(domain = %domain, round = round, ip = %addr, "clean answer accepted");
                    return Ok(Some(addr));
                }
                None => {
                    debug!(domain = %domain, round = round, "datagram carried no A record");
                }
            }
        }

        Ok(None)
    }
}
