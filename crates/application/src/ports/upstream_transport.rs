use async_trait::async_trait;
use cleardns_domain::DomainError;

/// Direct UDP path to the trusted upstream server.
#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    /// Binds a fresh socket and sends one query datagram. The returned
    /// receiver reads that round's responses; dropping it closes the socket.
    async fn start_round(&self, query: &[u8]) -> Result<Box<dyn RoundReceiver>, DomainError>;
}

/// Receiving half of one query round.
#[async_trait]
pub trait RoundReceiver: Send {
    /// Next response datagram, or `Ok(None)` when the receive window
    /// elapses with nothing arriving. Socket-level errors other than the
    /// timeout are [`DomainError::TransportFailure`].
    async fn next_datagram(&mut self) -> Result<Option<Vec<u8>>, DomainError>;
}
