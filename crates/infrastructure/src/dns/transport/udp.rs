//! UDP transport for the direct-query fallback (RFC 1035 §4.2.1)
//!
//! Plain DNS over UDP, one datagram out and potentially several back: an
//! on-path injector answers alongside the real server, so a round keeps its
//! socket open and hands every datagram arriving within the receive window
//! back to the caller. Responses are capped at 512 bytes, the plain-UDP
//! limit without EDNS(0).

use async_trait::async_trait;
use cleardns_application::ports::{RoundReceiver, UpstreamTransport};
use cleardns_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, trace, warn};

const MAX_UDP_RESPONSE_SIZE: usize = 512;

/// Direct UDP path to the configured upstream server.
pub struct UdpUpstreamTransport {
    server_addr: SocketAddr,
    receive_timeout: Duration,
}

impl UdpUpstreamTransport {
    pub fn new(server_addr: SocketAddr, receive_timeout: Duration) -> Self {
        Self {
            server_addr,
            receive_timeout,
        }
    }
}

#[async_trait]
impl UpstreamTransport for UdpUpstreamTransport {
    async fn start_round(&self, query: &[u8]) -> Result<Box<dyn RoundReceiver>, DomainError> {
        // Fresh socket per round, ephemeral port (0 = OS assigns).
        let socket = UdpSocket::bind("0.0.0.0:0").await.map_err(|e| {
            DomainError::TransportFailure(format!("failed to bind UDP socket: {}", e))
        })?;

        let bytes_sent = socket.send_to(query, self.server_addr).await.map_err(|e| {
            DomainError::TransportFailure(format!(
                "failed to send query to {}: {}",
                self.server_addr, e
            ))
        })?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "query datagram sent"
        );
        trace!(payload = %hex(query), "query datagram dump");

        Ok(Box::new(UdpRoundReceiver {
            socket,
            server_addr: self.server_addr,
            receive_timeout: self.receive_timeout,
        }))
    }
}

/// Receiving half of one round; dropping it closes the socket.
struct UdpRoundReceiver {
    socket: UdpSocket,
    server_addr: SocketAddr,
    receive_timeout: Duration,
}

#[async_trait]
impl RoundReceiver for UdpRoundReceiver {
    async fn next_datagram(&mut self) -> Result<Option<Vec<u8>>, DomainError> {
        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let (bytes_received, from_addr) =
            match tokio::time::timeout(self.receive_timeout, self.socket.recv_from(&mut recv_buf))
                .await
            {
                Ok(received) => received.map_err(|e| {
                    DomainError::TransportFailure(format!(
                        "failed to receive response from {}: {}",
                        self.server_addr, e
                    ))
                })?,
                Err(_) => {
                    debug!(server = %self.server_addr, "receive window elapsed");
                    return Ok(None);
                }
            };

        // Injected answers spoof the server's address anyway, so an odd
        // source is worth noting but not disqualifying on its own.
        if from_addr.ip() != self.server_addr.ip() {
            warn!(
                expected = %self.server_addr,
                received_from = %from_addr,
                "response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "response datagram received"
        );
        trace!(payload = %hex(&recv_buf), "response datagram dump");

        Ok(Some(recv_buf))
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
