//! UDP transport for DNS queries (RFC 1035 §4.2.1)
//!
//! One datagram out, one datagram back. A fresh ephemeral socket is bound
//! per exchange so replies from earlier timeouts can never be mistaken for
//! the current answer. Lost datagrams are not retransmitted.

use async_trait::async_trait;
use rootwalk_application::ports::DnsTransport;
use rootwalk_domain::{DomainError, ResolverConfig};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

pub const DEFAULT_DNS_PORT: u16 = 53;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Bytes read per response; larger datagrams are cut here.
pub const DEFAULT_RECEIVE_BUFFER: usize = 1024;

/// DNS over UDP transport addressing IPv4 nameservers
pub struct UdpTransport {
    port: u16,
    timeout: Duration,
    buffer_size: usize,
}

impl UdpTransport {
    pub fn new(port: u16, timeout: Duration) -> Self {
        Self {
            port,
            timeout,
            buffer_size: DEFAULT_RECEIVE_BUFFER,
        }
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.port, Duration::from_millis(config.query_timeout_ms))
            .with_buffer_size(config.receive_buffer_size)
    }

    fn server_addr(&self, server: &str) -> Result<SocketAddr, DomainError> {
        let ip: Ipv4Addr = server
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(server.to_string()))?;
        Ok(SocketAddr::V4(SocketAddrV4::new(ip, self.port)))
    }
}

impl Default for UdpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_DNS_PORT, DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn exchange(&self, query: &[u8], server: &str) -> Result<Vec<u8>, DomainError> {
        let server_addr = self.server_addr(server)?;

        let socket = UdpSocket::bind(SocketAddr::from(([0, 0, 0, 0], 0)))
            .await
            .map_err(|e| DomainError::Transport {
                server: server.to_string(),
                reason: format!("failed to bind UDP socket: {}", e),
            })?;

        let bytes_sent = tokio::time::timeout(self.timeout, socket.send_to(query, server_addr))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server_addr.to_string(),
            })?
            .map_err(|e| DomainError::Transport {
                server: server_addr.to_string(),
                reason: format!("send failed: {}", e),
            })?;

        debug!(server = %server_addr, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; self.buffer_size];

        let (bytes_received, from_addr) =
            tokio::time::timeout(self.timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| DomainError::TransportTimeout {
                    server: server_addr.to_string(),
                })?
                .map_err(|e| DomainError::Transport {
                    server: server_addr.to_string(),
                    reason: format!("receive failed: {}", e),
                })?;

        if from_addr.ip() != server_addr.ip() {
            warn!(
                expected = %server_addr,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(server = %server_addr, bytes_received, "UDP response received");

        Ok(recv_buf)
    }
}
