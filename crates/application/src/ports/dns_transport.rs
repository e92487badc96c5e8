use async_trait::async_trait;
use rootwalk_domain::DomainError;

#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Send `query` to the nameserver at `server` (an IPv4 literal) and
    /// return the raw bytes of the single datagram received back.
    ///
    /// Any resource opened for the exchange is released before returning,
    /// on success and on error.
    async fn exchange(&self, query: &[u8], server: &str) -> Result<Vec<u8>, DomainError>;
}
