use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Truncated message: needed {needed} bytes at offset {offset}, {available} available")]
    TruncatedMessage {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Malformed name: {0}")]
    MalformedName(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Resolution error: {0}")]
    Resolution(String),

    #[error("Referral limit of {limit} exceeded while resolving {domain}")]
    ReferralLimitExceeded { domain: String, limit: u8 },
}

impl DomainError {
    /// True for failures caused by the network rather than by message content.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::Transport { .. } | DomainError::TransportTimeout { .. }
        )
    }
}
