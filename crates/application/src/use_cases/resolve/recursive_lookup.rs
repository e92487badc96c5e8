use super::resolve_domain::ensure_not_root;
use crate::ports::{DnsTransport, QueryIdSource};
use rootwalk_domain::{DomainError, MessageBuilder, MessageParser, RecordType};
use std::sync::Arc;
use tracing::{debug, info};

/// Asks a recursive resolver (e.g. 8.8.8.8) once, with RD set, instead of
/// walking the hierarchy.
pub struct RecursiveLookupUseCase {
    transport: Arc<dyn DnsTransport>,
    ids: Arc<dyn QueryIdSource>,
    server: String,
}

impl RecursiveLookupUseCase {
    pub fn new(
        transport: Arc<dyn DnsTransport>,
        ids: Arc<dyn QueryIdSource>,
        server: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            ids,
            server: server.into(),
        }
    }

    pub async fn execute(&self, domain: &str) -> Result<String, DomainError> {
        ensure_not_root(domain)?;
        let id = self.ids.next_id();
        let query = MessageBuilder::build_query(id, domain, RecordType::A.to_u16(), true)?;

        debug!(server = %self.server, domain = %domain, id, "Sending recursive query");

        let bytes = self.transport.exchange(&query, &self.server).await?;
        let response = MessageParser::parse(&bytes)?;

        let ip = response.first_answer_address().ok_or_else(|| {
            DomainError::Resolution(format!(
                "{} returned no address for {} (rcode {})",
                self.server,
                domain,
                response.header.rcode()
            ))
        })?;

        info!(domain = %domain, ip = %ip, server = %self.server, "Domain resolved recursively");
        Ok(ip.to_string())
    }
}
