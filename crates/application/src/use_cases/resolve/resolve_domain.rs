use super::referral::ReferralStep;
use crate::ports::{DnsTransport, QueryIdSource};
use futures::future::BoxFuture;
use rootwalk_domain::{DomainError, Message, MessageBuilder, MessageParser, RecordType};
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// a.root-servers.net
pub const DEFAULT_ROOT_SERVER: &str = "198.41.0.4";

pub const DEFAULT_MAX_REFERRAL_DEPTH: u8 = 30;

/// Resolves a domain to an IPv4 address by walking the delegation chain
/// from a root server, asking each nameserver non-recursively.
pub struct ResolveDomainUseCase {
    transport: Arc<dyn DnsTransport>,
    ids: Arc<dyn QueryIdSource>,
    root_server: String,
    max_referral_depth: u8,
}

impl ResolveDomainUseCase {
    pub fn new(transport: Arc<dyn DnsTransport>, ids: Arc<dyn QueryIdSource>) -> Self {
        Self {
            transport,
            ids,
            root_server: DEFAULT_ROOT_SERVER.to_string(),
            max_referral_depth: DEFAULT_MAX_REFERRAL_DEPTH,
        }
    }

    pub fn with_root_server(mut self, root_server: impl Into<String>) -> Self {
        self.root_server = root_server.into();
        self
    }

    /// Limits both the referrals followed in one chain and how deeply
    /// nameserver-name lookups may nest.
    pub fn with_max_referral_depth(mut self, depth: u8) -> Self {
        self.max_referral_depth = depth;
        self
    }

    pub async fn execute(&self, domain: &str) -> Result<String, DomainError> {
        ensure_not_root(domain)?;
        let ip = self.resolve_from_root(domain.to_string(), 0).await?;
        info!(domain = %domain, ip = %ip, "Domain resolved");
        Ok(ip)
    }

    fn resolve_from_root(
        &self,
        domain: String,
        nesting: u8,
    ) -> BoxFuture<'_, Result<String, DomainError>> {
        Box::pin(async move {
            let mut nameserver = self.root_server.clone();
            let mut referrals: u8 = 0;

            loop {
                let response = self.query(&nameserver, &domain).await?;

                match ReferralStep::from_message(&response) {
                    ReferralStep::Answer(ip) => return Ok(ip),
                    ReferralStep::Glue(ip) => {
                        self.count_referral(&mut referrals, &domain)?;
                        debug!(domain = %domain, from = %nameserver, to = %ip, "Following glue referral");
                        nameserver = ip;
                    }
                    ReferralStep::Delegation(ns_name) => {
                        self.count_referral(&mut referrals, &domain)?;
                        if nesting >= self.max_referral_depth {
                            return Err(DomainError::ReferralLimitExceeded {
                                domain,
                                limit: self.max_referral_depth,
                            });
                        }
                        debug!(
                            domain = %domain,
                            nameserver = %ns_name,
                            nesting = nesting + 1,
                            "Referral without glue, resolving nameserver"
                        );
                        nameserver = self.resolve_from_root(ns_name, nesting + 1).await?;
                    }
                    ReferralStep::DeadEnd => {
                        return Err(DomainError::Resolution(format!(
                            "unknown error occurred: {} gave no answer, glue or referral for {}",
                            nameserver, domain
                        )));
                    }
                }
            }
        })
    }

    fn count_referral(&self, referrals: &mut u8, domain: &str) -> Result<(), DomainError> {
        if *referrals >= self.max_referral_depth {
            return Err(DomainError::ReferralLimitExceeded {
                domain: domain.to_string(),
                limit: self.max_referral_depth,
            });
        }
        *referrals += 1;
        Ok(())
    }

    async fn query(&self, nameserver: &str, domain: &str) -> Result<Message, DomainError> {
        let id = self.ids.next_id();
        let query = MessageBuilder::build_query(id, domain, RecordType::A.to_u16(), false)?;

        debug!(nameserver = %nameserver, domain = %domain, id, "Querying nameserver");

        let bytes = self
            .transport
            .exchange(&query, nameserver)
            .await
            .inspect_err(|e| {
                if e.is_transport_error() {
                    warn!(nameserver = %nameserver, error = %e, "Nameserver exchange failed");
                }
            })?;

        let response = MessageParser::parse(&bytes)?;

        if response.header.id != id {
            warn!(
                nameserver = %nameserver,
                expected = id,
                received = response.header.id,
                "Response ID does not match query"
            );
        }

        debug!(
            nameserver = %nameserver,
            answers = response.answers.len(),
            authorities = response.authorities.len(),
            additionals = response.additionals.len(),
            "Response parsed"
        );
        for record in response
            .answers
            .iter()
            .chain(&response.authorities)
            .chain(&response.additionals)
        {
            trace!(nameserver = %nameserver, record = %record, "Record");
        }

        Ok(response)
    }
}

/// The root name has no A record to look up.
pub(crate) fn ensure_not_root(domain: &str) -> Result<(), DomainError> {
    if domain.split('.').all(str::is_empty) {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' names the root zone",
            domain
        )));
    }
    Ok(())
}
