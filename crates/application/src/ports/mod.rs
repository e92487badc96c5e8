mod dns_transport;
mod query_id;

pub use dns_transport::DnsTransport;
pub use query_id::QueryIdSource;
