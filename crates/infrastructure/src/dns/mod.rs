pub mod query_id;
pub mod transport;

pub use query_id::FastrandQueryIds;
pub use transport::UdpTransport;
