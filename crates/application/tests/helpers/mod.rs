pub mod responses;

pub use mock_transport::{MockDnsTransport, SequentialIds};
pub use responses::ResponseBuilder;
