pub mod dns_server_mock;

pub use dns_server_mock::{answer_reply, empty_reply, glue_referral_reply, MockDnsServer};
