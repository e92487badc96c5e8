//! DNS wire format (RFC 1035 §4)
//!
//! Query encoding and response decoding, including name compression.
//! Everything here works on an immutable byte slice plus an explicit cursor.

pub mod message_builder;
pub mod message_parser;
pub mod name;
pub mod reader;

pub use message_builder::MessageBuilder;
pub use message_parser::MessageParser;
pub use name::{decode_name, encode_name, MAX_LABEL_LEN, MAX_POINTER_HOPS};
pub use reader::WireReader;
