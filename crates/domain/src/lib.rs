//! Rootwalk Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod errors;
pub mod wire;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use dns_message::{Header, Message, Question, RecordData, ResourceRecord};
pub use dns_record::{RecordType, CLASS_IN};
pub use errors::DomainError;
pub use wire::{MessageBuilder, MessageParser, WireReader};
