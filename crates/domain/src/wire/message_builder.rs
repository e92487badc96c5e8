//! DNS Message Builder
//!
//! Serializes single-question queries. The transaction ID is supplied by the
//! caller so the random source can be injected (and fixed in tests).

use crate::dns_message::{Header, Question};
use crate::dns_record::CLASS_IN;
use crate::errors::DomainError;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query for `name` and serialize it to wire format.
    ///
    /// The message has one question (class IN), empty answer, authority and
    /// additional sections, and the RD flag set only if `recursion_desired`.
    ///
    /// # Errors
    /// [`DomainError::Encoding`] if any label of `name` exceeds 63 bytes.
    pub fn build_query(
        id: u16,
        name: &str,
        record_type: u16,
        recursion_desired: bool,
    ) -> Result<Vec<u8>, DomainError> {
        let header = Header::query(id, recursion_desired);
        let question = Question::new(name, record_type, CLASS_IN);

        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&header.to_bytes());
        question.write_to(&mut buf)?;
        Ok(buf)
    }
}
