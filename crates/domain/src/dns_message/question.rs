use crate::errors::DomainError;
use crate::wire::encode_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn new(name: impl Into<String>, qtype: u16, qclass: u16) -> Self {
        Self {
            name: name.into(),
            qtype,
            qclass,
        }
    }

    /// Append the wire form: encoded name, then type and class.
    pub fn write_to(&self, buf: &mut Vec<u8>) -> Result<(), DomainError> {
        buf.extend_from_slice(&encode_name(&self.name)?);
        buf.extend_from_slice(&self.qtype.to_be_bytes());
        buf.extend_from_slice(&self.qclass.to_be_bytes());
        Ok(())
    }
}
