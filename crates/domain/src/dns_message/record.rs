use crate::dns_record::RecordType;
use std::fmt;

/// Record payload, interpreted by record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    /// `A` data rendered as dotted decimal, one group per data byte.
    Address(String),
    /// `NS` data: the nameserver's domain name.
    NameServer(String),
    /// Any other type, kept as the raw data bytes.
    Opaque(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,

    pub record_type: u16,

    pub class: u16,

    pub ttl: u32,

    pub data: RecordData,
}

impl ResourceRecord {
    pub fn address(&self) -> Option<&str> {
        match &self.data {
            RecordData::Address(ip) => Some(ip),
            _ => None,
        }
    }

    pub fn nameserver(&self) -> Option<&str> {
        match &self.data {
            RecordData::NameServer(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rtype = RecordType::describe(self.record_type);
        match &self.data {
            RecordData::Address(ip) => write!(f, "{} {} {} {}", self.name, self.ttl, rtype, ip),
            RecordData::NameServer(ns) => {
                write!(f, "{} {} {} {}", self.name, self.ttl, rtype, ns)
            }
            RecordData::Opaque(bytes) => write!(
                f,
                "{} {} {} ({} bytes)",
                self.name,
                self.ttl,
                rtype,
                bytes.len()
            ),
        }
    }
}
