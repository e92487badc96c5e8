#![allow(dead_code)]
use rootwalk_domain::wire::encode_name;
use rootwalk_domain::RecordType;

struct RawRecord {
    name: Vec<u8>,
    record_type: u16,
    ttl: u32,
    data: Vec<u8>,
}

/// Assembles response bytes with uncompressed names.
pub struct ResponseBuilder {
    id: u16,
    flags: u16,
    questions: Vec<(String, u16)>,
    answers: Vec<RawRecord>,
    authorities: Vec<RawRecord>,
    additionals: Vec<RawRecord>,
}

impl ResponseBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            flags: 0x8000,
            questions: Vec::new(),
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
        }
    }

    pub fn question(mut self, name: &str) -> Self {
        self.questions.push((name.to_string(), RecordType::A.to_u16()));
        self
    }

    pub fn answer_a(mut self, name: &str, ip: [u8; 4]) -> Self {
        self.answers.push(a_record(name, ip));
        self
    }

    pub fn authority_ns(mut self, zone: &str, nameserver: &str) -> Self {
        self.authorities.push(ns_record(zone, nameserver));
        self
    }

    pub fn authority_opaque(mut self, zone: &str, record_type: u16, data: &[u8]) -> Self {
        self.authorities.push(RawRecord {
            name: encode_name(zone).unwrap(),
            record_type,
            ttl: 3600,
            data: data.to_vec(),
        });
        self
    }

    pub fn additional_a(mut self, name: &str, ip: [u8; 4]) -> Self {
        self.additionals.push(a_record(name, ip));
        self
    }

    pub fn additional_opaque(mut self, name: &str, record_type: u16, data: &[u8]) -> Self {
        self.additionals.push(RawRecord {
            name: encode_name(name).unwrap(),
            record_type,
            ttl: 3600,
            data: data.to_vec(),
        });
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        for count in [
            self.questions.len(),
            self.answers.len(),
            self.authorities.len(),
            self.additionals.len(),
        ] {
            buf.extend_from_slice(&(count as u16).to_be_bytes());
        }

        for (name, qtype) in &self.questions {
            buf.extend_from_slice(&encode_name(name).unwrap());
            buf.extend_from_slice(&qtype.to_be_bytes());
            buf.extend_from_slice(&1u16.to_be_bytes());
        }

        for record in self
            .answers
            .iter()
            .chain(&self.authorities)
            .chain(&self.additionals)
        {
            buf.extend_from_slice(&record.name);
            buf.extend_from_slice(&record.record_type.to_be_bytes());
            buf.extend_from_slice(&1u16.to_be_bytes());
            buf.extend_from_slice(&record.ttl.to_be_bytes());
            buf.extend_from_slice(&(record.data.len() as u16).to_be_bytes());
            buf.extend_from_slice(&record.data);
        }

        buf
    }
}

fn a_record(name: &str, ip: [u8; 4]) -> RawRecord {
    RawRecord {
        name: encode_name(name).unwrap(),
        record_type: RecordType::A.to_u16(),
        ttl: 300,
        data: ip.to_vec(),
    }
}

fn ns_record(zone: &str, nameserver: &str) -> RawRecord {
    RawRecord {
        name: encode_name(zone).unwrap(),
        record_type: RecordType::NS.to_u16(),
        ttl: 172800,
        data: encode_name(nameserver).unwrap(),
    }
}
