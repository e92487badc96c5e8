#![allow(dead_code)]
use rootwalk_domain::wire::encode_name;
use rootwalk_domain::{
    Header, Message, Question, RecordData, RecordType, ResourceRecord, CLASS_IN,
};
use std::net::Ipv4Addr;

/// Builds nameserver replies as a `Message` and serialises them without
/// name compression.
pub struct ResponseBuilder {
    message: Message,
}

impl ResponseBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            message: Message {
                header: Header {
                    id,
                    flags: 0x8000,
                    ..Header::default()
                },
                questions: Vec::new(),
                answers: Vec::new(),
                authorities: Vec::new(),
                additionals: Vec::new(),
            },
        }
    }

    pub fn question(mut self, name: &str) -> Self {
        self.message
            .questions
            .push(Question::new(name, RecordType::A.to_u16(), CLASS_IN));
        self
    }

    pub fn answer_a(mut self, name: &str, ip: [u8; 4]) -> Self {
        self.message.answers.push(address(name, ip));
        self
    }

    pub fn authority_ns(mut self, zone: &str, nameserver: &str) -> Self {
        self.message.authorities.push(ResourceRecord {
            name: zone.to_string(),
            record_type: RecordType::NS.to_u16(),
            class: CLASS_IN,
            ttl: 172800,
            data: RecordData::NameServer(nameserver.to_string()),
        });
        self
    }

    pub fn authority_opaque(mut self, zone: &str, record_type: u16, data: &[u8]) -> Self {
        self.message.authorities.push(opaque(zone, record_type, data));
        self
    }

    pub fn additional_a(mut self, name: &str, ip: [u8; 4]) -> Self {
        self.message.additionals.push(address(name, ip));
        self
    }

    pub fn additional_opaque(mut self, name: &str, record_type: u16, data: &[u8]) -> Self {
        self.message.additionals.push(opaque(name, record_type, data));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let Message {
            mut header,
            questions,
            answers,
            authorities,
            additionals,
        } = self.message;
        header.question_count = questions.len() as u16;
        header.answer_count = answers.len() as u16;
        header.authority_count = authorities.len() as u16;
        header.additional_count = additionals.len() as u16;

        let mut buf = header.to_bytes().to_vec();
        for question in &questions {
            question.write_to(&mut buf).unwrap();
        }
        for record in answers.iter().chain(&authorities).chain(&additionals) {
            write_record(record, &mut buf);
        }
        buf
    }
}

fn address(name: &str, ip: [u8; 4]) -> ResourceRecord {
    ResourceRecord {
        name: name.to_string(),
        record_type: RecordType::A.to_u16(),
        class: CLASS_IN,
        ttl: 300,
        data: RecordData::Address(Ipv4Addr::from(ip).to_string()),
    }
}

fn opaque(name: &str, record_type: u16, data: &[u8]) -> ResourceRecord {
    ResourceRecord {
        name: name.to_string(),
        record_type,
        class: CLASS_IN,
        ttl: 3600,
        data: RecordData::Opaque(data.to_vec()),
    }
}

fn write_record(record: &ResourceRecord, buf: &mut Vec<u8>) {
    let rdata = match &record.data {
        RecordData::Address(ip) => ip.parse::<Ipv4Addr>().unwrap().octets().to_vec(),
        RecordData::NameServer(name) => encode_name(name).unwrap(),
        RecordData::Opaque(bytes) => bytes.clone(),
    };

    buf.extend_from_slice(&encode_name(&record.name).unwrap());
    buf.extend_from_slice(&record.record_type.to_be_bytes());
    buf.extend_from_slice(&record.class.to_be_bytes());
    buf.extend_from_slice(&record.ttl.to_be_bytes());
    buf.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    buf.extend_from_slice(&rdata);
}
