//! DNS Message Parser
//!
//! Decodes a complete response buffer into a [`Message`]. Exactly as many
//! entries are read per section as the header announces.

use super::name::decode_name;
use super::reader::WireReader;
use crate::dns_message::{Header, Message, Question, RecordData, ResourceRecord};
use crate::dns_record::RecordType;
use crate::errors::DomainError;

pub struct MessageParser;

impl MessageParser {
    pub fn parse(bytes: &[u8]) -> Result<Message, DomainError> {
        let mut reader = WireReader::new(bytes);
        let header = Self::parse_header(&mut reader)?;

        let questions = (0..header.question_count)
            .map(|_| Self::parse_question(&mut reader))
            .collect::<Result<Vec<_>, _>>()?;
        let answers = Self::parse_section(&mut reader, header.answer_count)?;
        let authorities = Self::parse_section(&mut reader, header.authority_count)?;
        let additionals = Self::parse_section(&mut reader, header.additional_count)?;

        Ok(Message {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }

    pub fn parse_header(reader: &mut WireReader<'_>) -> Result<Header, DomainError> {
        Ok(Header {
            id: reader.read_u16()?,
            flags: reader.read_u16()?,
            question_count: reader.read_u16()?,
            answer_count: reader.read_u16()?,
            authority_count: reader.read_u16()?,
            additional_count: reader.read_u16()?,
        })
    }

    pub fn parse_question(reader: &mut WireReader<'_>) -> Result<Question, DomainError> {
        let name = decode_name(reader)?;
        let qtype = reader.read_u16()?;
        let qclass = reader.read_u16()?;
        Ok(Question {
            name,
            qtype,
            qclass,
        })
    }

    pub fn parse_record(reader: &mut WireReader<'_>) -> Result<ResourceRecord, DomainError> {
        let name = decode_name(reader)?;
        let record_type = reader.read_u16()?;
        let class = reader.read_u16()?;
        let ttl = reader.read_u32()?;
        let data_len = reader.read_u16()? as usize;

        let data = match RecordType::from_u16(record_type) {
            // RDLENGTH is not enforced for NS: the name decoder decides how
            // many bytes the (possibly compressed) name occupies.
            Some(RecordType::NS) => RecordData::NameServer(decode_name(reader)?),
            Some(RecordType::A) => RecordData::Address(dotted_decimal(reader.read_bytes(data_len)?)),
            _ => RecordData::Opaque(reader.read_bytes(data_len)?.to_vec()),
        };

        Ok(ResourceRecord {
            name,
            record_type,
            class,
            ttl,
            data,
        })
    }

    fn parse_section(
        reader: &mut WireReader<'_>,
        count: u16,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        // Header counts are untrusted; never reserve more than the bytes left.
        let mut records = Vec::with_capacity((count as usize).min(reader.remaining()));
        for _ in 0..count {
            records.push(Self::parse_record(reader)?);
        }
        Ok(records)
    }
}

fn dotted_decimal(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(".")
}
