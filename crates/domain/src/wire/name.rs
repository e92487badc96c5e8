//! Domain name encoding (RFC 1035 §3.1) and decoding with compression
//! pointers (RFC 1035 §4.1.4).

use super::reader::WireReader;
use crate::errors::DomainError;

/// Longest label the length octet can describe without colliding with
/// the pointer tag bits.
pub const MAX_LABEL_LEN: usize = 63;

/// Pointer follows allowed while decoding a single name.
pub const MAX_POINTER_HOPS: usize = 64;

const POINTER_TAG: u8 = 0b1100_0000;

/// Encode a dotted name as length-prefixed labels followed by a zero octet.
///
/// Empty labels are skipped, so `"example.com."` and `"example.com"` encode
/// identically and `""` encodes as the root name.
pub fn encode_name(name: &str) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(name.len() + 2);
    for label in name.split('.').filter(|l| !l.is_empty()) {
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::Encoding(format!(
                "label '{}' is {} bytes, limit is {}",
                label,
                label.len(),
                MAX_LABEL_LEN
            )));
        }
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0);
    Ok(buf)
}

/// Decode a name at the reader's cursor.
///
/// On return the cursor sits just past the name as it appears at the
/// original position: after the terminating zero, or after the two pointer
/// bytes if the name ended in a compression pointer.
pub fn decode_name(reader: &mut WireReader<'_>) -> Result<String, DomainError> {
    decode_labels(reader, MAX_POINTER_HOPS)
}

fn decode_labels(reader: &mut WireReader<'_>, hops_left: usize) -> Result<String, DomainError> {
    let mut labels: Vec<String> = Vec::new();

    loop {
        let length = reader.read_u8()?;

        if length == 0 {
            break;
        }

        if length & POINTER_TAG == POINTER_TAG {
            let low = reader.read_u8()?;
            let offset = u16::from_be_bytes([length & !POINTER_TAG, low]) as usize;

            if hops_left == 0 {
                return Err(DomainError::MalformedName(format!(
                    "compression pointer chain longer than {} hops (last target offset {})",
                    MAX_POINTER_HOPS, offset
                )));
            }

            // The pointer is always the last component; the caller's cursor
            // stays right after it.
            let mut target = reader.fork(offset);
            let suffix = decode_labels(&mut target, hops_left - 1)?;
            if !suffix.is_empty() {
                labels.push(suffix);
            }
            break;
        }

        let label = reader.read_bytes(length as usize)?;
        labels.push(String::from_utf8_lossy(label).into_owned());
    }

    Ok(labels.join("."))
}
