/// Size of the fixed DNS header on the wire.
pub const HEADER_LEN: usize = 12;

/// RD bit in the flags word.
pub const FLAG_RECURSION_DESIRED: u16 = 0x0100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,

    pub flags: u16,

    pub question_count: u16,

    pub answer_count: u16,

    pub authority_count: u16,

    pub additional_count: u16,
}

impl Header {
    /// Header for a single-question query.
    pub fn query(id: u16, recursion_desired: bool) -> Self {
        Self {
            id,
            flags: if recursion_desired {
                FLAG_RECURSION_DESIRED
            } else {
                0
            },
            question_count: 1,
            ..Self::default()
        }
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & FLAG_RECURSION_DESIRED != 0
    }

    /// Response code from the low four bits of the flags word.
    pub fn rcode(&self) -> u8 {
        (self.flags & 0x000f) as u8
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut b = [0u8; HEADER_LEN];
        b[0..2].copy_from_slice(&self.id.to_be_bytes());
        b[2..4].copy_from_slice(&self.flags.to_be_bytes());
        b[4..6].copy_from_slice(&self.question_count.to_be_bytes());
        b[6..8].copy_from_slice(&self.answer_count.to_be_bytes());
        b[8..10].copy_from_slice(&self.authority_count.to_be_bytes());
        b[10..12].copy_from_slice(&self.additional_count.to_be_bytes());
        b
    }
}
