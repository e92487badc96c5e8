use crate::errors::DomainError;

/// Bounds-checked big-endian cursor over a complete DNS message.
///
/// The underlying slice always starts at the first header byte, so
/// compression pointers can be resolved with [`WireReader::fork`].
#[derive(Debug, Clone, Copy)]
pub struct WireReader<'a> {
    message: &'a [u8],
    position: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(message: &'a [u8]) -> Self {
        Self {
            message,
            position: 0,
        }
    }

    /// A second cursor over the same message at an absolute offset.
    /// The original cursor is left untouched.
    pub fn fork(&self, offset: usize) -> Self {
        Self {
            message: self.message,
            position: offset,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.message.len().saturating_sub(self.position)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DomainError> {
        if self.remaining() < len {
            return Err(DomainError::TruncatedMessage {
                offset: self.position,
                needed: len,
                available: self.remaining(),
            });
        }
        let bytes = &self.message[self.position..self.position + len];
        self.position += len;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8, DomainError> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, DomainError> {
        let b = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, DomainError> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }
}
