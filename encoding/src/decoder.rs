//! Forward-only cursor over an immutable byte buffer.

use crate::CodecError;

/// Sequential decoder over one attachment's bytes.
///
/// Every read checks the remaining length immediately before consuming.
/// Variable-length fields make the required total unknown up front, so the
/// check cannot be hoisted to construction time.
#[derive(Debug)]
pub struct Decoder<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Byte offset of the cursor from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        let remaining = self.remaining();
        if remaining < n {
            return Err(CodecError::Truncated {
                needed: n - remaining,
                remaining,
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, CodecError> {
        let bytes = self.take(2)?;
        Ok(u16::from_le_bytes(bytes.try_into().expect("checked length")))
    }

    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes(bytes.try_into().expect("checked length")))
    }

    pub fn read_u64(&mut self) -> Result<u64, CodecError> {
        let bytes = self.take(8)?;
        Ok(u64::from_le_bytes(bytes.try_into().expect("checked length")))
    }

    pub fn read_i64(&mut self) -> Result<i64, CodecError> {
        let bytes = self.take(8)?;
        Ok(i64::from_le_bytes(bytes.try_into().expect("checked length")))
    }

    /// Read `n` raw bytes as a slice borrowed from the input buffer.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        self.take(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_advance_the_cursor() {
        let buf = [0x01, 0x02, 0x03, 0x04, 0x05];
        let mut d = Decoder::new(&buf);
        assert_eq!(d.read_u8().unwrap(), 0x01);
        assert_eq!(d.position(), 1);
        assert_eq!(d.read_u16().unwrap(), 0x0302);
        assert_eq!(d.position(), 3);
        assert_eq!(d.remaining(), 2);
        assert_eq!(d.read_bytes(2).unwrap(), &[0x04, 0x05]);
        assert!(d.is_empty());
    }

    #[test]
    fn integers_are_little_endian() {
        let buf = 0x1122_3344_5566_7788u64.to_le_bytes();
        let mut d = Decoder::new(&buf);
        assert_eq!(d.read_u64().unwrap(), 0x1122_3344_5566_7788);
    }

    #[test]
    fn signed_read_recovers_negative_values() {
        let buf = (-42i64).to_le_bytes();
        let mut d = Decoder::new(&buf);
        assert_eq!(d.read_i64().unwrap(), -42);
    }

    #[test]
    fn truncated_read_reports_shortfall() {
        let buf = [0x01, 0x02, 0x03];
        let mut d = Decoder::new(&buf);
        assert_eq!(
            d.read_u64(),
            Err(CodecError::Truncated {
                needed: 5,
                remaining: 3,
            })
        );
        // A failed read must not move the cursor.
        assert_eq!(d.position(), 0);
        assert_eq!(d.read_u16().unwrap(), 0x0201);
    }

    #[test]
    fn truncation_is_detected_mid_buffer() {
        let buf = [0u8; 10];
        let mut d = Decoder::new(&buf);
        d.read_u64().unwrap();
        assert_eq!(
            d.read_u32(),
            Err(CodecError::Truncated {
                needed: 2,
                remaining: 2,
            })
        );
    }

    #[test]
    fn zero_length_byte_read_always_succeeds() {
        let mut d = Decoder::new(&[]);
        assert_eq!(d.read_bytes(0).unwrap(), &[] as &[u8]);
        assert!(d.is_empty());
    }
}
