//! Append-only little-endian byte sink.

/// Sequential encoder for attachment payloads.
///
/// Writes never fail; the buffer grows as needed. Each attachment variant
/// appends its fields in a fixed order, then takes the finished bytes with
/// [`Encoder::into_bytes`].
#[derive(Debug, Default)]
pub struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Pre-size the buffer when the caller already knows the encoded size.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i64(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Append raw bytes with no length prefix; the variant's layout decides
    /// how the length is recovered on the decode side.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the encoder and return the finished byte sequence.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_little_endian() {
        let mut e = Encoder::new();
        e.write_u16(0x0102);
        e.write_u32(0x0304_0506);
        e.write_u64(0x0708_090a_0b0c_0d0e);
        assert_eq!(
            e.into_bytes(),
            vec![
                0x02, 0x01, // u16
                0x06, 0x05, 0x04, 0x03, // u32
                0x0e, 0x0d, 0x0c, 0x0b, 0x0a, 0x09, 0x08, 0x07, // u64
            ]
        );
    }

    #[test]
    fn signed_writes_use_twos_complement() {
        let mut e = Encoder::new();
        e.write_i64(-1);
        assert_eq!(e.into_bytes(), vec![0xff; 8]);
    }

    #[test]
    fn writes_append_in_order() {
        let mut e = Encoder::new();
        e.write_u8(1);
        e.write_bytes(&[2, 3]);
        e.write_u8(4);
        assert_eq!(e.len(), 4);
        assert_eq!(e.as_bytes(), &[1, 2, 3, 4]);
    }

    #[test]
    fn empty_encoder_yields_empty_buffer() {
        let e = Encoder::new();
        assert!(e.is_empty());
        assert!(e.into_bytes().is_empty());
    }

    #[test]
    fn with_capacity_starts_empty() {
        let e = Encoder::with_capacity(64);
        assert_eq!(e.len(), 0);
    }
}
