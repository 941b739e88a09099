//! Escrow result attachment: the recorded outcome of an escrow.

use karst_encoding::{Decoder, Encoder};
use serde::{Deserialize, Serialize};

use crate::error::AttachmentError;
use crate::{discriminator, AttachmentCodec};

pub const TYPE: u8 = 21;
pub const SUBTYPE: u8 = 2;

/// Attachment for an escrow result transaction.
///
/// `decision` is an enumeration byte (0 undecided, 1 release, 2 refund,
/// 3 split). Kept as a raw `u8` so unrecognized future values still decode;
/// interpretation is the ledger's concern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowResultAttachment {
    pub escrow_id: u64,
    pub decision: u8,
}

impl EscrowResultAttachment {
    /// Empty attachment for building a new outgoing transaction.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decode_attachment(decoder: &mut Decoder<'_>) -> Result<Self, AttachmentError> {
        let escrow_id = decoder.read_u64()?;
        let decision = decoder.read_u8()?;
        Ok(Self {
            escrow_id,
            decision,
        })
    }
}

impl AttachmentCodec for EscrowResultAttachment {
    fn get_type(&self) -> u16 {
        discriminator(TYPE, SUBTYPE)
    }

    fn encoded_size(&self) -> usize {
        8 + 1
    }

    fn write_attachment(&self, encoder: &mut Encoder) {
        encoder.write_u64(self.escrow_id);
        encoder.write_u8(self.decision);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use karst_encoding::CodecError;

    #[test]
    fn canonical_encoding() {
        let att = EscrowResultAttachment {
            escrow_id: 0x0102_0304_0506_0708,
            decision: 2,
        };
        let mut e = Encoder::new();
        att.write_attachment(&mut e);
        let bytes = e.into_bytes();
        assert_eq!(bytes.len(), att.encoded_size());
        assert_eq!(
            bytes,
            vec![0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01, 2]
        );
    }

    #[test]
    fn roundtrip() {
        let att = EscrowResultAttachment {
            escrow_id: u64::MAX,
            decision: 0xfe, // unrecognized decision bytes still decode
        };
        let mut e = Encoder::new();
        att.write_attachment(&mut e);
        let bytes = e.into_bytes();
        let decoded = EscrowResultAttachment::decode_attachment(&mut Decoder::new(&bytes)).unwrap();
        assert_eq!(decoded, att);
    }

    #[test]
    fn missing_decision_byte_is_truncated() {
        let bytes = [0u8; 8];
        let err = EscrowResultAttachment::decode_attachment(&mut Decoder::new(&bytes)).unwrap_err();
        assert_eq!(
            err,
            AttachmentError::Codec(CodecError::Truncated {
                needed: 1,
                remaining: 0,
            })
        );
    }
}
