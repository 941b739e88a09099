//! Alias sell attachment: offer a registered alias for sale at a price.

use karst_encoding::{CodecError, Decoder, Encoder};
use serde::{Deserialize, Serialize};

use crate::error::AttachmentError;
use crate::{discriminator, AttachmentCodec};

pub const TYPE: u8 = 1;
pub const SUBTYPE: u8 = 6;

/// Attachment for an alias sell transaction.
///
/// A price of zero offers the alias as a free transfer to the recipient
/// named in the transaction header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasSellAttachment {
    /// Alias name bytes. At most 255; the wire format carries a 1-byte
    /// length prefix, so longer names cannot be encoded.
    pub name: Vec<u8>,
    /// Asking price in planck. Signed to match the wire format.
    pub price: i64,
}

impl AliasSellAttachment {
    /// Empty attachment for building a new outgoing transaction.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decode_attachment(decoder: &mut Decoder<'_>) -> Result<Self, AttachmentError> {
        let len = decoder.read_u8()? as usize;
        if decoder.remaining() < len {
            return Err(CodecError::InvalidLength {
                field: "name",
                declared: len,
                remaining: decoder.remaining(),
            }
            .into());
        }
        let name = decoder.read_bytes(len)?.to_vec();
        let price = decoder.read_i64()?;
        Ok(Self { name, price })
    }
}

impl AttachmentCodec for AliasSellAttachment {
    fn get_type(&self) -> u16 {
        discriminator(TYPE, SUBTYPE)
    }

    fn encoded_size(&self) -> usize {
        1 + self.name.len() + 8
    }

    fn write_attachment(&self, encoder: &mut Encoder) {
        encoder.write_u8(self.name.len() as u8);
        encoder.write_bytes(&self.name);
        encoder.write_i64(self.price);
    }
}
