//! Digital goods delivery attachment: encrypted goods for a DGS purchase.

use karst_encoding::{CodecError, Decoder, Encoder};
use serde::{Deserialize, Serialize};

use crate::error::AttachmentError;
use crate::{discriminator, AttachmentCodec};

pub const TYPE: u8 = 3;
pub const SUBTYPE: u8 = 5;

/// Shortest well-formed delivery: purchase id, the length field, and the
/// first bytes of the data/nonce region.
const MIN_WIRE_LEN: usize = 16;

/// Attachment for a digital goods delivery transaction.
///
/// Wire quirk, preserved on purpose: the number of `goods_data` bytes on the
/// wire is taken from the low 16 bits of the encoded `goods_length` field,
/// not from its full 32-bit value. `goods_length` itself declares the
/// plaintext length of the goods. For an encoding to round-trip, the low 16
/// bits of `goods_length` must equal `goods_data.len()`; historical
/// transactions rely on exactly this reading, so it must not be "fixed".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DgsDeliveryAttachment {
    pub purchase_id: u64,
    /// Declared plaintext length; the low 16 bits double as the wire length
    /// of `goods_data`.
    pub goods_length: u32,
    /// Encrypted goods. At most 65535 bytes on the wire.
    pub goods_data: Vec<u8>,
    pub goods_nonce: [u8; 32],
    pub discount: u64,
}

impl DgsDeliveryAttachment {
    /// Empty attachment for building a new outgoing transaction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a delivery whose `goods_length` low half matches the payload,
    /// so the attachment round-trips.
    pub fn with_goods(
        purchase_id: u64,
        goods_data: Vec<u8>,
        goods_nonce: [u8; 32],
        discount: u64,
    ) -> Self {
        let goods_length = goods_data.len() as u32;
        Self {
            purchase_id,
            goods_length,
            goods_data,
            goods_nonce,
            discount,
        }
    }

    pub fn decode_attachment(decoder: &mut Decoder<'_>) -> Result<Self, AttachmentError> {
        if decoder.remaining() < MIN_WIRE_LEN {
            return Err(CodecError::Truncated {
                needed: MIN_WIRE_LEN - decoder.remaining(),
                remaining: decoder.remaining(),
            }
            .into());
        }
        let purchase_id = decoder.read_u64()?;
        let goods_length = decoder.read_u32()?;
        // The wire length of goods_data is the low 16 bits of goods_length.
        let wire_len = (goods_length & 0xffff) as usize;
        let goods_data = decoder.read_bytes(wire_len)?.to_vec();
        let goods_nonce: [u8; 32] = decoder
            .read_bytes(32)?
            .try_into()
            .expect("checked length");
        let discount = decoder.read_u64()?;
        Ok(Self {
            purchase_id,
            goods_length,
            goods_data,
            goods_nonce,
            discount,
        })
    }
}

impl AttachmentCodec for DgsDeliveryAttachment {
    fn get_type(&self) -> u16 {
        discriminator(TYPE, SUBTYPE)
    }

    fn encoded_size(&self) -> usize {
        8 + 4 + self.goods_data.len() + 32 + 8
    }

    fn write_attachment(&self, encoder: &mut Encoder) {
        encoder.write_u64(self.purchase_id);
        encoder.write_u32(self.goods_length);
        encoder.write_bytes(&self.goods_data);
        encoder.write_bytes(&self.goods_nonce);
        encoder.write_u64(self.discount);
    }
}
