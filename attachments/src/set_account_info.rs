//! Set account info attachment: an account's public name and description.

use karst_encoding::{CodecError, Decoder, Encoder};
use serde::{Deserialize, Serialize};

use crate::error::AttachmentError;
use crate::{discriminator, AttachmentCodec};

pub const TYPE: u8 = 1;
pub const SUBTYPE: u8 = 5;

/// Attachment for a set account info transaction.
///
/// Both fields are length-prefixed with one byte each, so neither can
/// exceed 255 bytes on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetAccountInfoAttachment {
    pub name: Vec<u8>,
    pub description: Vec<u8>,
}

impl SetAccountInfoAttachment {
    /// Empty attachment for building a new outgoing transaction.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decode_attachment(decoder: &mut Decoder<'_>) -> Result<Self, AttachmentError> {
        let name = read_prefixed(decoder, "name")?;
        let description = read_prefixed(decoder, "description")?;
        Ok(Self { name, description })
    }
}

fn read_prefixed(decoder: &mut Decoder<'_>, field: &'static str) -> Result<Vec<u8>, AttachmentError> {
    let len = decoder.read_u8()? as usize;
    if decoder.remaining() < len {
        return Err(CodecError::InvalidLength {
            field,
            declared: len,
            remaining: decoder.remaining(),
        }
        .into());
    }
    Ok(decoder.read_bytes(len)?.to_vec())
}

impl AttachmentCodec for SetAccountInfoAttachment {
    fn get_type(&self) -> u16 {
        discriminator(TYPE, SUBTYPE)
    }

    fn encoded_size(&self) -> usize {
        2 + self.name.len() + self.description.len()
    }

    fn write_attachment(&self, encoder: &mut Encoder) {
        encoder.write_u8(self.name.len() as u8);
        encoder.write_bytes(&self.name);
        encoder.write_u8(self.description.len() as u8);
        encoder.write_bytes(&self.description);
    }
}
