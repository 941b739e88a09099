//! Reward recipient assignment attachment.

use karst_encoding::{Decoder, Encoder};
use serde::{Deserialize, Serialize};

use crate::error::AttachmentError;
use crate::{discriminator, AttachmentCodec};

pub const TYPE: u8 = 20;
pub const SUBTYPE: u8 = 0;

/// Attachment for a reward recipient assignment.
///
/// Carries no payload: the assignment is expressed entirely by the
/// transaction header. It still participates in dispatch so the registry
/// covers every known transaction kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRecipientAssignmentAttachment;

impl RewardRecipientAssignmentAttachment {
    pub fn new() -> Self {
        Self
    }

    /// Always succeeds; the buffer is not read.
    pub fn decode_attachment(_decoder: &mut Decoder<'_>) -> Result<Self, AttachmentError> {
        Ok(Self)
    }
}

impl AttachmentCodec for RewardRecipientAssignmentAttachment {
    fn get_type(&self) -> u16 {
        discriminator(TYPE, SUBTYPE)
    }

    fn encoded_size(&self) -> usize {
        0
    }

    fn write_attachment(&self, _encoder: &mut Encoder) {}
}
