//! Transaction attachment variants and the type registry.
//!
//! Every transaction carries an attachment: the variable-format payload that
//! follows the fixed header. Each variant here owns its field layout, encode
//! logic, decode logic, and exact encoded size. The [`registry`] maps the
//! 16-bit (type, subtype) discriminator to the variant's decoder so an
//! incoming transaction dispatches to the right codec.
//!
//! Attachment kinds:
//! - **AliasSell**: offer a registered alias for sale
//! - **DgsDelivery**: deliver encrypted digital goods for a purchase
//! - **EscrowResult**: record the outcome of an escrow
//! - **RewardRecipientAssignment**: assign block rewards to another account
//! - **SetAccountInfo**: set an account's name and description

pub mod alias_sell;
pub mod dgs_delivery;
pub mod error;
pub mod escrow_result;
pub mod registry;
pub mod reward_recipient;
pub mod set_account_info;

use karst_encoding::Encoder;
use serde::{Deserialize, Serialize};

pub use alias_sell::AliasSellAttachment;
pub use dgs_delivery::DgsDeliveryAttachment;
pub use error::{AttachmentError, DuplicateRegistration};
pub use escrow_result::EscrowResultAttachment;
pub use registry::{registry, DecodeFn, Registry, RegistryBuilder};
pub use reward_recipient::RewardRecipientAssignmentAttachment;
pub use set_account_info::SetAccountInfoAttachment;

/// Combine a transaction type and subtype into the 16-bit discriminator.
pub const fn discriminator(tx_type: u8, subtype: u8) -> u16 {
    (subtype as u16) << 8 | tx_type as u16
}

/// The codec surface every attachment variant satisfies.
///
/// `encoded_size` must equal the exact number of bytes `write_attachment`
/// emits for the current field values. Transaction size and fee logic rely
/// on that equality without performing a trial encode.
pub trait AttachmentCodec {
    /// The variant's discriminator (`subtype << 8 | type`), constant per variant.
    fn get_type(&self) -> u16;

    /// Exact byte length `write_attachment` will produce.
    fn encoded_size(&self) -> usize;

    /// Append the attachment fields, in the variant's fixed order, to `encoder`.
    fn write_attachment(&self, encoder: &mut Encoder);
}

/// The unified attachment enum wrapping all variants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attachment {
    AliasSell(AliasSellAttachment),
    DgsDelivery(DgsDeliveryAttachment),
    EscrowResult(EscrowResultAttachment),
    RewardRecipientAssignment(RewardRecipientAssignmentAttachment),
    SetAccountInfo(SetAccountInfoAttachment),
}

impl AttachmentCodec for Attachment {
    fn get_type(&self) -> u16 {
        match self {
            Self::AliasSell(a) => a.get_type(),
            Self::DgsDelivery(a) => a.get_type(),
            Self::EscrowResult(a) => a.get_type(),
            Self::RewardRecipientAssignment(a) => a.get_type(),
            Self::SetAccountInfo(a) => a.get_type(),
        }
    }

    fn encoded_size(&self) -> usize {
        match self {
            Self::AliasSell(a) => a.encoded_size(),
            Self::DgsDelivery(a) => a.encoded_size(),
            Self::EscrowResult(a) => a.encoded_size(),
            Self::RewardRecipientAssignment(a) => a.encoded_size(),
            Self::SetAccountInfo(a) => a.encoded_size(),
        }
    }

    fn write_attachment(&self, encoder: &mut Encoder) {
        match self {
            Self::AliasSell(a) => a.write_attachment(encoder),
            Self::DgsDelivery(a) => a.write_attachment(encoder),
            Self::EscrowResult(a) => a.write_attachment(encoder),
            Self::RewardRecipientAssignment(a) => a.write_attachment(encoder),
            Self::SetAccountInfo(a) => a.write_attachment(encoder),
        }
    }
}

impl Attachment {
    /// Encode into a fresh buffer pre-sized by `encoded_size`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut encoder = Encoder::with_capacity(self.encoded_size());
        self.write_attachment(&mut encoder);
        encoder.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminator_combines_subtype_high_type_low() {
        assert_eq!(discriminator(1, 6), 6 * 256 + 1);
        assert_eq!(discriminator(21, 2), 2 * 256 + 21);
        assert_eq!(discriminator(20, 0), 20);
        assert_eq!(discriminator(0xff, 0xff), 0xffff);
    }

    #[test]
    fn enum_delegates_to_the_wrapped_variant() {
        let att = Attachment::EscrowResult(EscrowResultAttachment {
            escrow_id: 7,
            decision: 1,
        });
        assert_eq!(att.get_type(), discriminator(21, 2));
        assert_eq!(att.encoded_size(), 9);
        assert_eq!(att.to_bytes().len(), 9);
    }
}
