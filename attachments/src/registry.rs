//! The type registry: discriminator → attachment decoder dispatch.
//!
//! Built once from the static variant list, then read-only for the life of
//! the process. Concurrent `dispatch` calls need no locking.

use std::collections::HashMap;
use std::sync::OnceLock;

use karst_encoding::Decoder;
use tracing::debug;

use crate::error::{AttachmentError, DuplicateRegistration};
use crate::{
    alias_sell, dgs_delivery, discriminator, escrow_result, reward_recipient, set_account_info,
    Attachment,
};

/// Decode entry point for one attachment variant.
pub type DecodeFn = fn(&mut Decoder<'_>) -> Result<Attachment, AttachmentError>;

/// Immutable table mapping discriminators to variant decoders.
#[derive(Debug, Default)]
pub struct Registry {
    table: HashMap<u16, DecodeFn>,
}

/// Builder that enforces discriminator uniqueness at construction time.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    table: HashMap<u16, DecodeFn>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a decoder for `discriminator`.
    ///
    /// A duplicate discriminator is a programming error in the variant list
    /// and is rejected immediately rather than shadowing the first entry.
    pub fn register(
        &mut self,
        discriminator: u16,
        decode: DecodeFn,
    ) -> Result<(), DuplicateRegistration> {
        if self.table.contains_key(&discriminator) {
            return Err(DuplicateRegistration { discriminator });
        }
        self.table.insert(discriminator, decode);
        debug!(discriminator, "registered attachment variant");
        Ok(())
    }

    pub fn build(self) -> Registry {
        Registry { table: self.table }
    }
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Number of registered variants.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Whether a decoder is registered for `discriminator`.
    pub fn contains(&self, discriminator: u16) -> bool {
        self.table.contains_key(&discriminator)
    }

    /// Decode `buf` as the attachment registered under `discriminator`.
    ///
    /// An unknown discriminator is reported without touching the buffer, so
    /// the caller can decide how to treat unsupported transaction kinds.
    /// Variant decode errors propagate unchanged.
    pub fn dispatch(&self, discriminator: u16, buf: &[u8]) -> Result<Attachment, AttachmentError> {
        let decode = self
            .table
            .get(&discriminator)
            .ok_or(AttachmentError::UnknownType { discriminator })?;
        let mut decoder = Decoder::new(buf);
        decode(&mut decoder)
    }

    /// [`Registry::dispatch`] with the discriminator composed from the
    /// transaction header's (type, subtype) pair.
    pub fn dispatch_parts(
        &self,
        tx_type: u8,
        subtype: u8,
        buf: &[u8],
    ) -> Result<Attachment, AttachmentError> {
        self.dispatch(discriminator(tx_type, subtype), buf)
    }
}

fn decode_alias_sell(d: &mut Decoder<'_>) -> Result<Attachment, AttachmentError> {
    alias_sell::AliasSellAttachment::decode_attachment(d).map(Attachment::AliasSell)
}

fn decode_dgs_delivery(d: &mut Decoder<'_>) -> Result<Attachment, AttachmentError> {
    dgs_delivery::DgsDeliveryAttachment::decode_attachment(d).map(Attachment::DgsDelivery)
}

fn decode_escrow_result(d: &mut Decoder<'_>) -> Result<Attachment, AttachmentError> {
    escrow_result::EscrowResultAttachment::decode_attachment(d).map(Attachment::EscrowResult)
}

fn decode_reward_recipient(d: &mut Decoder<'_>) -> Result<Attachment, AttachmentError> {
    reward_recipient::RewardRecipientAssignmentAttachment::decode_attachment(d)
        .map(Attachment::RewardRecipientAssignment)
}

fn decode_set_account_info(d: &mut Decoder<'_>) -> Result<Attachment, AttachmentError> {
    set_account_info::SetAccountInfoAttachment::decode_attachment(d).map(Attachment::SetAccountInfo)
}

/// Every known attachment variant, in registration order.
const KNOWN_VARIANTS: &[(u16, DecodeFn)] = &[
    (
        discriminator(alias_sell::TYPE, alias_sell::SUBTYPE),
        decode_alias_sell,
    ),
    (
        discriminator(dgs_delivery::TYPE, dgs_delivery::SUBTYPE),
        decode_dgs_delivery,
    ),
    (
        discriminator(escrow_result::TYPE, escrow_result::SUBTYPE),
        decode_escrow_result,
    ),
    (
        discriminator(reward_recipient::TYPE, reward_recipient::SUBTYPE),
        decode_reward_recipient,
    ),
    (
        discriminator(set_account_info::TYPE, set_account_info::SUBTYPE),
        decode_set_account_info,
    ),
];

/// The process-wide registry of all known attachment variants.
///
/// Built on first access, immutable afterwards. A duplicate discriminator in
/// the variant list aborts immediately; deferring that would let a wrong
/// table decode historical data.
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut builder = Registry::builder();
        for (discriminator, decode) in KNOWN_VARIANTS {
            builder
                .register(*discriminator, *decode)
                .expect("duplicate attachment discriminator");
        }
        builder.build()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AttachmentCodec;

    #[test]
    fn global_registry_covers_every_variant() {
        let registry = registry();
        assert_eq!(registry.len(), KNOWN_VARIANTS.len());
        for (discriminator, _) in KNOWN_VARIANTS {
            assert!(registry.contains(*discriminator));
        }
    }

    #[test]
    fn dispatch_selects_the_right_decoder() {
        let bytes = [
            0x2a, 0, 0, 0, 0, 0, 0, 0, // escrow_id = 42
            1, // decision
        ];
        let att = registry().dispatch_parts(21, 2, &bytes).unwrap();
        match att {
            Attachment::EscrowResult(e) => {
                assert_eq!(e.escrow_id, 42);
                assert_eq!(e.decision, 1);
            }
            other => panic!("wrong variant: {other:?}"),
        }
        assert_eq!(att.get_type(), discriminator(21, 2));
    }

    #[test]
    fn unknown_discriminator_is_reported() {
        let disc = discriminator(0xab, 0xcd);
        let err = registry().dispatch(disc, &[1, 2, 3]).unwrap_err();
        assert_eq!(err, AttachmentError::UnknownType {
            discriminator: disc,
        });
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut builder = Registry::builder();
        builder.register(discriminator(1, 6), decode_alias_sell).unwrap();
        let err = builder
            .register(discriminator(1, 6), decode_set_account_info)
            .unwrap_err();
        assert_eq!(err, DuplicateRegistration {
            discriminator: discriminator(1, 6),
        });
        // The first registration survives.
        let registry = builder.build();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(discriminator(1, 6)));
    }

    #[test]
    fn empty_builder_builds_an_empty_registry() {
        let registry = Registry::builder().build();
        assert!(registry.is_empty());
        let err = registry.dispatch(0, &[]).unwrap_err();
        assert!(matches!(err, AttachmentError::UnknownType { .. }));
    }
}
