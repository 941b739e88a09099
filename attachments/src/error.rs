//! Attachment decode and registry errors.

use karst_encoding::CodecError;
use thiserror::Error;

/// Errors surfaced while decoding an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    /// Malformed bytes: truncated input or a bad length prefix.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// No variant is registered for this discriminator. The caller decides
    /// whether an unsupported transaction kind is invalid or merely unknown.
    #[error("no attachment variant registered for discriminator {discriminator}")]
    UnknownType { discriminator: u16 },
}

/// Two variants registered under the same discriminator.
///
/// This is a programming error in the variant list; the registry refuses to
/// build and the process should abort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate attachment registration for discriminator {discriminator}")]
pub struct DuplicateRegistration {
    pub discriminator: u16,
}
