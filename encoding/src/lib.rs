//! Little-endian wire primitives for transaction attachment payloads.
//!
//! Attachments are encoded as fixed-order sequences of little-endian integers
//! and raw byte runs. [`Encoder`] builds such a sequence; [`Decoder`] walks
//! one with a bounds check before every read, so malformed input surfaces as
//! a [`CodecError`] instead of a panic.

pub mod decoder;
pub mod encoder;
pub mod error;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::CodecError;
