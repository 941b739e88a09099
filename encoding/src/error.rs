//! Decode errors for the wire primitives.

use thiserror::Error;

/// Errors produced while decoding attachment bytes.
///
/// Both kinds mean the input is malformed; the caller rejects the whole
/// transaction rather than salvaging a partial attachment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The buffer ended before a fixed-width or counted read could complete.
    #[error("truncated input: need {needed} more bytes, {remaining} remain")]
    Truncated { needed: usize, remaining: usize },

    /// A length prefix declared more payload bytes than the buffer holds.
    /// Raised by the variant decoder so the error names the offending field.
    #[error("invalid length for {field}: declared {declared} bytes, {remaining} remain")]
    InvalidLength {
        field: &'static str,
        declared: usize,
        remaining: usize,
    },
}
