//! Error types for PRM80 field decoding

use thiserror::Error;

use crate::field::Radix;

/// Errors that can occur while decoding protocol fields
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Field did not have the expected number of bytes
    #[error("incomplete field: expected {expected} bytes, got {actual}")]
    Incomplete { expected: usize, actual: usize },

    /// Bytes are not valid digits in the field's radix
    #[error("invalid {radix} digits: {raw:?}")]
    InvalidDigits { radix: Radix, raw: String },

    /// Decoded value does not fit the target integer
    #[error("value {value} out of range (max {max})")]
    OutOfRange { value: u32, max: u32 },
}
