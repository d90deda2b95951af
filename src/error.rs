//! Error type for address construction.
//!
//! Every fallible constructor in the crate reports failures through the
//! single [`InvalidAddress`] type. Each variant renders a fixed message,
//! and those messages are part of the public contract.

use thiserror::Error;

/// Reasons an input could not be turned into an address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidAddress {
    /// An array input had the wrong number of elements.
    #[error("Invalid array element count, expected {expected} got {actual}.")]
    ElementCount {
        expected: &'static str,
        actual: usize,
    },

    /// A binary input had the wrong number of bytes.
    #[error("Invalid byte count, expected 4 or 16 got {actual}.")]
    ByteCount { actual: usize },

    /// A textual or integer input is not a legal address.
    #[error("Unrecognized address '{input}'.")]
    Unrecognized { input: String },

    /// An 8-bit component was outside `0..=255`.
    #[error("Byte must be between 0 and 255, got {value}.")]
    ByteOutOfRange { value: String },

    /// A 16-bit component was outside `0..=65535`.
    #[error("Segment must be between 0 and 65535, got {value}.")]
    SegmentOutOfRange { value: String },

    /// A dynamically typed component was not an integer.
    #[error("Byte must be a valid integer, got {kind}.")]
    NotAnInteger { kind: &'static str },
}

impl InvalidAddress {
    pub(crate) fn unrecognized(input: impl Into<String>) -> Self {
        InvalidAddress::Unrecognized {
            input: input.into(),
        }
    }
}

/// Result type alias using [`InvalidAddress`].
pub type Result<T> = std::result::Result<T, InvalidAddress>;
