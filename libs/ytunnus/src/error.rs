//! Error types for business ID building and validation.

use thiserror::Error;

/// Errors that can occur when building, parsing, or inspecting business IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BusinessIdError {
    /// The input is not a 7-digit base or not a `DDDDDDD-C` shaped ID.
    #[error("not valid business id: {message}")]
    InvalidFormat { message: String },

    /// The digit sequence handed to the checksum engine is malformed.
    #[error("not valid business id: {len} values given, expected 7 decimal digits")]
    InvalidInput { len: usize },

    /// Multiplier lookup outside the weight table.
    #[error("Index out of bounds: {index}")]
    IndexOutOfRange { index: usize },

    /// The ID has a separator but nothing in front of it.
    #[error("not valid business id: missing base id")]
    MissingBaseId,

    /// The check digit does not match the one computed from the base.
    #[error("business id checksum mismatch: expected '{expected}', got '{actual}'")]
    ChecksumMismatch { expected: String, actual: String },

    /// The base's check digit would be 10, which no issued ID can have.
    #[error("base {base} has no valid check digit")]
    NoCheckDigit { base: String },
}

impl BusinessIdError {
    pub(crate) fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Returns true if the input was rejected on its shape alone.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            BusinessIdError::InvalidFormat { .. }
                | BusinessIdError::InvalidInput { .. }
                | BusinessIdError::MissingBaseId
        )
    }

    /// Returns true if the input was well-formed but its check digit was wrong.
    pub fn is_checksum_error(&self) -> bool {
        matches!(
            self,
            BusinessIdError::ChecksumMismatch { .. } | BusinessIdError::NoCheckDigit { .. }
        )
    }
}
