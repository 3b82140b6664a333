//! Weighted modulo-11 checksum engine.
//!
//! The check digit of a business ID is derived from its 7-digit base:
//!
//! 1. Multiply each digit by the weight at the same position in
//!    [`MULTIPLIERS`] and sum the products.
//! 2. Pad the sum up to the next multiple of 11 (a sum that already is a
//!    multiple of 11 pads by 0).
//! 3. The check digit is the padding modulo 11.
//!
//! A padding of 10 has no valid check digit in the official scheme, and such
//! bases are never issued. The engine still returns 10 for them rather than
//! rejecting the base; callers that need a representable ID use
//! [`crate::BusinessId`].

use crate::BusinessIdError;

/// Number of digits in a business ID base.
pub const BASE_LEN: usize = 7;

/// Per-position weights used in the weighted sum.
pub const MULTIPLIERS: [u32; BASE_LEN] = [7, 9, 10, 5, 8, 4, 2];

const MODULO: u32 = 11;

/// Returns the weight at `index` in the multiplier table.
pub fn multiplier(index: usize) -> Result<u32, BusinessIdError> {
    MULTIPLIERS
        .get(index)
        .copied()
        .ok_or(BusinessIdError::IndexOutOfRange { index })
}

/// Computes the check digit for a sequence of seven decimal digits.
///
/// Returns a value in `0..=10`; see the module docs for the meaning of 10.
pub fn compute_checksum(digits: &[u8]) -> Result<u8, BusinessIdError> {
    Ok(Digits::try_from(digits)?.checksum())
}

/// A business ID base: exactly seven decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digits([u8; BASE_LEN]);

impl Digits {
    /// Parses a base from exactly seven ASCII digits.
    pub fn parse(s: &str) -> Result<Self, BusinessIdError> {
        let bytes = s.as_bytes();
        if bytes.len() != BASE_LEN || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(BusinessIdError::invalid_format(format!(
                "expected {BASE_LEN} digits, got '{s}'"
            )));
        }

        let mut digits = [0u8; BASE_LEN];
        for (slot, byte) in digits.iter_mut().zip(bytes) {
            *slot = byte - b'0';
        }
        Ok(Self(digits))
    }

    /// Returns the digits in order.
    #[must_use]
    pub const fn as_array(&self) -> &[u8; BASE_LEN] {
        &self.0
    }

    /// Computes the check digit of this base.
    #[must_use]
    pub fn checksum(&self) -> u8 {
        let sum: u32 = self
            .0
            .iter()
            .zip(MULTIPLIERS)
            .map(|(digit, weight)| u32::from(*digit) * weight)
            .sum();

        let padded = sum.div_ceil(MODULO) * MODULO - sum;

        // padded < 11, so this always fits.
        (padded % MODULO) as u8
    }
}

impl TryFrom<&[u8]> for Digits {
    type Error = BusinessIdError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let digits: [u8; BASE_LEN] = value
            .try_into()
            .map_err(|_| BusinessIdError::InvalidInput { len: value.len() })?;
        if digits.iter().any(|d| *d > 9) {
            return Err(BusinessIdError::InvalidInput { len: value.len() });
        }
        Ok(Self(digits))
    }
}

impl std::fmt::Display for Digits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for digit in self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
