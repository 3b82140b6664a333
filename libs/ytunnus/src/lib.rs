//! # ytunnus
//!
//! Building and validation of Finnish Business Identity Codes (Y-tunnus).
//!
//! ## ID Format
//!
//! A business ID is a 7-digit base number, a `-` separator, and a single
//! check digit: `DDDDDDD-C`.
//!
//! Examples:
//! - `1572860-0`
//! - `0737546-2`
//! - `737546-2` (legacy 6-digit base, read as `0737546-2`)
//!
//! The check digit is a weighted modulo-11 checksum of the base; see
//! [`checksum`] for the algorithm.
//!
//! ## Operations
//!
//! - [`build_business_id`] appends the check digit to a base number
//! - [`is_valid_business_id`] checks shape and check digit, never fails
//! - [`get_base_id`] extracts the base number from an ID
//! - [`multiplier`] looks up a weight in the checksum table
//! - [`BusinessId`] is a validated ID value for typed APIs
//!
//! Everything here is pure and allocation-light; all functions are safe to
//! call from any thread.

pub mod builder;
mod business_id;
pub mod checksum;
mod error;
pub mod validator;

pub use builder::{build_business_id, BaseInput, SEPARATOR};
pub use business_id::BusinessId;
pub use checksum::{compute_checksum, multiplier, Digits, MULTIPLIERS};
pub use error::BusinessIdError;
pub use validator::{get_base_id, is_valid_business_id, is_well_formed};
