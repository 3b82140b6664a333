//! Building full business IDs from a base number.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::checksum::{Digits, BASE_LEN};
use crate::BusinessIdError;

/// Separator between the base number and the check digit.
pub const SEPARATOR: char = '-';

/// Largest base number that fits in seven digits.
pub const MAX_BASE: u32 = 9_999_999;

/// Input accepted by [`build_business_id`].
///
/// Strings and integers convert into this with `From`, and `None` of either
/// becomes [`BaseInput::Absent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseInput<'a> {
    /// A base number as text, zero-padded to seven digits if shorter.
    Text(Cow<'a, str>),
    /// A base number as an integer.
    Number(i64),
    /// No input at all.
    Absent,
}

impl<'a> From<&'a str> for BaseInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for BaseInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for BaseInput<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl From<i64> for BaseInput<'_> {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for BaseInput<'_> {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<u32> for BaseInput<'_> {
    fn from(value: u32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl<'a, T> From<Option<T>> for BaseInput<'a>
where
    T: Into<BaseInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

fn base_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{7}$").expect("base pattern is valid"))
}

/// Normalizes builder input into a 7-digit base string.
///
/// Short strings and integers are left-padded with zeros. Anything that is
/// not then exactly seven ASCII digits is rejected.
pub fn normalize_base(input: BaseInput<'_>) -> Result<String, BusinessIdError> {
    let padded = match input {
        BaseInput::Absent => {
            return Err(BusinessIdError::invalid_format("no base id given"));
        }
        BaseInput::Number(n) => {
            if !(0..=i64::from(MAX_BASE)).contains(&n) {
                return Err(BusinessIdError::invalid_format(format!(
                    "base number {n} is outside 0..={MAX_BASE}"
                )));
            }
            format!("{n:0>BASE_LEN$}")
        }
        BaseInput::Text(text) if text.len() == BASE_LEN => text.into_owned(),
        BaseInput::Text(text) => format!("{text:0>BASE_LEN$}"),
    };

    if !base_pattern().is_match(&padded) {
        return Err(BusinessIdError::invalid_format(format!(
            "expected {BASE_LEN} digits, got '{padded}'"
        )));
    }

    Ok(padded)
}

/// Builds the full business ID (`DDDDDDD-C`) for a base number.
///
/// The check digit is appended as computed; a base whose check digit would
/// be 10 yields a two-digit suffix, which [`crate::is_valid_business_id`]
/// does not accept.
///
/// # Example
///
/// ```
/// assert_eq!(ytunnus::build_business_id("1572860").unwrap(), "1572860-0");
/// assert_eq!(ytunnus::build_business_id(737546u32).unwrap(), "0737546-2");
/// ```
pub fn build_business_id<'a>(
    input: impl Into<BaseInput<'a>>,
) -> Result<String, BusinessIdError> {
    let base = normalize_base(input.into()).inspect_err(|err| {
        tracing::debug!(error = %err, "rejected business id base");
    })?;
    let check = Digits::parse(&base)?.checksum();
    Ok(format!("{base}{SEPARATOR}{check}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_string() {
        assert_eq!(build_business_id("1572860").unwrap(), "1572860-0");
        assert_eq!(build_business_id("0737546").unwrap(), "0737546-2");
        assert_eq!(
            build_business_id(String::from("2729069")).unwrap(),
            "2729069-3"
        );
    }

    #[test]
    fn test_build_pads_short_string() {
        assert_eq!(build_business_id("737546").unwrap(), "0737546-2");
        assert_eq!(build_business_id("1").unwrap(), "0000001-9");
    }

    #[test]
    fn test_build_from_integer() {
        assert_eq!(build_business_id(1572860i32).unwrap(), "1572860-0");
        assert_eq!(build_business_id(737546u32).unwrap(), "0737546-2");
        assert_eq!(build_business_id(0i64).unwrap(), "0000000-0");
    }

    #[test]
    fn test_build_rejects_out_of_range_integer() {
        let err = build_business_id(-1i64).unwrap_err();
        assert!(matches!(err, BusinessIdError::InvalidFormat { .. }));

        let err = build_business_id(10_000_000u32).unwrap_err();
        assert!(matches!(err, BusinessIdError::InvalidFormat { .. }));
    }

    #[test]
    fn test_build_rejects_absent() {
        let err = build_business_id(None::<&str>).unwrap_err();
        assert!(matches!(err, BusinessIdError::InvalidFormat { .. }));
        assert_eq!(build_business_id(Some("1572860")).unwrap(), "1572860-0");
    }

    #[test]
    fn test_build_rejects_non_numeric() {
        let err = build_business_id("ASD").unwrap_err();
        assert!(matches!(err, BusinessIdError::InvalidFormat { .. }));
        assert!(err.to_string().contains("not valid business id"));

        assert!(build_business_id("-123456").is_err());
        assert!(build_business_id(" 157286").is_err());
        assert!(build_business_id("15728600").is_err());
    }

    #[test]
    fn test_build_pads_empty_string() {
        assert_eq!(build_business_id("").unwrap(), "0000000-0");
    }

    #[test]
    fn test_build_rejects_unicode_digits() {
        // Arabic-Indic digits are decimal in Unicode but not in a business ID
        assert!(build_business_id("١٥٧٢٨٦٠").is_err());
    }

    #[test]
    fn test_build_keeps_checksum_ten() {
        assert_eq!(build_business_id("0000030").unwrap(), "0000030-10");
    }
}
