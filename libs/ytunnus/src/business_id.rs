//! Typed business ID.
//!
//! A [`BusinessId`] can only be obtained from input that passed validation,
//! so holding one means the check digit is known to be correct. It always
//! stores the canonical 7-digit form, even when parsed from a legacy ID.

use crate::builder::{build_business_id, normalize_base, BaseInput, SEPARATOR};
use crate::checksum::{Digits, BASE_LEN};
use crate::validator::normalize;
use crate::BusinessIdError;

/// A validated Finnish Business Identity Code in `DDDDDDD-C` form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BusinessId(String);

impl BusinessId {
    /// Parses and validates a business ID.
    ///
    /// Legacy 6-digit bases are accepted and stored with a leading zero.
    pub fn parse(s: &str) -> Result<Self, BusinessIdError> {
        let (base, normalized) = normalize(s)?;
        let expected = build_business_id(base.as_str())?;

        if expected != normalized {
            return Err(BusinessIdError::ChecksumMismatch {
                expected,
                actual: normalized,
            });
        }

        Ok(Self(normalized))
    }

    /// Builds the business ID for a base number.
    ///
    /// Fails for bases whose check digit would be 10, since no valid ID
    /// exists for them.
    pub fn from_base<'a>(input: impl Into<BaseInput<'a>>) -> Result<Self, BusinessIdError> {
        let base = normalize_base(input.into())?;
        let check = Digits::parse(&base)?.checksum();
        if check > 9 {
            return Err(BusinessIdError::NoCheckDigit { base });
        }
        Ok(Self(format!("{base}{SEPARATOR}{check}")))
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the 7-digit base number.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.0[..BASE_LEN]
    }

    /// Returns the check digit.
    #[must_use]
    pub fn check_digit(&self) -> u8 {
        // The last byte is always an ASCII digit.
        self.0.as_bytes()[BASE_LEN + SEPARATOR.len_utf8()] - b'0'
    }

    /// Consumes the ID and returns the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for BusinessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for BusinessId {
    type Err = BusinessIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for BusinessId {
    type Error = BusinessIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for BusinessId {
    type Error = BusinessIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BusinessId> for String {
    fn from(id: BusinessId) -> Self {
        id.0
    }
}

impl AsRef<str> for BusinessId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for BusinessId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for BusinessId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let id: BusinessId = "1572860-0".parse().unwrap();
        assert_eq!(id.as_str(), "1572860-0");
        assert_eq!(id.base(), "1572860");
        assert_eq!(id.check_digit(), 0);
    }

    #[test]
    fn test_parse_legacy_is_canonicalized() {
        let id = BusinessId::parse("737546-2").unwrap();
        assert_eq!(id.to_string(), "0737546-2");
        assert_eq!(id.base(), "0737546");
        assert_eq!(id.check_digit(), 2);
        assert_eq!(id, BusinessId::parse("0737546-2").unwrap());
    }

    #[test]
    fn test_parse_checksum_mismatch() {
        let result = BusinessId::parse("1572860-1");
        assert_eq!(
            result,
            Err(BusinessIdError::ChecksumMismatch {
                expected: "1572860-0".to_string(),
                actual: "1572860-1".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_invalid_format() {
        let result: Result<BusinessId, _> = "helloworld-4".parse();
        assert!(matches!(
            result.unwrap_err(),
            BusinessIdError::InvalidFormat { .. }
        ));
        assert!(BusinessId::try_from("").is_err());
    }

    #[test]
    fn test_from_base() {
        let id = BusinessId::from_base("2729069").unwrap();
        assert_eq!(id.as_str(), "2729069-3");

        let id = BusinessId::from_base(737546u32).unwrap();
        assert_eq!(id.as_str(), "0737546-2");
    }

    #[test]
    fn test_from_base_rejects_checksum_ten() {
        let err = BusinessId::from_base("0000030").unwrap_err();
        assert_eq!(
            err,
            BusinessIdError::NoCheckDigit {
                base: "0000030".to_string()
            }
        );
        assert!(err.is_checksum_error());
    }

    #[test]
    fn test_from_base_rejects_bad_base() {
        let err = BusinessId::from_base("ASD").unwrap_err();
        assert!(err.is_format_error());
    }

    #[test]
    fn test_json_roundtrip() {
        let id = BusinessId::parse("1456344-5").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1456344-5\"");
        let parsed: BusinessId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_json_rejects_invalid() {
        let result: Result<BusinessId, _> = serde_json::from_str("\"1456344-4\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_ordering_follows_base() {
        let a = BusinessId::parse("0737546-2").unwrap();
        let b = BusinessId::parse("1572860-0").unwrap();
        assert!(a < b);
    }
}
