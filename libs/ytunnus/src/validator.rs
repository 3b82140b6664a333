//! Validation of full business IDs.
//!
//! Validation runs in two stages. The syntax gate checks the `DDDDDDD-C`
//! shape (or the legacy `DDDDDD-C` shape) without touching the checksum
//! engine, so malformed input is rejected before anything can fail. Only
//! well-formed input reaches the checksum stage, which rebuilds the ID from
//! its base and compares the two strings.

use std::sync::OnceLock;

use regex::Regex;

use crate::builder::{build_business_id, SEPARATOR};
use crate::BusinessIdError;

/// Number of digits in the base of a legacy business ID.
pub const LEGACY_BASE_LEN: usize = 6;

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{6,7}-[0-9]$").expect("id pattern is valid"))
}

/// Returns true if `id` has the shape of a business ID, legacy form included.
///
/// This does not look at the check digit.
pub fn is_well_formed(id: &str) -> bool {
    id_pattern().is_match(id)
}

/// Checks the shape of `id` and pads a legacy 6-digit base to 7 digits.
///
/// Returns the 7-digit base and the ID rewritten with that base.
pub(crate) fn normalize(id: &str) -> Result<(String, String), BusinessIdError> {
    if !is_well_formed(id) {
        return Err(BusinessIdError::invalid_format(format!(
            "expected DDDDDDD-C, got '{id}'"
        )));
    }

    let (base, _) = id
        .split_once(SEPARATOR)
        .ok_or_else(|| BusinessIdError::invalid_format("missing separator"))?;

    if base.len() == LEGACY_BASE_LEN {
        Ok((format!("0{base}"), format!("0{id}")))
    } else {
        Ok((base.to_string(), id.to_string()))
    }
}

/// Checks that `id` is a business ID with a correct check digit.
///
/// Accepts the legacy 6-digit base form, which is treated as if it had a
/// leading zero. Never fails: absent or malformed input is simply not valid.
///
/// # Example
///
/// ```
/// use ytunnus::is_valid_business_id;
///
/// assert!(is_valid_business_id("1572860-0"));
/// assert!(is_valid_business_id("737546-2"));
/// assert!(!is_valid_business_id("1572860-1"));
/// assert!(!is_valid_business_id(None::<&str>));
/// ```
pub fn is_valid_business_id<'a>(id: impl Into<Option<&'a str>>) -> bool {
    let Some(id) = id.into() else {
        return false;
    };

    let (base, expected) = match normalize(id) {
        Ok(parts) => parts,
        Err(err) => {
            tracing::debug!(id, error = %err, "business id failed syntax check");
            return false;
        }
    };

    match build_business_id(base.as_str()) {
        Ok(rebuilt) if rebuilt == expected => true,
        Ok(rebuilt) => {
            tracing::debug!(id, %rebuilt, "business id checksum mismatch");
            false
        }
        Err(err) => {
            tracing::debug!(id, error = %err, "business id base rejected");
            false
        }
    }
}

/// Returns the base number of a business ID: everything before the separator.
///
/// The base is returned as written, so a legacy ID yields six digits.
pub fn get_base_id(business_id: &str) -> Result<&str, BusinessIdError> {
    let Some((base, _)) = business_id.split_once(SEPARATOR) else {
        return Err(BusinessIdError::invalid_format(format!(
            "no '{SEPARATOR}' separator in '{business_id}'"
        )));
    };

    if base.is_empty() {
        return Err(BusinessIdError::MissingBaseId);
    }

    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        assert!(is_valid_business_id("1572860-0"));
        assert!(is_valid_business_id("0737546-2"));
        assert!(is_valid_business_id("0725267-3"));
        assert!(is_valid_business_id("1456344-5"));
        assert!(is_valid_business_id("2729069-3"));
    }

    #[test]
    fn test_wrong_check_digit() {
        assert!(!is_valid_business_id("1572860-1"));
        assert!(!is_valid_business_id("0737546-9"));
    }

    #[test]
    fn test_legacy_ids() {
        assert!(is_valid_business_id("737546-2"));
        assert!(!is_valid_business_id("737546-9"));
    }

    #[test]
    fn test_malformed_ids() {
        assert!(!is_valid_business_id("helloworld-4"));
        assert!(!is_valid_business_id(""));
        assert!(!is_valid_business_id("1572860"));
        assert!(!is_valid_business_id("1572860-"));
        assert!(!is_valid_business_id("-0"));
        assert!(!is_valid_business_id("15728-0"));
        assert!(!is_valid_business_id("15728600-0"));
        assert!(!is_valid_business_id(" 1572860-0"));
        assert!(!is_valid_business_id("1572860-0 "));
        assert!(!is_valid_business_id("1572860_0"));
        assert!(!is_valid_business_id("1572860-00"));
    }

    #[test]
    fn test_absent_id() {
        assert!(!is_valid_business_id(None::<&str>));
        assert!(is_valid_business_id(Some("1572860-0")));
    }

    #[test]
    fn test_checksum_ten_never_validates() {
        // 0000030 has check digit 10, which cannot be written as C
        assert!(!is_valid_business_id("0000030-1"));
        assert!(!is_valid_business_id("0000030-0"));
        assert!(!is_valid_business_id("0000030-10"));
    }

    #[test]
    fn test_normalize_legacy() {
        let (base, id) = normalize("737546-2").unwrap();
        assert_eq!(base, "0737546");
        assert_eq!(id, "0737546-2");

        let (base, id) = normalize("1572860-0").unwrap();
        assert_eq!(base, "1572860");
        assert_eq!(id, "1572860-0");
    }

    #[test]
    fn test_get_base_id() {
        assert_eq!(get_base_id("1572860-0"), Ok("1572860"));
        assert_eq!(get_base_id("737546-2"), Ok("737546"));
    }

    #[test]
    fn test_get_base_id_errors() {
        assert!(matches!(
            get_base_id(""),
            Err(BusinessIdError::InvalidFormat { .. })
        ));
        assert!(matches!(
            get_base_id("1572860"),
            Err(BusinessIdError::InvalidFormat { .. })
        ));
        assert_eq!(get_base_id("-0"), Err(BusinessIdError::MissingBaseId));
    }
}
