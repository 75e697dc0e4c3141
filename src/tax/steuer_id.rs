//! Steuerliche Identifikationsnummer (Steuer-ID) validation.
//!
//! The Steuer-ID has 11 digits; the last one is an ISO 7064 MOD 11,10
//! check digit over the first ten.

use thiserror::Error;

use crate::core::input::compact;

/// Why a Steuer-ID failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TaxIdError {
    /// Not exactly 11 characters after removing separators.
    #[error("expected 11 digits, got {0} characters")]
    Length(usize),
    /// Contains something other than ASCII digits.
    #[error("contains non-digit characters")]
    NonDigit,
    /// Check digit does not match the first ten digits.
    #[error("check digit {actual} does not match expected {expected}")]
    CheckDigit { expected: u8, actual: u8 },
}

/// Compute the check digit for the first ten digits of a Steuer-ID.
///
/// Returns `None` unless `first_ten` is exactly ten ASCII digits.
pub fn calculate_check_digit(first_ten: &str) -> Option<u8> {
    if first_ten.len() != 10 || !first_ten.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut product: u32 = 10;
    for b in first_ten.bytes() {
        let mut sum = (u32::from(b - b'0') + product) % 10;
        if sum == 0 {
            sum = 10;
        }
        product = (2 * sum) % 11;
    }
    let check = (11 - product) % 11;
    Some(if check == 10 { 0 } else { check as u8 })
}

/// Validate a Steuer-ID, reporting why it failed.
///
/// Whitespace, hyphens, slashes and dots are ignored.
pub fn check_german_tax_id(value: &str) -> Result<(), TaxIdError> {
    let cleaned = compact(value);
    if cleaned.chars().count() != 11 {
        return Err(TaxIdError::Length(cleaned.chars().count()));
    }
    if !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TaxIdError::NonDigit);
    }
    let expected = calculate_check_digit(&cleaned[..10]).ok_or(TaxIdError::NonDigit)?;
    let actual = cleaned.as_bytes()[10] - b'0';
    if expected != actual {
        return Err(TaxIdError::CheckDigit { expected, actual });
    }
    Ok(())
}

/// Validate a German Steuer-ID (11 digits, MOD 11,10 check digit).
pub fn validate_german_tax_id(value: &str) -> bool {
    check_german_tax_id(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_check_digits() {
        assert_eq!(calculate_check_digit("8609574271"), Some(9));
        assert_eq!(calculate_check_digit("6592871540"), Some(7));
        assert_eq!(calculate_check_digit("1111111111"), Some(9));
    }

    #[test]
    fn check_digit_rejects_bad_input() {
        assert_eq!(calculate_check_digit("860957427"), None);
        assert_eq!(calculate_check_digit("86095742711"), None);
        assert_eq!(calculate_check_digit("86095742a1"), None);
    }

    #[test]
    fn valid_tax_id() {
        assert!(validate_german_tax_id("86095742719"));
        assert!(validate_german_tax_id("65928715407"));
    }

    #[test]
    fn formatted_tax_id() {
        assert!(validate_german_tax_id("86 095 742 719"));
        assert!(validate_german_tax_id("86/095/742/719"));
        assert!(validate_german_tax_id(" 86-095-742-719 "));
    }

    #[test]
    fn every_wrong_check_digit_fails() {
        for d in (0..=9).filter(|&d| d != 9) {
            let id = format!("8609574271{d}");
            assert_eq!(
                check_german_tax_id(&id),
                Err(TaxIdError::CheckDigit { expected: 9, actual: d })
            );
        }
    }

    #[test]
    fn length_errors() {
        assert_eq!(check_german_tax_id(""), Err(TaxIdError::Length(0)));
        assert_eq!(check_german_tax_id("8609574271"), Err(TaxIdError::Length(10)));
        assert_eq!(check_german_tax_id("860957427190"), Err(TaxIdError::Length(12)));
    }

    #[test]
    fn non_digit_error() {
        assert_eq!(check_german_tax_id("8609574271X"), Err(TaxIdError::NonDigit));
        assert_eq!(check_german_tax_id("86095742719ä"), Err(TaxIdError::Length(12)));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            TaxIdError::CheckDigit { expected: 9, actual: 1 }.to_string(),
            "check digit 1 does not match expected 9"
        );
        assert_eq!(TaxIdError::Length(3).to_string(), "expected 11 digits, got 3 characters");
    }
}
