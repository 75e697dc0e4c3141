//! IBAN validation (ISO 13616, ISO 7064 MOD 97-10).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::countries;
use crate::core::input::compact_upper;

/// Error returned when an IBAN fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IbanError {
    /// Fewer than 15 or more than 34 characters.
    #[error("length {0} outside 15..=34")]
    Length(usize),
    /// Not 2 letters, 2 check digits and an alphanumeric BBAN.
    #[error("expected 2 letters, 2 check digits and an alphanumeric account part")]
    Format,
    /// Country prefix is not in the country table.
    #[error("unknown country code '{0}'")]
    UnknownCountry(String),
    /// Length does not match the country's registered IBAN length.
    #[error("expected {expected} characters for {country}, got {actual}")]
    CountryLength {
        country: String,
        expected: usize,
        actual: usize,
    },
    /// MOD 97 remainder is not 1.
    #[error("checksum mismatch")]
    Checksum,
}

/// A validated IBAN in electronic format (uppercase, no separators).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Iban(String);

impl Iban {
    /// Electronic format, e.g. "DE89370400440532013000".
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn country_code(&self) -> &str {
        &self.0[..2]
    }

    pub fn check_digits(&self) -> &str {
        &self.0[2..4]
    }

    /// Basic Bank Account Number, everything after the check digits.
    pub fn bban(&self) -> &str {
        &self.0[4..]
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Iban {
    type Err = IbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_iban(s)
    }
}

impl From<Iban> for String {
    fn from(iban: Iban) -> Self {
        iban.0
    }
}

impl TryFrom<String> for Iban {
    type Error = IbanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_iban(&value)
    }
}

/// Parse and validate an IBAN.
///
/// Whitespace, hyphens, slashes and dots are ignored; letters are uppercased.
///
/// # Errors
///
/// Returns the first rule the input violates, checked in order: overall
/// length, structure, country code, country length, MOD 97 checksum.
pub fn parse_iban(value: &str) -> Result<Iban, IbanError> {
    let cleaned = compact_upper(value);
    let len = cleaned.chars().count();
    if !(15..=34).contains(&len) {
        return Err(IbanError::Length(len));
    }

    let bytes = cleaned.as_bytes();
    if !bytes[..2].iter().all(u8::is_ascii_uppercase)
        || !bytes[2..4].iter().all(u8::is_ascii_digit)
        || !bytes[4..].iter().all(u8::is_ascii_alphanumeric)
    {
        return Err(IbanError::Format);
    }

    let country = &cleaned[..2];
    let Some(expected) = countries::iban_length(country) else {
        return Err(IbanError::UnknownCountry(country.to_string()));
    };
    if expected != len {
        return Err(IbanError::CountryLength {
            country: country.to_string(),
            expected,
            actual: len,
        });
    }

    if mod97(&cleaned) != 1 {
        return Err(IbanError::Checksum);
    }
    Ok(Iban(cleaned))
}

/// Validate an IBAN.
pub fn validate_iban(value: &str) -> bool {
    parse_iban(value).is_ok()
}

/// MOD 97 of the rearranged IBAN (first four characters moved to the end,
/// letters expanded to 10..=35), computed digit by digit.
fn mod97(iban: &str) -> u32 {
    let (head, tail) = iban.split_at(4);
    tail.chars()
        .chain(head.chars())
        .filter_map(|c| c.to_digit(36))
        .fold(0, |remainder, value| {
            if value < 10 {
                (remainder * 10 + value) % 97
            } else {
                (remainder * 100 + value) % 97
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ibans() {
        for iban in [
            "DE89370400440532013000",
            "GB82WEST12345698765432",
            "GB29NWBK60161331926819",
            "FR7630006000011234567890189",
            "ES9121000418450200051332",
            "IT60X0542811101000000123456",
            "NO9386011117947",
            "CH9300762011623852957",
            "AT611904300234573201",
        ] {
            assert!(validate_iban(iban), "{iban}");
        }
    }

    #[test]
    fn formatted_and_lowercase() {
        assert!(validate_iban("DE89 3704 0044 0532 0130 00"));
        assert!(validate_iban("de89-3704-0044-0532-0130-00"));
        assert!(validate_iban("gb82 west 1234 5698 7654 32"));
    }

    #[test]
    fn flipped_check_digits() {
        assert_eq!(parse_iban("DE88370400440532013000"), Err(IbanError::Checksum));
        assert_eq!(parse_iban("DE99370400440532013000"), Err(IbanError::Checksum));
        assert_eq!(parse_iban("DE45500105175407324931"), Err(IbanError::Checksum));
    }

    #[test]
    fn length_bounds() {
        assert_eq!(parse_iban("DE8937040044"), Err(IbanError::Length(12)));
        assert_eq!(parse_iban(""), Err(IbanError::Length(0)));
        let long = format!("DE89{}", "1".repeat(31));
        assert_eq!(parse_iban(&long), Err(IbanError::Length(35)));
    }

    #[test]
    fn structure() {
        assert_eq!(parse_iban("D189370400440532013000"), Err(IbanError::Format));
        assert_eq!(parse_iban("DEX9370400440532013000"), Err(IbanError::Format));
        assert_eq!(parse_iban("DE8937040044053201300_"), Err(IbanError::Format));
        assert_eq!(parse_iban("DE89370400440532013ä00"), Err(IbanError::Format));
    }

    #[test]
    fn unknown_country() {
        assert_eq!(
            parse_iban("ZZ89370400440532013000"),
            Err(IbanError::UnknownCountry("ZZ".into()))
        );
    }

    #[test]
    fn country_length_mismatch() {
        assert_eq!(
            parse_iban("DE8937040044053201300"),
            Err(IbanError::CountryLength {
                country: "DE".into(),
                expected: 22,
                actual: 21
            })
        );
    }

    #[test]
    fn parts() {
        let iban: Iban = "DE89 3704 0044 0532 0130 00".parse().unwrap();
        assert_eq!(iban.as_str(), "DE89370400440532013000");
        assert_eq!(iban.country_code(), "DE");
        assert_eq!(iban.check_digits(), "89");
        assert_eq!(iban.bban(), "370400440532013000");
    }

    #[test]
    fn serde_validates() {
        let iban: Iban = serde_json::from_str("\"GB82WEST12345698765432\"").unwrap();
        assert_eq!(serde_json::to_string(&iban).unwrap(), "\"GB82WEST12345698765432\"");
        assert!(serde_json::from_str::<Iban>("\"GB00WEST12345698765432\"").is_err());
    }
}
