//! BIC / SWIFT code validation (ISO 9362).
//!
//! Layout: bank code (4 letters), country code (2 letters), location code
//! (2 alphanumerics), optional branch code (3 alphanumerics).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::countries::is_known_country_code;
use crate::core::input::compact_upper;

/// Error returned when a BIC fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BicError {
    /// Not 8 or 11 characters.
    #[error("expected 8 or 11 characters, got {0}")]
    Length(usize),
    /// A segment contains characters it may not hold.
    #[error("invalid {0} segment")]
    Format(&'static str),
    /// Country segment is not in the country table.
    #[error("unknown country code '{0}'")]
    UnknownCountry(String),
}

/// A validated BIC, uppercase without separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Bic(String);

impl Bic {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn bank_code(&self) -> &str {
        &self.0[..4]
    }

    pub fn country_code(&self) -> &str {
        &self.0[4..6]
    }

    pub fn location_code(&self) -> &str {
        &self.0[6..8]
    }

    /// Branch code of an 11-character BIC.
    pub fn branch_code(&self) -> Option<&str> {
        self.0.get(8..11)
    }

    /// Primary office: no branch code, or branch `XXX`.
    pub fn is_primary_office(&self) -> bool {
        matches!(self.branch_code(), None | Some("XXX"))
    }

    /// Test BICs carry `0` as the second location character.
    pub fn is_test_bic(&self) -> bool {
        self.0.as_bytes()[7] == b'0'
    }
}

impl fmt::Display for Bic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Bic {
    type Err = BicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_bic(s)
    }
}

impl From<Bic> for String {
    fn from(bic: Bic) -> Self {
        bic.0
    }
}

impl TryFrom<String> for Bic {
    type Error = BicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_bic(&value)
    }
}

/// Parse and validate a BIC.
///
/// Whitespace, hyphens, slashes and dots are ignored; letters are uppercased.
pub fn parse_bic(value: &str) -> Result<Bic, BicError> {
    let cleaned = compact_upper(value);
    let len = cleaned.chars().count();
    if len != 8 && len != 11 {
        return Err(BicError::Length(len));
    }

    let bytes = cleaned.as_bytes();
    if bytes.len() != len {
        return Err(BicError::Format("character"));
    }
    if !bytes[..4].iter().all(u8::is_ascii_uppercase) {
        return Err(BicError::Format("bank code"));
    }
    if !bytes[4..6].iter().all(u8::is_ascii_uppercase) {
        return Err(BicError::Format("country code"));
    }
    if !bytes[6..8].iter().all(u8::is_ascii_alphanumeric) {
        return Err(BicError::Format("location code"));
    }
    if !bytes[8..].iter().all(u8::is_ascii_alphanumeric) {
        return Err(BicError::Format("branch code"));
    }

    let country = &cleaned[4..6];
    if !is_known_country_code(country) {
        return Err(BicError::UnknownCountry(country.to_string()));
    }
    Ok(Bic(cleaned))
}

/// Validate a BIC.
pub fn validate_bic(value: &str) -> bool {
    parse_bic(value).is_ok()
}
