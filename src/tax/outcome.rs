//! Result types for Steuernummer validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::offices::{FederalState, RegionalCode, TaxOffice};

/// Why a Steuernummer was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum TaxNumberFailure {
    /// Digit count outside 10–13 after stripping, or empty input.
    #[error("invalid length or characters")]
    InvalidLength,
    /// Every digit is zero.
    #[error("all zeros")]
    AllZeros,
    /// No registered office matches the state/office prefix.
    #[error("unknown regional code")]
    UnknownRegionalCode,
    /// A 13-digit number named a known office but its check digit is wrong.
    #[error("invalid check digit")]
    InvalidCheckDigit,
    /// None of the candidate offices for a short-format number accepted its check digit.
    #[error("invalid check digit for all candidate regions")]
    NoCandidateMatched,
}

/// A Steuernummer in the unified 13-digit ELSTER layout.
///
/// Positions: state(2) office(2) filler(1) district(3) sequence(4) check(1).
/// NRW numbers use district(4) and sequence(3).
///
/// Numbers expanded from the 11-digit short form carry no filler. Their
/// fifth digit opens the district instead: district(3) sequence(5), or
/// district(4) sequence(4) in NRW. A number with a non-zero fifth digit is
/// read that way too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CanonicalTaxNumber {
    digits: String,
    folded: bool,
}

impl CanonicalTaxNumber {
    /// Wrap a 13-digit string. Returns `None` for anything else.
    pub fn new(digits: impl Into<String>) -> Option<Self> {
        let digits = digits.into();
        if digits.len() != 13 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let folded = digits.as_bytes()[4] != b'0';
        Some(Self { digits, folded })
    }

    /// Wrap a 13-digit string built from the 11-digit short form.
    pub(crate) fn without_filler(digits: impl Into<String>) -> Option<Self> {
        Self::new(digits).map(|n| Self { folded: true, ..n })
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// First four digits, the office's regional code.
    pub fn regional_code(&self) -> &str {
        &self.digits[..4]
    }

    pub fn state_number(&self) -> &str {
        &self.digits[..2]
    }

    pub fn office_number(&self) -> &str {
        &self.digits[2..4]
    }

    /// Federal state named by the first two digits.
    pub fn state(&self) -> Option<FederalState> {
        FederalState::from_number(self.state_number().parse().ok()?)
    }

    /// Whether position five holds the `'0'` filler.
    pub fn has_filler(&self) -> bool {
        !self.folded
    }

    pub fn district(&self) -> &str {
        let start = self.body_start();
        let width = if self.has_wide_district() { 4 } else { 3 };
        &self.digits[start..start + width]
    }

    pub fn sequence(&self) -> &str {
        let start = self.body_start() + if self.has_wide_district() { 4 } else { 3 };
        &self.digits[start..12]
    }

    pub fn check_digit(&self) -> u8 {
        self.digits.as_bytes()[12] - b'0'
    }

    fn body_start(&self) -> usize {
        if self.folded { 4 } else { 5 }
    }

    fn has_wide_district(&self) -> bool {
        self.state().is_some_and(FederalState::has_wide_district)
    }
}

impl fmt::Display for CanonicalTaxNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl AsRef<str> for CanonicalTaxNumber {
    fn as_ref(&self) -> &str {
        &self.digits
    }
}

impl From<CanonicalTaxNumber> for String {
    fn from(value: CanonicalTaxNumber) -> Self {
        value.digits
    }
}

impl TryFrom<String> for CanonicalTaxNumber {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value.clone()).ok_or_else(|| format!("'{value}' is not a 13-digit tax number"))
    }
}

/// Outcome of a detailed Steuernummer validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaxNumberOutcome {
    /// The number is valid for `office`.
    Valid {
        canonical: CanonicalTaxNumber,
        office: TaxOffice,
    },
    /// The number was rejected. `office` is set only when a 13-digit number
    /// named a registered office whose check digit did not match.
    Invalid {
        reason: TaxNumberFailure,
        office: Option<TaxOffice>,
    },
}

impl TaxNumberOutcome {
    pub(crate) fn rejected(reason: TaxNumberFailure) -> Self {
        Self::Invalid { reason, office: None }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    pub fn reason(&self) -> Option<TaxNumberFailure> {
        match self {
            Self::Valid { .. } => None,
            Self::Invalid { reason, .. } => Some(*reason),
        }
    }

    pub fn canonical(&self) -> Option<&CanonicalTaxNumber> {
        match self {
            Self::Valid { canonical, .. } => Some(canonical),
            Self::Invalid { .. } => None,
        }
    }

    /// The office the number was matched against, if one was identified.
    pub fn office(&self) -> Option<&TaxOffice> {
        match self {
            Self::Valid { office, .. } => Some(office),
            Self::Invalid { office, .. } => office.as_ref(),
        }
    }

    pub fn regional_code(&self) -> Option<RegionalCode> {
        self.office().map(|o| o.code)
    }

    pub fn state(&self) -> Option<FederalState> {
        self.office().map(TaxOffice::state)
    }

    pub fn state_name(&self) -> Option<&'static str> {
        self.office().map(TaxOffice::state_name)
    }
}
