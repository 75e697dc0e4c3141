//! Steuernummer input normalization and candidate expansion.
//!
//! Accepted inputs, after dropping every non-digit:
//!
//! | Digits | Layout                              | Regional code        |
//! |--------|-------------------------------------|----------------------|
//! | 13     | ELSTER: `SSFF0BBBUUUUP`             | digits 1–4           |
//! | 12     | `SSFFBBBUUUUP` (no filler)          | digits 1–4           |
//! | 11     | `SSBBBUUUUUP` (NRW `SSBBBBUUUUP`)   | every office of `SS` |
//! | 10     | `SSBBBUUUUP` (NRW `SSBBBBUUUP`)     | every office of `SS` |
//!
//! Short formats do not carry the office number, so they expand into one
//! canonical candidate per registered office of the state.

use tracing::trace;

use super::offices::{FederalState, TaxOffice, TaxOfficeRegistry};
use super::outcome::{CanonicalTaxNumber, TaxNumberFailure};
use crate::core::input::ascii_digits;

/// Digits of a Steuernummer whose length class is 10, 11, 12 or 13.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInput {
    digits: String,
}

impl NormalizedInput {
    /// Strip non-digits and check the length class.
    ///
    /// # Errors
    ///
    /// [`TaxNumberFailure::InvalidLength`] if fewer than 10 or more than 13
    /// digits remain.
    pub fn parse(raw: &str) -> Result<Self, TaxNumberFailure> {
        let digits = ascii_digits(raw);
        if !(10..=13).contains(&digits.len()) {
            return Err(TaxNumberFailure::InvalidLength);
        }
        Ok(Self { digits })
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Always within 10..=13.
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    pub fn is_all_zeros(&self) -> bool {
        self.digits.bytes().all(|b| b == b'0')
    }

    /// Federal state named by the first two digits.
    pub fn state(&self) -> Option<FederalState> {
        FederalState::from_number(self.digits[..2].parse().ok()?)
    }
}

/// A canonical form paired with the office it was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'r> {
    pub office: &'r TaxOffice,
    pub canonical: CanonicalTaxNumber,
}

impl Candidate<'_> {
    /// Check the candidate's check digit with its office's procedure.
    pub fn verify(&self) -> bool {
        self.office.procedure.verify(self.canonical.as_str())
    }
}

/// Expands normalized input into canonical candidates against a registry.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'r> {
    registry: &'r TaxOfficeRegistry,
}

impl<'r> Normalizer<'r> {
    pub fn new(registry: &'r TaxOfficeRegistry) -> Self {
        Self { registry }
    }

    /// Canonical candidates for `input`, in registry order.
    ///
    /// 12 and 13 digits name their office directly and yield at most one
    /// candidate. 10 and 11 digits yield one candidate per office of the state
    /// in digits 1–2. An empty result means the regional code is unknown.
    pub fn candidates(&self, input: &NormalizedInput) -> Vec<Candidate<'r>> {
        let digits = input.as_str();
        let candidates: Vec<Candidate<'r>> = match digits.len() {
            13 => self
                .registry
                .lookup(&digits[..4])
                .and_then(|office| candidate(office, digits.to_string()))
                .into_iter()
                .collect(),
            12 => self
                .registry
                .lookup(&digits[..4])
                .and_then(|office| candidate(office, format!("{}0{}", &digits[..4], &digits[4..])))
                .into_iter()
                .collect(),
            10 | 11 => {
                let Some(state) = input.state() else {
                    return Vec::new();
                };
                let rest = &digits[2..];
                self.registry
                    .in_state(state)
                    .filter_map(|office| {
                        let canonical = if rest.len() == 8 {
                            CanonicalTaxNumber::new(format!("{}0{rest}", office.code))
                        } else {
                            // The extra digit takes the filler's place.
                            CanonicalTaxNumber::without_filler(format!("{}{rest}", office.code))
                        };
                        canonical.map(|canonical| Candidate { office, canonical })
                    })
                    .collect()
            }
            _ => Vec::new(),
        };
        trace!(input = digits, count = candidates.len(), "expanded tax number candidates");
        candidates
    }
}

fn candidate(office: &TaxOffice, canonical: String) -> Option<Candidate<'_>> {
    CanonicalTaxNumber::new(canonical).map(|canonical| Candidate { office, canonical })
}
