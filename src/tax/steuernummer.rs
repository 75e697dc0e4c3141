//! Steuernummer validation across all input formats.

use tracing::debug;

use super::normalize::{NormalizedInput, Normalizer};
use super::offices::TaxOfficeRegistry;
use super::outcome::{TaxNumberFailure, TaxNumberOutcome};

/// Validates Steuernummern against a tax-office registry.
#[derive(Debug, Clone, Copy)]
pub struct TaxNumberValidator<'r> {
    normalizer: Normalizer<'r>,
}

impl<'r> TaxNumberValidator<'r> {
    pub fn new(registry: &'r TaxOfficeRegistry) -> Self {
        Self {
            normalizer: Normalizer::new(registry),
        }
    }

    /// Validate `raw` and report the matched office or the failure reason.
    ///
    /// Separators and any other non-digit characters are ignored. Short
    /// formats (10–12 digits) try every candidate office in registry order
    /// and return the first whose check digit matches.
    pub fn validate(&self, raw: &str) -> TaxNumberOutcome {
        let input = match NormalizedInput::parse(raw) {
            Ok(input) => input,
            Err(reason) => return TaxNumberOutcome::rejected(reason),
        };
        if input.is_all_zeros() {
            return TaxNumberOutcome::rejected(TaxNumberFailure::AllZeros);
        }

        let candidates = self.normalizer.candidates(&input);

        if input.digit_count() == 13 {
            let Some(candidate) = candidates.into_iter().next() else {
                return TaxNumberOutcome::rejected(TaxNumberFailure::UnknownRegionalCode);
            };
            if candidate.verify() {
                return TaxNumberOutcome::Valid {
                    canonical: candidate.canonical,
                    office: *candidate.office,
                };
            }
            debug!(code = %candidate.office.code, "check digit mismatch");
            return TaxNumberOutcome::Invalid {
                reason: TaxNumberFailure::InvalidCheckDigit,
                office: Some(*candidate.office),
            };
        }

        if candidates.is_empty() {
            return TaxNumberOutcome::rejected(TaxNumberFailure::UnknownRegionalCode);
        }
        let tried = candidates.len();
        for candidate in candidates {
            if candidate.verify() {
                return TaxNumberOutcome::Valid {
                    canonical: candidate.canonical,
                    office: *candidate.office,
                };
            }
        }
        debug!(tried, "no candidate office accepted the check digit");
        TaxNumberOutcome::rejected(TaxNumberFailure::NoCandidateMatched)
    }

    pub fn is_valid(&self, raw: &str) -> bool {
        self.validate(raw).is_valid()
    }

    /// Validate an arbitrary JSON value. Non-string values are coerced to
    /// their textual form; `null` is rejected as invalid length.
    #[cfg(feature = "json")]
    pub fn validate_json(&self, value: &serde_json::Value) -> TaxNumberOutcome {
        match crate::core::input::coerce_json(value) {
            Some(raw) => self.validate(&raw),
            None => TaxNumberOutcome::rejected(TaxNumberFailure::InvalidLength),
        }
    }
}

impl Default for TaxNumberValidator<'static> {
    fn default() -> Self {
        Self::new(TaxOfficeRegistry::shared())
    }
}

/// Validate a German Steuernummer with the built-in registry.
///
/// Accepts the 13-digit ELSTER format and the 10/11/12-digit short formats,
/// with or without separators (e.g. "11/210/81508155").
pub fn validate_german_tax_number(value: &str) -> bool {
    validate_detailed_german_tax_number(value).is_valid()
}

/// Like [`validate_german_tax_number`], returning the matched office or the
/// failure reason.
pub fn validate_detailed_german_tax_number(value: &str) -> TaxNumberOutcome {
    TaxNumberValidator::default().validate(value)
}
