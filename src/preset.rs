//! Named validation presets for form and config driven callers.
//!
//! A preset key selects one validator. Dispatch fails closed: unknown keys
//! and non-string values are reported as invalid, never as errors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::banking::{validate_bic, validate_iban};
use crate::core::PrueferError;
use crate::tax::{validate_german_tax_id, validate_german_tax_number};

/// A named validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Preset {
    /// German Steuer-ID.
    TaxId,
    /// German Steuernummer.
    TaxNumber,
    Iban,
    Bic,
}

impl Preset {
    pub const ALL: [Self; 4] = [Self::TaxId, Self::TaxNumber, Self::Iban, Self::Bic];

    /// Preset key as used in configuration ("taxId", "taxNumber", "iban", "bic").
    pub fn key(self) -> &'static str {
        match self {
            Self::TaxId => "taxId",
            Self::TaxNumber => "taxNumber",
            Self::Iban => "iban",
            Self::Bic => "bic",
        }
    }

    /// Run the preset's validator.
    pub fn validate(self, value: &str) -> bool {
        match self {
            Self::TaxId => validate_german_tax_id(value),
            Self::TaxNumber => validate_german_tax_number(value),
            Self::Iban => validate_iban(value),
            Self::Bic => validate_bic(value),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Preset {
    type Err = PrueferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| PrueferError::UnknownPreset(s.to_string()))
    }
}

/// Validate `value` with the preset named `kind`.
///
/// Returns `false` for an unknown preset (logging a warning) and for any
/// value that is not a JSON string.
pub fn run_validation_preset(kind: &str, value: &serde_json::Value) -> bool {
    let preset = match kind.parse::<Preset>() {
        Ok(preset) => preset,
        Err(e) => {
            warn!(preset = kind, error = %e, "unknown validation preset, rejecting value");
            return false;
        }
    };
    let Some(value) = value.as_str() else {
        debug!(%preset, "non-string value rejected");
        return false;
    };
    preset.validate(value)
}
