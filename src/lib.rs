//! # pruefer
//!
//! Validation of German tax identifiers and bank account identifiers:
//! Steuer-ID, Steuernummer, IBAN and BIC.
//!
//! Every validator is a pure function over its input and static tables.
//! Nothing panics on malformed input and nothing leaves the process.
//!
//! ## Quick Start
//!
//! ```rust
//! use pruefer::*;
//!
//! assert!(validate_german_tax_id("86095742719"));
//! assert!(validate_german_tax_number("11/081/50815"));
//! assert!(validate_iban("DE89 3704 0044 0532 0130 00"));
//! assert!(validate_bic("DEUTDEFF"));
//!
//! let outcome = validate_detailed_german_tax_number("1121081508156");
//! assert_eq!(outcome.reason(), Some(TaxNumberFailure::InvalidCheckDigit));
//! assert_eq!(outcome.state_name(), Some("Berlin"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tax` | Steuer-ID and Steuernummer validation, tax-office registry |
//! | `banking` | IBAN and BIC validation |
//! | `json` | Registry loading from JSON, JSON value coercion |
//! | `presets` | Named preset dispatch over JSON values |
//! | `all` (default) | Everything |

pub mod core;

#[cfg(feature = "tax")]
pub mod tax;

#[cfg(feature = "banking")]
pub mod banking;

#[cfg(feature = "presets")]
pub mod preset;

pub use crate::core::*;

#[cfg(feature = "banking")]
pub use crate::banking::{validate_bic, validate_iban};
#[cfg(feature = "presets")]
pub use crate::preset::{Preset, run_validation_preset};
#[cfg(feature = "tax")]
pub use crate::tax::{
    TaxNumberFailure, TaxNumberOutcome, validate_detailed_german_tax_number,
    validate_german_tax_id, validate_german_tax_number,
};
