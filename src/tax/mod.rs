//! German tax identifiers: Steuer-ID and Steuernummer.
//!
//! The Steuernummer path normalizes 10–13 digit inputs into the 13-digit
//! ELSTER layout, resolves the issuing tax office from the built-in registry
//! and verifies the office's check-digit procedure.
//!
//! # Example
//!
//! ```rust
//! use pruefer::tax::*;
//!
//! assert!(validate_german_tax_id("86095742719"));
//!
//! let outcome = validate_detailed_german_tax_number("11/081/50815");
//! assert!(outcome.is_valid());
//! assert_eq!(outcome.canonical().unwrap().as_str(), "1121008150815");
//! assert_eq!(outcome.state_name(), Some("Berlin"));
//! ```

mod checksum;
mod normalize;
mod offices;
mod outcome;
mod steuer_id;
mod steuernummer;

pub use checksum::ChecksumProcedure;
pub use normalize::{Candidate, NormalizedInput, Normalizer};
pub use offices::{FederalState, RegionalCode, TaxOffice, TaxOfficeRegistry};
pub use outcome::{CanonicalTaxNumber, TaxNumberFailure, TaxNumberOutcome};
pub use steuer_id::{TaxIdError, calculate_check_digit, check_german_tax_id, validate_german_tax_id};
pub use steuernummer::{
    TaxNumberValidator, validate_detailed_german_tax_number, validate_german_tax_number,
};
