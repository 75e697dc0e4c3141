//! Bank account identifiers: IBAN and BIC.
//!
//! Both validators are purely structural plus checksum; they never contact a
//! bank or registry.
//!
//! # Example
//!
//! ```rust
//! use pruefer::banking::*;
//!
//! assert!(validate_iban("DE89 3704 0044 0532 0130 00"));
//! assert!(validate_bic("DEUTDEFF"));
//!
//! let iban = parse_iban("GB82WEST12345698765432").unwrap();
//! assert_eq!(iban.bban(), "WEST12345698765432");
//! ```

mod bic;
mod iban;

pub use bic::{Bic, BicError, parse_bic, validate_bic};
pub use iban::{Iban, IbanError, parse_iban, validate_iban};
