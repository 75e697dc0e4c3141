//! Shared building blocks: country table, input cleaning, and errors.

pub mod countries;
mod error;
pub mod input;

pub use countries::is_known_country_code;
pub use error::*;
