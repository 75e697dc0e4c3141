//! Check-digit procedures for 13-digit canonical Steuernummern.
//!
//! Every procedure looks at the first 12 digits of the canonical form
//! (state, office, filler, district, sequence) and yields the expected 13th
//! digit. Three procedures are weighted sums reduced modulo 11; the fourth
//! ("standard") doubles every second digit like Luhn.

use serde::{Deserialize, Serialize};

/// Check-digit procedure assigned to a tax office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChecksumProcedure {
    /// Weights 7,6,5,8,4,3,2 over district and sequence (Berlin, offices 27–30).
    #[serde(rename = "A")]
    WeightedA,
    /// Weights over office, district and sequence (Berlin, remaining offices).
    #[serde(rename = "B")]
    WeightedB,
    /// Weights 3,2,1 / 7..1 over the NRW layout.
    #[serde(rename = "regional-alt")]
    RegionalAlt,
    /// Alternating 1/2 weights with digit-sum reduction.
    #[default]
    #[serde(rename = "standard", other)]
    Standard,
}

const WEIGHTS_A: [u32; 12] = [0, 0, 0, 0, 0, 7, 6, 5, 8, 4, 3, 2];
const WEIGHTS_B: [u32; 12] = [0, 0, 2, 9, 0, 8, 7, 6, 5, 4, 3, 2];
const WEIGHTS_REGIONAL_ALT: [u32; 12] = [0, 3, 2, 1, 0, 7, 6, 5, 4, 3, 2, 1];

impl ChecksumProcedure {
    /// Resolve a procedure by name. Unrecognized names fall back to
    /// [`ChecksumProcedure::Standard`].
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "A" => Self::WeightedA,
            "B" => Self::WeightedB,
            "regional-alt" => Self::RegionalAlt,
            _ => Self::Standard,
        }
    }

    /// Stable name of the procedure.
    pub fn name(self) -> &'static str {
        match self {
            Self::WeightedA => "A",
            Self::WeightedB => "B",
            Self::RegionalAlt => "regional-alt",
            Self::Standard => "standard",
        }
    }

    /// Compute the check digit for a 12-digit body.
    pub fn expected_check_digit(self, body: &[u8; 12]) -> u8 {
        match self {
            Self::WeightedA => weighted_mod11(body, &WEIGHTS_A),
            Self::WeightedB => weighted_mod11(body, &WEIGHTS_B),
            Self::RegionalAlt => weighted_mod11(body, &WEIGHTS_REGIONAL_ALT),
            Self::Standard => alternating_sum(body),
        }
    }

    /// Verify the trailing check digit of a 13-digit canonical number.
    ///
    /// Returns `false` for anything that is not exactly 13 ASCII digits.
    pub fn verify(self, canonical: &str) -> bool {
        let Some(digits) = to_digits(canonical) else {
            return false;
        };
        let mut body = [0u8; 12];
        body.copy_from_slice(&digits[..12]);
        self.expected_check_digit(&body) == digits[12]
    }
}

impl std::fmt::Display for ChecksumProcedure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn to_digits(canonical: &str) -> Option<[u8; 13]> {
    let bytes = canonical.as_bytes();
    if bytes.len() != 13 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let mut digits = [0u8; 13];
    for (slot, b) in digits.iter_mut().zip(bytes) {
        *slot = b - b'0';
    }
    Some(digits)
}

fn weighted_mod11(body: &[u8; 12], weights: &[u32; 12]) -> u8 {
    let sum: u32 = body
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();
    (sum % 11 % 10) as u8
}

fn alternating_sum(body: &[u8; 12]) -> u8 {
    let sum: u32 = body
        .iter()
        .enumerate()
        .map(|(idx, &d)| {
            let product = u32::from(d) * if idx % 2 == 0 { 1 } else { 2 };
            if product > 9 { product - 9 } else { product }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}
