//! Tax-office registry (Bundesfinanzamtsnummern).
//!
//! A regional code is the 2-digit federal-state number followed by the
//! 2-digit office number, e.g. `1121` for Berlin office 21. Each registered
//! office carries the check-digit procedure used for Steuernummern it issues.
//!
//! The registry is an explicitly constructed, immutable value. Validators take
//! it by reference; [`TaxOfficeRegistry::shared`] hands out one process-wide
//! instance of the built-in table.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::checksum::ChecksumProcedure;
use crate::core::PrueferError;

/// German federal state, numbered as in the official municipality key (AGS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FederalState {
    SchleswigHolstein,
    Hamburg,
    LowerSaxony,
    Bremen,
    NorthRhineWestphalia,
    Hesse,
    RhinelandPalatinate,
    BadenWuerttemberg,
    Bavaria,
    Saarland,
    Berlin,
    Brandenburg,
    MecklenburgWesternPomerania,
    Saxony,
    SaxonyAnhalt,
    Thuringia,
}

impl FederalState {
    /// All states in numeric order.
    pub const ALL: [Self; 16] = [
        Self::SchleswigHolstein,
        Self::Hamburg,
        Self::LowerSaxony,
        Self::Bremen,
        Self::NorthRhineWestphalia,
        Self::Hesse,
        Self::RhinelandPalatinate,
        Self::BadenWuerttemberg,
        Self::Bavaria,
        Self::Saarland,
        Self::Berlin,
        Self::Brandenburg,
        Self::MecklenburgWesternPomerania,
        Self::Saxony,
        Self::SaxonyAnhalt,
        Self::Thuringia,
    ];

    /// Numeric state code, 1–16.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// State for a numeric code, if it is in 1–16.
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    /// German name of the state.
    pub fn name(self) -> &'static str {
        match self {
            Self::SchleswigHolstein => "Schleswig-Holstein",
            Self::Hamburg => "Hamburg",
            Self::LowerSaxony => "Niedersachsen",
            Self::Bremen => "Bremen",
            Self::NorthRhineWestphalia => "Nordrhein-Westfalen",
            Self::Hesse => "Hessen",
            Self::RhinelandPalatinate => "Rheinland-Pfalz",
            Self::BadenWuerttemberg => "Baden-Württemberg",
            Self::Bavaria => "Bayern",
            Self::Saarland => "Saarland",
            Self::Berlin => "Berlin",
            Self::Brandenburg => "Brandenburg",
            Self::MecklenburgWesternPomerania => "Mecklenburg-Vorpommern",
            Self::Saxony => "Sachsen",
            Self::SaxonyAnhalt => "Sachsen-Anhalt",
            Self::Thuringia => "Thüringen",
        }
    }

    /// NRW numbers use a 4-digit district and a shorter sequence.
    pub fn has_wide_district(self) -> bool {
        self == Self::NorthRhineWestphalia
    }
}

impl fmt::Display for FederalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 4-digit regional code: state number + office number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RegionalCode {
    state: FederalState,
    office: u8,
}

impl RegionalCode {
    /// Build a code from its parts. `office` must be below 100.
    pub fn new(state: FederalState, office: u8) -> Option<Self> {
        (office < 100).then_some(Self { state, office })
    }

    pub fn state(self) -> FederalState {
        self.state
    }

    pub fn office(self) -> u8 {
        self.office
    }
}

impl fmt::Display for RegionalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.state.number(), self.office)
    }
}

impl FromStr for RegionalCode {
    type Err = PrueferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PrueferError::Registry(format!("invalid regional code '{s}'"));
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let state: u8 = s[..2].parse().map_err(|_| invalid())?;
        let office: u8 = s[2..].parse().map_err(|_| invalid())?;
        let state = FederalState::from_number(state).ok_or_else(invalid)?;
        Ok(Self { state, office })
    }
}

impl From<RegionalCode> for String {
    fn from(code: RegionalCode) -> Self {
        code.to_string()
    }
}

impl TryFrom<String> for RegionalCode {
    type Error = PrueferError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A registered tax office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxOffice {
    /// Regional code (BUFA number).
    pub code: RegionalCode,
    /// Check-digit procedure for numbers issued by this office.
    #[serde(default)]
    pub procedure: ChecksumProcedure,
}

impl TaxOffice {
    pub fn state(&self) -> FederalState {
        self.code.state()
    }

    /// German name of the office's federal state.
    pub fn state_name(&self) -> &'static str {
        self.code.state().name()
    }
}

/// Immutable lookup of tax offices by regional code.
///
/// Offices are kept sorted by regional code; that order is the "registry
/// order" in which ambiguous Steuernummern try their candidate regions.
#[derive(Debug, Clone)]
pub struct TaxOfficeRegistry {
    offices: Vec<TaxOffice>,
}

static SHARED: OnceLock<TaxOfficeRegistry> = OnceLock::new();

impl TaxOfficeRegistry {
    /// Build the registry from the built-in office table.
    pub fn builtin() -> Self {
        let mut offices: Vec<TaxOffice> = BUILTIN_OFFICES
            .iter()
            .flat_map(|&(state, procedure, numbers)| {
                numbers.iter().map(move |&office| TaxOffice {
                    code: RegionalCode { state, office },
                    procedure,
                })
            })
            .collect();
        offices.sort_by_key(|o| o.code);
        Self { offices }
    }

    /// The process-wide built-in registry, constructed on first use.
    pub fn shared() -> &'static Self {
        SHARED.get_or_init(Self::builtin)
    }

    /// Build a registry from caller-supplied offices.
    ///
    /// # Errors
    ///
    /// Returns [`PrueferError::Registry`] if a regional code appears twice.
    pub fn from_entries(entries: impl IntoIterator<Item = TaxOffice>) -> Result<Self, PrueferError> {
        let mut offices: Vec<TaxOffice> = entries.into_iter().collect();
        offices.sort_by_key(|o| o.code);
        if let Some(pair) = offices.windows(2).find(|w| w[0].code == w[1].code) {
            return Err(PrueferError::Registry(format!(
                "duplicate regional code {}",
                pair[0].code
            )));
        }
        Ok(Self { offices })
    }

    /// Build a registry from a JSON array of `{"code": "1121", "procedure": "B"}`
    /// objects. A missing or unknown procedure means `standard`.
    ///
    /// # Errors
    ///
    /// Returns [`PrueferError::Json`] on malformed JSON or regional codes and
    /// [`PrueferError::Registry`] on duplicates.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, PrueferError> {
        let entries: Vec<TaxOffice> =
            serde_json::from_str(json).map_err(|e| PrueferError::Json(e.to_string()))?;
        Self::from_entries(entries)
    }

    /// Look up an office by regional code.
    pub fn get(&self, code: RegionalCode) -> Option<&TaxOffice> {
        self.offices
            .binary_search_by_key(&code, |o| o.code)
            .ok()
            .map(|idx| &self.offices[idx])
    }

    /// Look up an office by its 4-digit string code.
    pub fn lookup(&self, code: &str) -> Option<&TaxOffice> {
        self.get(code.parse().ok()?)
    }

    /// All offices of one federal state, in registry order.
    pub fn in_state(&self, state: FederalState) -> impl Iterator<Item = &TaxOffice> {
        self.offices.iter().filter(move |o| o.state() == state)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaxOffice> {
        self.offices.iter()
    }

    pub fn len(&self) -> usize {
        self.offices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offices.is_empty()
    }
}

impl Default for TaxOfficeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Built-in offices, grouped by state and procedure.
static BUILTIN_OFFICES: &[(FederalState, ChecksumProcedure, &[u8])] = &[
    (FederalState::SchleswigHolstein, ChecksumProcedure::Standard, &[
        2, 4, 11, 14, 15, 17, 22, 30, 36, 40, 41, 53, 58, 73, 75, 80, 99
    ]),
    (FederalState::Hamburg, ChecksumProcedure::Standard, &[
        1, 12, 14, 18, 25, 27, 47, 59, 60, 64, 69, 70, 72, 73, 84
    ]),
    (FederalState::LowerSaxony, ChecksumProcedure::Standard, &[
        2, 3, 4, 5, 7, 9, 11, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 31, 32, 34, 35, 37,
        38, 39, 41, 45, 46, 47, 49, 51, 54, 55, 56, 60, 61, 62, 63, 65, 67, 68, 69, 72, 73, 76,
        77, 78, 79, 81, 82, 83, 86, 87, 89, 90, 91, 94, 95, 98, 99
    ]),
    (FederalState::Bremen, ChecksumProcedure::Standard, &[19, 22, 60, 82, 99]),
    (FederalState::NorthRhineWestphalia, ChecksumProcedure::RegionalAlt, &[
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
        25, 26, 28, 29, 30, 31, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 45, 46, 47, 48, 49,
        50, 51, 52, 53, 54, 56, 57, 58, 59, 60, 61, 63, 64, 65, 67, 68, 69, 70, 71, 72, 73, 74,
        76, 77, 78, 79, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 91, 92, 93, 94, 95, 96, 97, 99
    ]),
    (FederalState::Hesse, ChecksumProcedure::Standard, &[
        4, 5, 7, 9, 10, 11, 12, 13, 14, 17, 19, 24, 25, 33, 37, 42, 50, 54, 55, 57, 60, 61, 63,
        64, 67, 70, 71, 75, 76, 78, 80, 86, 91, 93, 99
    ]),
    (FederalState::RhinelandPalatinate, ChecksumProcedure::Standard, &[
        9, 15, 17, 22, 24, 25, 33, 34, 39, 41, 43, 44, 49, 50, 51, 52, 56, 72, 74, 77, 80, 82,
        88, 93, 98
    ]),
    (FederalState::BadenWuerttemberg, ChecksumProcedure::Standard, &[
        2, 4, 5, 7, 8, 10, 11, 12, 13, 14, 15, 16, 18, 20, 21, 22, 23, 24, 26, 27, 30, 33, 34,
        38, 40, 41, 42, 43, 44, 46, 47, 48, 49, 50, 51, 52, 54, 55, 57, 59, 60, 61, 62, 63, 64,
        65, 66, 70, 72, 74, 75, 76, 77, 80, 81, 84, 85, 87, 88, 91, 94, 95, 96, 97, 99
    ]),
    (FederalState::Bavaria, ChecksumProcedure::Standard, &[
        1, 4, 5, 6, 8, 9, 10, 11, 12, 14, 15, 16, 17, 19, 20, 21, 22, 23, 24, 27, 29, 30, 31,
        32, 33, 34, 36, 37, 38, 39, 41, 42, 43, 44, 45, 46, 49, 50, 51, 52, 53, 54, 55, 56, 58,
        61, 62, 63, 64, 68, 69, 70, 71, 72, 73, 74, 75, 77, 78, 79, 80, 82, 83, 84, 86, 87, 88,
        89, 90, 92, 93, 94, 95, 97, 98, 99
    ]),
    (FederalState::Saarland, ChecksumProcedure::Standard, &[5, 8, 29, 37, 47, 52, 56, 57, 61, 97]),
    (FederalState::Berlin, ChecksumProcedure::WeightedB, &[
        13, 14, 15, 16, 17, 18, 19, 20, 21, 23, 24, 25, 26, 31, 32, 34, 35, 36, 37, 38, 39
    ]),
    (FederalState::Berlin, ChecksumProcedure::WeightedA, &[27, 28, 29, 30]),
    (FederalState::Brandenburg, ChecksumProcedure::Standard, &[
        13, 17, 24, 35, 43, 48, 53, 54, 62, 83, 86, 89, 98
    ]),
    (FederalState::MecklenburgWesternPomerania, ChecksumProcedure::Standard, &[
        16, 29, 46, 50, 56, 65, 90, 91, 94
    ]),
    (FederalState::Saxony, ChecksumProcedure::Standard, &[
        4, 7, 8, 10, 28, 30, 33, 38, 60, 61, 63, 66, 68, 76, 79, 82, 84, 89, 91, 96
    ]),
    (FederalState::SaxonyAnhalt, ChecksumProcedure::Standard, &[
        2, 5, 15, 24, 27, 41, 46, 65, 71, 72, 73, 83, 86, 87
    ]),
    (FederalState::Thuringia, ChecksumProcedure::Standard, &[
        1, 6, 8, 10, 28, 29, 37, 52, 56, 74, 87, 89
    ]),
];
