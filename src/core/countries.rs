//! Country code table for IBAN and BIC country fields.
//!
//! Lists the ISO 3166-1 alpha-2 codes accepted in the country segment of an
//! IBAN (characters 1–2) or a BIC (characters 5–6), together with the fixed
//! IBAN length registered for each country.

/// Check whether `code` is an accepted country code.
///
/// Matching is case-sensitive; callers uppercase their input first.
pub fn is_known_country_code(code: &str) -> bool {
    lookup(code).is_some()
}

/// Registered IBAN length for `code`, if the country is in the table.
pub fn iban_length(code: &str) -> Option<usize> {
    lookup(code).map(|&(_, len)| len)
}

/// All accepted country codes, in sorted order.
pub fn country_codes() -> impl Iterator<Item = &'static str> {
    COUNTRIES.iter().map(|&(code, _)| code)
}

fn lookup(code: &str) -> Option<&'static (&'static str, usize)> {
    COUNTRIES
        .binary_search_by(|(c, _)| (*c).cmp(code))
        .ok()
        .map(|idx| &COUNTRIES[idx])
}

/// Country code and IBAN length (49 entries).
/// Sorted for binary search.
static COUNTRIES: &[(&str, usize)] = &[
    ("AD", 24), ("AE", 23), ("AL", 28), ("AT", 20), ("BA", 20), ("BE", 16), ("BG", 22),
    ("BH", 22), ("BR", 29), ("CH", 21), ("CY", 28), ("CZ", 24), ("DE", 22), ("DK", 18),
    ("EE", 20), ("ES", 24), ("FI", 18), ("FO", 18), ("FR", 27), ("GB", 22), ("GE", 22),
    ("GI", 23), ("GL", 18), ("GR", 27), ("HR", 21), ("HU", 28), ("IE", 22), ("IL", 23),
    ("IS", 26), ("IT", 27), ("KW", 30), ("KZ", 20), ("LI", 21), ("LT", 20), ("LU", 20),
    ("LV", 21), ("MC", 27), ("MT", 31), ("NL", 18), ("NO", 15), ("PL", 28), ("PT", 25),
    ("RO", 24), ("SA", 24), ("SE", 24), ("SI", 19), ("SK", 24), ("SM", 27), ("TR", 26),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_countries() {
        assert!(is_known_country_code("DE"));
        assert!(is_known_country_code("AT"));
        assert!(is_known_country_code("CH"));
        assert!(is_known_country_code("FR"));
        assert!(is_known_country_code("GB"));
        assert!(is_known_country_code("NO"));
    }

    #[test]
    fn unknown_countries() {
        assert!(!is_known_country_code("ZZ"));
        assert!(!is_known_country_code("US"));
        assert!(!is_known_country_code(""));
        assert!(!is_known_country_code("DEU"));
        assert!(!is_known_country_code("de"));
    }

    #[test]
    fn iban_lengths() {
        assert_eq!(iban_length("DE"), Some(22));
        assert_eq!(iban_length("NO"), Some(15));
        assert_eq!(iban_length("MT"), Some(31));
        assert_eq!(iban_length("ZZ"), None);
    }

    #[test]
    fn lengths_within_iban_bounds() {
        for &(code, len) in COUNTRIES {
            assert!((15..=34).contains(&len), "{code} has length {len}");
        }
    }

    #[test]
    fn list_is_sorted() {
        for window in COUNTRIES.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "country codes not sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }

    #[test]
    fn list_count() {
        assert_eq!(COUNTRIES.len(), 49);
        assert_eq!(country_codes().count(), 49);
    }
}
