//! Property-based tests for the validators.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(feature = "all")]

use proptest::prelude::*;
use pruefer::banking::*;
use pruefer::tax::*;

/// Insert separator characters at the given positions.
fn with_separators(value: &str, inserts: &[(usize, char)]) -> String {
    let mut chars: Vec<char> = value.chars().collect();
    for &(pos, sep) in inserts {
        let at = pos % (chars.len() + 1);
        chars.insert(at, sep);
    }
    chars.into_iter().collect()
}

fn arb_separators() -> impl Strategy<Value = Vec<(usize, char)>> {
    prop::collection::vec((0usize..40, prop::sample::select(vec![' ', '/', '-'])), 0..6)
}

fn arb_office() -> impl Strategy<Value = TaxOffice> {
    let registry = TaxOfficeRegistry::shared();
    (0..registry.len()).prop_map(move |idx| *registry.iter().nth(idx).unwrap())
}

/// A checksum-valid 13-digit number with the filler digit in place.
fn arb_valid_canonical() -> impl Strategy<Value = (TaxOffice, String)> {
    (arb_office(), "[0-9]{7}").prop_map(|(office, rest)| {
        let body = format!("{}0{rest}", office.code);
        let mut digits = [0u8; 12];
        for (slot, b) in digits.iter_mut().zip(body.bytes()) {
            *slot = b - b'0';
        }
        let check = office.procedure.expected_check_digit(&digits);
        (office, format!("{body}{check}"))
    })
}

proptest! {
    /// Digit counts outside 10..=13 are always rejected as invalid length.
    #[test]
    fn wrong_digit_count_rejected(digits in "[0-9]{0,9}|[0-9]{14,30}") {
        let outcome = validate_detailed_german_tax_number(&digits);
        prop_assert_eq!(outcome.reason(), Some(TaxNumberFailure::InvalidLength));
    }

    /// A valid canonical number validates to itself and its own office.
    #[test]
    fn canonical_is_idempotent((office, number) in arb_valid_canonical()) {
        let outcome = validate_detailed_german_tax_number(&number);
        prop_assert!(outcome.is_valid());
        prop_assert_eq!(outcome.canonical().unwrap().as_str(), number.as_str());
        prop_assert_eq!(outcome.regional_code(), Some(office.code));
    }

    /// The 10-digit projection re-expands to the original among its candidates.
    #[test]
    fn ten_digit_projection_round_trips((_office, number) in arb_valid_canonical()) {
        let short = format!("{}{}", &number[..2], &number[5..]);
        prop_assert_eq!(short.len(), 10);

        let input = NormalizedInput::parse(&short).unwrap();
        let candidates = Normalizer::new(TaxOfficeRegistry::shared()).candidates(&input);
        prop_assert!(candidates.iter().any(|c| c.canonical.as_str() == number));
        prop_assert!(validate_german_tax_number(&short));
    }

    /// The 12-digit form (filler removed) maps back to the same number.
    #[test]
    fn twelve_digit_form_round_trips((_office, number) in arb_valid_canonical()) {
        let short = format!("{}{}", &number[..4], &number[5..]);
        let outcome = validate_detailed_german_tax_number(&short);
        prop_assert_eq!(outcome.canonical().map(|c| c.as_str()), Some(number.as_str()));
    }

    /// Separators never change a Steuernummer outcome.
    #[test]
    fn tax_number_ignores_separators(digits in "[0-9]{8,14}", seps in arb_separators()) {
        let formatted = with_separators(&digits, &seps);
        prop_assert_eq!(
            validate_detailed_german_tax_number(&digits),
            validate_detailed_german_tax_number(&formatted)
        );
    }

    /// Separators never change a valid Steuernummer into an invalid one.
    #[test]
    fn valid_tax_number_survives_formatting(
        (_office, number) in arb_valid_canonical(),
        seps in arb_separators(),
    ) {
        prop_assert!(validate_german_tax_number(&with_separators(&number, &seps)));
    }

    /// Separators never change an IBAN outcome.
    #[test]
    fn iban_ignores_separators(raw in "[A-Z0-9]{0,36}", seps in arb_separators()) {
        prop_assert_eq!(validate_iban(&raw), validate_iban(&with_separators(&raw, &seps)));
    }

    #[test]
    fn known_iban_survives_formatting(seps in arb_separators()) {
        prop_assert!(validate_iban(&with_separators("DE89370400440532013000", &seps)));
        prop_assert!(validate_iban(&with_separators("GB82WEST12345698765432", &seps)));
    }

    /// Separators never change a BIC outcome.
    #[test]
    fn bic_ignores_separators(raw in "[A-Z0-9]{6,12}", seps in arb_separators()) {
        prop_assert_eq!(validate_bic(&raw), validate_bic(&with_separators(&raw, &seps)));
    }

    /// Appending the computed check digit always yields a valid Steuer-ID,
    /// and any other final digit never does.
    #[test]
    fn tax_id_check_digit(first_ten in "[0-9]{10}", other in 0u8..10) {
        let check = calculate_check_digit(&first_ten).unwrap();
        let valid = format!("{first_ten}{check}");
        prop_assert!(validate_german_tax_id(&valid));
        if other != check {
            let invalid = format!("{first_ten}{other}");
            prop_assert!(!validate_german_tax_id(&invalid));
        }
    }

    /// Arbitrary input never panics.
    #[test]
    fn arbitrary_input_is_total(s in "\\PC{0,40}") {
        let _ = validate_detailed_german_tax_number(&s);
        let _ = validate_german_tax_id(&s);
        let _ = validate_iban(&s);
        let _ = validate_bic(&s);
    }
}
