#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic; every input yields an outcome.
        let outcome = pruefer::validate_detailed_german_tax_number(s);
        assert_eq!(outcome.is_valid(), pruefer::validate_german_tax_number(s));
        let _ = pruefer::validate_german_tax_id(s);
    }
});
