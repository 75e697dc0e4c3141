#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(iban) = pruefer::banking::parse_iban(s) {
            // A parsed IBAN must re-validate in its electronic form.
            assert!(pruefer::validate_iban(iban.as_str()));
        }
        let _ = pruefer::banking::parse_bic(s);
    }
});
