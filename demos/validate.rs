use pruefer::run_validation_preset;
use pruefer::tax::*;
use serde_json::json;

fn main() {
    println!("=== Steuernummer ===\n");

    let numbers = [
        "1121081508155", // Berlin, 13-digit ELSTER
        "11/081/50815",  // Berlin, short format
        "0508150815",    // NRW, short format
        "1121081508156", // wrong check digit
        "10081508159",   // no Saarland office accepts it
        "0000000000",    // all zeros
        "123456",        // too short
    ];

    for raw in &numbers {
        match validate_detailed_german_tax_number(raw) {
            TaxNumberOutcome::Valid { canonical, office } => println!(
                "  {raw} => valid (canonical={canonical}, office={}, {})",
                office.code,
                office.state_name()
            ),
            TaxNumberOutcome::Invalid { reason, office } => match office {
                Some(office) => println!("  {raw} => INVALID: {reason} (office {})", office.code),
                None => println!("  {raw} => INVALID: {reason}"),
            },
        }
    }

    println!("\n=== Steuer-ID ===\n");

    for raw in ["86095742719", "86095742710"] {
        match check_german_tax_id(raw) {
            Ok(()) => println!("  {raw} => valid"),
            Err(e) => println!("  {raw} => INVALID: {e}"),
        }
    }

    println!("\n=== Presets ===\n");

    let inputs = [
        ("iban", json!("DE89 3704 0044 0532 0130 00")),
        ("iban", json!("DE88 3704 0044 0532 0130 00")),
        ("bic", json!("DEUTDEFF")),
        ("bic", json!("DEUTZZFF")),
        ("taxId", json!(86095742719u64)),
        ("vatId", json!("DE123456789")),
    ];

    for (preset, value) in &inputs {
        println!("  {preset}({value}) => {}", run_validation_preset(preset, value));
    }
}
