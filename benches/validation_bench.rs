use criterion::{Criterion, black_box, criterion_group, criterion_main};

use pruefer::banking::*;
use pruefer::tax::*;

fn bench_tax_number(c: &mut Criterion) {
    c.bench_function("steuernummer_13_digit", |b| {
        b.iter(|| validate_detailed_german_tax_number(black_box("1121081508155")))
    });

    // Short NRW input expands into one candidate per NRW office.
    c.bench_function("steuernummer_10_digit_nrw", |b| {
        b.iter(|| validate_detailed_german_tax_number(black_box("0508150815")))
    });

    c.bench_function("steuernummer_no_candidate_matches", |b| {
        b.iter(|| validate_detailed_german_tax_number(black_box("10081508159")))
    });
}

fn bench_registry(c: &mut Criterion) {
    c.bench_function("registry_builtin", |b| b.iter(TaxOfficeRegistry::builtin));
}

fn bench_identifiers(c: &mut Criterion) {
    c.bench_function("steuer_id", |b| {
        b.iter(|| validate_german_tax_id(black_box("86095742719")))
    });
    c.bench_function("iban", |b| {
        b.iter(|| validate_iban(black_box("DE89 3704 0044 0532 0130 00")))
    });
    c.bench_function("bic", |b| b.iter(|| validate_bic(black_box("DEUTDEFF500"))));
}

criterion_group!(benches, bench_tax_number, bench_registry, bench_identifiers);
criterion_main!(benches);
