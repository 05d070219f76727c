//! Benchmarks for the cardface formatting pipeline.
//!
//! Run with: cargo bench

use cardface::{
    expiry::format_expiry, issuer::match_issuer, luhn, number::format_number, CardFace, CardProps,
    Issuer, Placeholders,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

// Test card numbers
const VISA: &str = "4242424242424242";
const AMEX: &str = "378282246310005";
const VISA_19: &str = "4242424242424242424";

/// Benchmark issuer detection
fn bench_match_issuer(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_issuer");

    group.bench_function("visa", |b| b.iter(|| match_issuer(black_box(VISA))));
    group.bench_function("amex", |b| b.iter(|| match_issuer(black_box(AMEX))));
    group.bench_function("unknown", |b| {
        b.iter(|| match_issuer(black_box("1111111111111111")))
    });

    // Random 16-digit inputs, deterministic seed
    let mut rng = StdRng::seed_from_u64(42);
    let random_numbers: Vec<String> = (0..64)
        .map(|_| (0..16).map(|_| char::from(b'0' + rng.gen_range(0..10))).collect())
        .collect();
    group.bench_function("random_batch_64", |b| {
        b.iter(|| {
            for number in &random_numbers {
                black_box(match_issuer(black_box(number)));
            }
        })
    });

    group.finish();
}

/// Benchmark number display formatting
fn bench_format_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_number");

    group.bench_function("empty_mask", |b| {
        b.iter(|| format_number(black_box(""), Issuer::Unknown, 16, false))
    });
    group.bench_function("visa_16", |b| {
        b.iter(|| format_number(black_box(VISA), Issuer::Visa, 19, false))
    });
    group.bench_function("amex_15", |b| {
        b.iter(|| format_number(black_box(AMEX), Issuer::AmericanExpress, 15, false))
    });
    group.bench_function("visa_19", |b| {
        b.iter(|| format_number(black_box(VISA_19), Issuer::Visa, 19, false))
    });

    group.finish();
}

/// Benchmark expiry formatting
fn bench_format_expiry(c: &mut Criterion) {
    let placeholders = Placeholders::default();

    c.bench_function("format_expiry", |b| {
        b.iter(|| format_expiry(black_box("12/2025"), &placeholders))
    });
}

/// Benchmark Luhn validation
fn bench_luhn(c: &mut Criterion) {
    let mut group = c.benchmark_group("luhn");

    group.bench_function("luhn_16", |b| b.iter(|| luhn::validate_str(black_box(VISA))));
    group.bench_function("luhn_15", |b| b.iter(|| luhn::validate_str(black_box(AMEX))));

    group.finish();
}

/// Benchmark a full widget render (the per-keystroke cost for a host)
fn bench_full_render(c: &mut Criterion) {
    c.bench_function("full_render", |b| {
        let mut face = CardFace::new();
        let props = CardProps::new(VISA, "J SMITH", "12/30", "123");
        b.iter(|| face.render(black_box(&props)))
    });
}

criterion_group!(
    benches,
    bench_match_issuer,
    bench_format_number,
    bench_format_expiry,
    bench_luhn,
    bench_full_render
);
criterion_main!(benches);
