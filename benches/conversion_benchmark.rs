// ============================================================================
// Conversion Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Encoding - integer to numeral, strict and lenient
// 2. Decoding - numeral to integer, strict (validating) and lenient
// 3. Value Construction - RomanValue from either side
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use roman_numeral::numeral::{
    integer_to_numeral, integer_to_numeral_lenient, numeral_to_integer,
    numeral_to_integer_lenient,
};
use roman_numeral::prelude::*;
use std::hint::black_box;

// Short, typical and longest canonical numerals
const SAMPLES: [i64; 3] = [12, 1987, 3888];

// ============================================================================
// Encoding Benchmarks
// ============================================================================

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for value in SAMPLES.iter() {
        group.bench_with_input(BenchmarkId::new("strict", value), value, |b, &value| {
            b.iter(|| black_box(integer_to_numeral(black_box(value))));
        });

        group.bench_with_input(BenchmarkId::new("lenient", value), value, |b, &value| {
            b.iter(|| black_box(integer_to_numeral_lenient(black_box(value))));
        });
    }

    group.finish();
}

// ============================================================================
// Decoding Benchmarks
// Strict decoding re-encodes to check canonical form
// ============================================================================

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for value in SAMPLES.iter() {
        let numeral = integer_to_numeral_lenient(*value);

        group.bench_with_input(
            BenchmarkId::new("strict", &numeral),
            &numeral,
            |b, numeral| {
                b.iter(|| black_box(numeral_to_integer(black_box(numeral))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("lenient", &numeral),
            &numeral,
            |b, numeral| {
                b.iter(|| black_box(numeral_to_integer_lenient(black_box(numeral))));
            },
        );
    }

    group.finish();
}

fn benchmark_full_range_round_trip(c: &mut Criterion) {
    c.bench_function("round_trip_1_to_3999", |b| {
        b.iter(|| {
            for n in 1..=3999 {
                let numeral = integer_to_numeral_lenient(n);
                black_box(numeral_to_integer(&numeral).ok());
            }
        });
    });
}

// ============================================================================
// Value Construction Benchmarks
// ============================================================================

fn benchmark_roman_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("roman_value");

    group.bench_function("from_integer", |b| {
        b.iter(|| black_box(RomanValue::from_integer(black_box(1987))));
    });

    group.bench_function("from_numeral", |b| {
        b.iter(|| black_box(RomanValue::from_numeral(black_box("MCMLXXXVII"))));
    });

    let lenient = ConversionConfig::lenient();
    group.bench_function("from_numeral_lenient", |b| {
        b.iter(|| {
            black_box(RomanValue::from_numeral_with(
                black_box("MCMLXXXVII"),
                &lenient,
            ))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode,
    benchmark_decode,
    benchmark_full_range_round_trip,
    benchmark_roman_value,
);
criterion_main!(benches);
