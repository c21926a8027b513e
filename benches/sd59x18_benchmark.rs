// ============================================================================
// SD59x18 Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. avg - Bitwise overflow-free average against an i128 reference
// 2. Multiplicative - mul / div through the 512-bit intermediate
// 3. Roots - sqrt and gm with fixed Newton rounds
// 4. Surfaces - raw vs typed dispatch over the same operation
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sd59x18::prelude::*;

/// Operand pairs from small values up to the range edges.
fn operand_sets() -> Vec<(&'static str, I256, I256)> {
    vec![
        ("small", I256::from_i128(3), I256::from_i128(-7)),
        (
            "whole",
            SD59x18::from_i128(1_234_567).raw_value(),
            SD59x18::from_i128(-89).raw_value(),
        ),
        ("boundary", MAX_WHOLE_SD59X18, MIN_SD59X18),
    ]
}

// ============================================================================
// avg
// ============================================================================

fn benchmark_avg(c: &mut Criterion) {
    let mut group = c.benchmark_group("avg");

    for (label, x, y) in operand_sets() {
        group.bench_with_input(BenchmarkId::new("bitwise", label), &(x, y), |b, &(x, y)| {
            b.iter(|| black_box(math::avg(black_box(x), black_box(y))));
        });
    }

    // i128 reference where the naive sum still fits
    group.bench_function("i128_naive/small", |b| {
        b.iter(|| black_box((black_box(3i128) + black_box(-7i128)).div_euclid(2)));
    });

    group.finish();
}

// ============================================================================
// mul / div
// ============================================================================

fn benchmark_mul_div(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul_div");

    let price: SD59x18 = "1999.999999999999999999".parse().expect("valid literal");
    let qty: SD59x18 = "0.000123456789".parse().expect("valid literal");

    group.bench_function("mul", |b| {
        b.iter(|| black_box(black_box(price).checked_mul(black_box(qty))));
    });
    group.bench_function("div", |b| {
        b.iter(|| black_box(black_box(price).checked_div(black_box(qty))));
    });
    group.bench_function("powu_17", |b| {
        b.iter(|| black_box(black_box(SD59x18::HALF).powu(black_box(17))));
    });

    group.finish();
}

// ============================================================================
// Roots
// ============================================================================

fn benchmark_roots(c: &mut Criterion) {
    let mut group = c.benchmark_group("roots");

    for (label, x) in [
        ("two", SD59x18::from_i128(2)),
        ("max", SD59x18::MAX),
    ] {
        group.bench_with_input(BenchmarkId::new("sqrt", label), &x, |b, &x| {
            b.iter(|| black_box(black_box(x).sqrt()));
        });
    }

    group.bench_function("gm", |b| {
        let x = SD59x18::from_i128(1_000);
        let y: SD59x18 = "3.14159".parse().expect("valid literal");
        b.iter(|| black_box(black_box(x).gm(black_box(y))));
    });

    group.finish();
}

// ============================================================================
// Surface Comparison
// ============================================================================

fn benchmark_surfaces(c: &mut Criterion) {
    let mut group = c.benchmark_group("surfaces");
    let x = SD59x18::from_i128(42).raw_value();
    let y = SD59x18::HALF.raw_value();

    for op in [Operation::Add, Operation::Mul, Operation::Div, Operation::Floor] {
        group.bench_with_input(BenchmarkId::new("raw", op), &op, |b, &op| {
            b.iter(|| black_box(evaluate(&RawSurface, op, black_box(x), black_box(y))));
        });
        group.bench_with_input(BenchmarkId::new("typed", op), &op, |b, &op| {
            b.iter(|| black_box(evaluate(&TypedSurface, op, black_box(x), black_box(y))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_avg,
    benchmark_mul_div,
    benchmark_roots,
    benchmark_surfaces
);
criterion_main!(benches);
