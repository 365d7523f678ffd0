//! # Measurement Benchmarks
//!
//! Measures Born-rule collapse on the exact state vector and non-destructive
//! sampling. Seeded RNG keeps runs comparable.
//!
//! Run: `cargo bench --bench measurement_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use qsim_core::{StateVector, CNOT, H};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Estado GHZ de n qubits
fn ghz_state(num_qubits: usize) -> StateVector {
    let mut sv = StateVector::new(num_qubits).unwrap();
    sv.apply_single_qubit_gate(&H, 0).unwrap();
    for q in 1..num_qubits {
        sv.apply_two_qubit_gate(&CNOT, [q - 1, q]).unwrap();
    }
    sv
}

/// Benchmark single-qubit collapse
fn bench_measure_qubit(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure_qubit");
    let mut rng = StdRng::seed_from_u64(42);

    for size in [4usize, 8, 12, 15].iter() {
        let state = ghz_state(*size);
        group.bench_with_input(BenchmarkId::new("ghz", size), &state, |b, s| {
            b.iter(|| {
                let mut sv = s.clone();
                black_box(sv.measure_with(0, &mut rng).unwrap())
            })
        });
    }

    group.finish();
}

/// Benchmark full-register collapse
fn bench_measure_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure_all");
    let mut rng = StdRng::seed_from_u64(7);

    for size in [4usize, 8, 12, 15].iter() {
        let state = ghz_state(*size);
        group.bench_with_input(BenchmarkId::new("ghz", size), &state, |b, s| {
            b.iter(|| {
                let mut sv = s.clone();
                black_box(sv.measure_all_with(&mut rng))
            })
        });
    }

    group.finish();
}

/// Benchmark non-destructive sampling
fn bench_sample_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_counts");
    let mut rng = StdRng::seed_from_u64(99);
    let state = ghz_state(10);

    for shots in [100usize, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("ghz10", shots), shots, |b, &n| {
            b.iter(|| black_box(state.sample_counts(n, &mut rng)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_measure_qubit, bench_measure_all, bench_sample_counts);

criterion_main!(benches);
