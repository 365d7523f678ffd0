//! # Gate Benchmarks
//!
//! Measures gate application on the exact state vector: single-qubit
//! contraction and two-qubit sub-state mixing, both O(2^n).
//!
//! Run: `cargo bench --bench gate_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use qsim_core::{rx, Gate, StateVector, CNOT, H, SWAP, T};

/// Estado de n qubits em superposição uniforme
fn uniform_state(num_qubits: usize) -> StateVector {
    let mut sv = StateVector::new(num_qubits).unwrap();
    for q in 0..num_qubits {
        sv.apply_single_qubit_gate(&H, q).unwrap();
    }
    sv
}

/// Benchmark single-qubit gates by register size
fn bench_single_qubit(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit_gate");

    for size in [4usize, 8, 12, 15].iter() {
        let state = uniform_state(*size);

        group.bench_with_input(BenchmarkId::new("hadamard", size), &state, |b, s| {
            b.iter(|| {
                let mut sv = s.clone();
                sv.apply_single_qubit_gate(black_box(&H), size - 1).unwrap();
                black_box(sv)
            })
        });

        let rotation = rx(0.37);
        group.bench_with_input(BenchmarkId::new("rx", size), &state, |b, s| {
            b.iter(|| {
                let mut sv = s.clone();
                sv.apply_single_qubit_gate(black_box(&rotation), 0).unwrap();
                black_box(sv)
            })
        });
    }

    group.finish();
}

/// Benchmark two-qubit gates by register size
fn bench_two_qubit(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_qubit_gate");

    for size in [4usize, 8, 12, 15].iter() {
        let state = uniform_state(*size);

        for (name, gate) in [("cnot", CNOT), ("swap", SWAP)] {
            group.bench_with_input(BenchmarkId::new(name, size), &state, |b, s| {
                b.iter(|| {
                    let mut sv = s.clone();
                    sv.apply_two_qubit_gate(black_box(&gate), [0, size - 1]).unwrap();
                    black_box(sv)
                })
            });
        }
    }

    group.finish();
}

/// Benchmark gate construction and unitarity check
fn bench_gate_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_algebra");

    group.bench_function("rx_factory", |b| {
        b.iter(|| black_box(rx(black_box(1.234))))
    });

    let gates: [Gate; 3] = [H, T, CNOT];
    group.bench_function("is_unitary_3", |b| {
        b.iter(|| {
            for gate in gates.iter() {
                black_box(gate.is_unitary());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_single_qubit, bench_two_qubit, bench_gate_algebra);

criterion_main!(benches);
