//! # Local Circuit Benchmarks
//!
//! Measures recording and replay on the per-qubit local model, and the cost of
//! replaying the same operations on the exact state vector.
//!
//! Run: `cargo bench --bench circuit_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use qsim_core::{ry, QuantumCircuit, CNOT, H};

/// Circuito em camadas: H em todos, RY em todos, CNOT em cadeia
fn layered_circuit(num_qubits: usize, layers: usize) -> QuantumCircuit {
    let mut circuit = QuantumCircuit::new(num_qubits);
    for layer in 0..layers {
        for q in 0..num_qubits {
            circuit.add_gate(H, &[q]).unwrap();
            circuit.add_gate(ry(0.1 * (layer + q) as f64), &[q]).unwrap();
        }
        for q in 1..num_qubits {
            circuit.add_gate(CNOT, &[q - 1, q]).unwrap();
        }
    }
    circuit
}

/// Benchmark local replay
fn bench_execute(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit_execute");

    for size in [4usize, 8, 15].iter() {
        let circuit = layered_circuit(*size, 4);
        group.bench_with_input(BenchmarkId::new("local", size), &circuit, |b, circ| {
            b.iter(|| {
                let mut run = circ.clone();
                run.execute();
                black_box(run)
            })
        });

        group.bench_with_input(BenchmarkId::new("exact", size), &circuit, |b, circ| {
            b.iter(|| black_box(circ.to_state_vector().unwrap()))
        });
    }

    group.finish();
}

/// Benchmark operation recording
fn bench_add_gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit_build");

    group.bench_function("layered_8x4", |b| {
        b.iter(|| black_box(layered_circuit(8, 4)))
    });

    group.finish();
}

criterion_group!(benches, bench_execute, bench_add_gate);

criterion_main!(benches);
