//! # ⚛️ qsim-core — Pure-State Quantum Simulation
//!
//! Motor de evolução de estados quânticos puros: aritmética complexa,
//! qubits, portas unitárias e duas representações de registrador com
//! fidelidades diferentes.
//!
//! ## Computational Complexity
//!
//! **QuantumCircuit (local) — O(ops):**
//! - Cada qubit guardado de forma independente (2 amplitudes)
//! - CNOT/CZ interpolam o alvo pela P(1) do controle, sem estado conjunto
//!
//! **StateVector (exato) — O(2^n) por porta:**
//! - 2^n amplitudes, n ≤ 15
//! - Emaranhamento exato, medição pela regra de Born
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  QuantumCircuit          StateVector            │
//! │  ┌──────────────────┐    ┌──────────────────┐   │
//! │  │ Vec<Qubit>       │    │ 2^n amplitudes   │   │
//! │  │ Vec<Operation>   │    │ bit k = qubit k  │   │
//! │  └──────────────────┘    └──────────────────┘   │
//! │           └──── QuantumRegister ────┘           │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Gates: H X Y Z S T RX RY RZ CNOT CZ SWAP │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Complex                                  │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qsim_core::{StateVector, CNOT, H};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let mut sv = StateVector::new(2)?;
//! sv.apply_single_qubit_gate(&H, 0)?;
//! sv.apply_two_qubit_gate(&CNOT, [0, 1])?;
//!
//! let a = sv.measure_with(0, &mut rng)?;
//! let b = sv.measure_with(1, &mut rng)?;
//! assert_eq!(a, b);
//! # Ok::<(), qsim_core::QuantumError>(())
//! ```

pub mod complex;
pub mod error;
pub mod config;
pub mod qubit;
pub mod gates;
pub mod register;
pub mod circuit;
pub mod state_vector;

pub use complex::Complex;
pub use error::{ErrorKind, QuantumError, QuantumResult};
pub use config::{MAX_QUBITS, SimulatorConfig};
pub use qubit::Qubit;
pub use gates::{
    Gate, GateKind, GateMatrix, Matrix2x2, Matrix4x4,
    CNOT, CZ, H, S, SWAP, T, X, Y, Z,
    phase, rx, ry, rz,
};
pub use register::QuantumRegister;
pub use circuit::{Operation, QuantumCircuit};
pub use state_vector::StateVector;
