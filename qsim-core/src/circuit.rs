//! # QuantumCircuit — Circuito Local
//!
//! Sequência ordenada de operações `(gate, qubits)` sobre qubits
//! independentes. Portas single-qubit são exatas; CNOT/CZ usam a
//! interpolação local de [`Gate::apply`], portanto não há emaranhamento.
//! Para correlações exatas use [`StateVector`] (ver
//! [`QuantumCircuit::to_state_vector`]).
//!
//! ## Exemplo
//!
//! ```
//! use qsim_core::{QuantumCircuit, H, X};
//!
//! let mut circuit = QuantumCircuit::new(2);
//! circuit.add_gate(H, &[0])?.add_gate(X, &[1])?;
//! circuit.execute();
//!
//! assert_eq!(circuit.measure(1)?, 1);
//! # Ok::<(), qsim_core::QuantumError>(())
//! ```

use crate::complex::Complex;
use crate::error::{QuantumError, QuantumResult, check_qubit};
use crate::gates::Gate;
use crate::qubit::Qubit;
use crate::register::QuantumRegister;
use crate::state_vector::StateVector;
use rand::{Rng, RngCore};

/// Operação registrada: porta e índices dos qubits
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub gate: Gate,
    pub qubits: Vec<usize>,
}

/// Circuito quântico local
#[derive(Clone, Debug, Default)]
pub struct QuantumCircuit {
    qubits: Vec<Qubit>,
    operations: Vec<Operation>,
}

impl QuantumCircuit {
    /// Cria circuito com `num_qubits` qubits em |0⟩
    pub fn new(num_qubits: usize) -> Self {
        tracing::debug!(num_qubits, "local circuit created");
        Self {
            qubits: vec![Qubit::zero(); num_qubits],
            operations: Vec::new(),
        }
    }

    /// Número de qubits
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Número de operações registradas
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Verifica se não há operações
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Operações registradas, em ordem
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Cópia de um qubit
    pub fn qubit(&self, index: usize) -> QuantumResult<Qubit> {
        check_qubit(index, self.num_qubits())?;
        Ok(self.qubits[index])
    }

    /// Cópia de todos os qubits
    pub fn qubits(&self) -> Vec<Qubit> {
        self.qubits.clone()
    }

    /// Define um qubit diretamente, sem registrar operação
    pub fn initialize(&mut self, index: usize, alpha: Complex, beta: Complex) -> QuantumResult<()> {
        check_qubit(index, self.num_qubits())?;
        self.qubits[index].set_state(alpha, beta);
        Ok(())
    }

    /// Registra uma porta
    ///
    /// Falha se o número de índices difere da aridade, se algum índice
    /// está fora do registrador ou se um índice se repete.
    pub fn add_gate(&mut self, gate: Gate, qubits: &[usize]) -> QuantumResult<&mut Self> {
        if qubits.len() != gate.num_qubits() {
            return Err(QuantumError::ArityMismatch {
                gate: gate.name(),
                expected: gate.num_qubits(),
                actual: qubits.len(),
            });
        }
        for &index in qubits {
            check_qubit(index, self.num_qubits())?;
        }
        if let [a, b] = qubits
            && a == b
        {
            return Err(QuantumError::DuplicateQubit(*a));
        }

        self.operations.push(Operation {
            gate,
            qubits: qubits.to_vec(),
        });
        Ok(self)
    }

    /// Reexecuta todas as operações em ordem
    ///
    /// Os qubits mudam no lugar: executar duas vezes sem `reset` aplica as
    /// portas duas vezes.
    pub fn execute(&mut self) {
        for op in &self.operations {
            let mut targets: Vec<Qubit> = op.qubits.iter().map(|&i| self.qubits[i]).collect();
            // Índices e aridade validados em add_gate
            if let Err(err) = op.gate.apply(&mut targets) {
                tracing::error!(%err, "skipping invalid operation");
                continue;
            }
            for (&index, qubit) in op.qubits.iter().zip(targets) {
                self.qubits[index] = qubit;
            }
        }
        tracing::debug!(operations = self.operations.len(), "local circuit executed");
    }

    /// Mede um qubit com o gerador da thread
    pub fn measure(&mut self, index: usize) -> QuantumResult<u8> {
        self.measure_with(index, &mut rand::thread_rng())
    }

    /// Mede um qubit usando `rng`
    pub fn measure_with<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) -> QuantumResult<u8> {
        check_qubit(index, self.num_qubits())?;
        Ok(self.qubits[index].measure_with(rng))
    }

    /// Mede todos os qubits com o gerador da thread
    pub fn measure_all(&mut self) -> Vec<u8> {
        self.measure_all_with(&mut rand::thread_rng())
    }

    /// Mede cada qubit de forma independente, em ordem de índice
    pub fn measure_all_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<u8> {
        self.qubits.iter_mut().map(|q| q.measure_with(rng)).collect()
    }

    /// Volta todos os qubits para |0⟩ e limpa as operações
    pub fn reset(&mut self) {
        self.qubits.fill(Qubit::zero());
        self.operations.clear();
    }

    /// Reexecuta as operações registradas num [`StateVector`] exato
    ///
    /// Parte de |0…0⟩: amplitudes definidas por `initialize` não são
    /// transportadas.
    pub fn to_state_vector(&self) -> QuantumResult<StateVector> {
        let mut state = StateVector::new(self.num_qubits())?;
        for op in &self.operations {
            state.apply_gate(&op.gate, &op.qubits)?;
        }
        Ok(state)
    }
}

impl QuantumRegister for QuantumCircuit {
    fn num_qubits(&self) -> usize {
        QuantumCircuit::num_qubits(self)
    }

    fn measure_qubit(&mut self, index: usize, rng: &mut dyn RngCore) -> QuantumResult<u8> {
        self.measure_with(index, rng)
    }

    fn measure_register(&mut self, rng: &mut dyn RngCore) -> Vec<u8> {
        self.measure_all_with(rng)
    }

    fn reset(&mut self) {
        QuantumCircuit::reset(self)
    }
}
