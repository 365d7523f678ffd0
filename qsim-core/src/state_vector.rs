//! # StateVector — Vetor de Estado Exato
//!
//! Estado conjunto de n qubits como 2^n amplitudes complexas. O índice de
//! uma amplitude é uma máscara de bits em que o bit k é o valor do qubit k.
//!
//! ## Computational Complexity
//!
//! - `apply_single_qubit_gate`, `apply_two_qubit_gate`: O(2^n)
//! - `measure`, `measure_all`: O(2^n)
//! - `sample_counts`: O(2^n + shots × 2^n) no pior caso
//!
//! Com o teto de [`MAX_QUBITS`](crate::MAX_QUBITS) o pior caso é limitado, então tudo é síncrono.
//!
//! ## Exemplo
//!
//! ```
//! use qsim_core::{StateVector, CNOT, H};
//!
//! let mut sv = StateVector::new(2)?;
//! sv.apply_single_qubit_gate(&H, 0)?;
//! sv.apply_two_qubit_gate(&CNOT, [0, 1])?;
//!
//! let bits = sv.measure_all();
//! assert_eq!(bits[0], bits[1]);
//! # Ok::<(), qsim_core::QuantumError>(())
//! ```

use crate::complex::Complex;
use crate::config::SimulatorConfig;
use crate::error::{QuantumError, QuantumResult, check_qubit};
use crate::gates::{Gate, GateMatrix};
use crate::register::QuantumRegister;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Vetor de estado de n qubits
///
/// Snapshots desserializados passam pelas mesmas checagens de `with_config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StateVectorSnapshot")]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex>,
    config: SimulatorConfig,
}

/// Forma serializada, ainda não validada
#[derive(Deserialize)]
struct StateVectorSnapshot {
    num_qubits: usize,
    amplitudes: Vec<Complex>,
    #[serde(default)]
    config: SimulatorConfig,
}

impl TryFrom<StateVectorSnapshot> for StateVector {
    type Error = QuantumError;

    fn try_from(snapshot: StateVectorSnapshot) -> QuantumResult<Self> {
        let StateVectorSnapshot { num_qubits, amplitudes, config } = snapshot;
        config.validate()?;
        if num_qubits > config.max_qubits {
            return Err(QuantumError::CapacityExceeded {
                requested: num_qubits,
                max: config.max_qubits,
            });
        }
        if amplitudes.len() != 1 << num_qubits {
            return Err(QuantumError::DimensionMismatch {
                expected: 1 << num_qubits,
                actual: amplitudes.len(),
            });
        }

        Ok(Self {
            num_qubits,
            amplitudes,
            config,
        })
    }
}

impl StateVector {
    /// Cria estado |0…0⟩ com `num_qubits` qubits
    pub fn new(num_qubits: usize) -> QuantumResult<Self> {
        Self::with_config(num_qubits, SimulatorConfig::default())
    }

    /// Cria estado |0…0⟩ com configuração customizada
    pub fn with_config(num_qubits: usize, config: SimulatorConfig) -> QuantumResult<Self> {
        config.validate()?;
        if num_qubits > config.max_qubits {
            return Err(QuantumError::CapacityExceeded {
                requested: num_qubits,
                max: config.max_qubits,
            });
        }

        let mut amplitudes = vec![Complex::ZERO; 1 << num_qubits];
        amplitudes[0] = Complex::ONE;
        tracing::debug!(num_qubits, dimension = amplitudes.len(), "state vector created");

        Ok(Self {
            num_qubits,
            amplitudes,
            config,
        })
    }

    /// Número de qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimensão 2^n
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Amplitudes, indexadas pela máscara de bits
    pub fn state_vector(&self) -> &[Complex] {
        &self.amplitudes
    }

    /// Amplitude de um estado da base
    pub fn amplitude(&self, index: usize) -> Option<Complex> {
        self.amplitudes.get(index).copied()
    }

    /// Configuração em uso
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Σ|a_i|²
    pub fn norm_sq(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sq()).sum()
    }

    /// Distribuição de probabilidade sobre os 2^n estados da base
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sq()).collect()
    }

    /// Volta para |0…0⟩
    pub fn reset(&mut self) {
        self.amplitudes.fill(Complex::ZERO);
        self.amplitudes[0] = Complex::ONE;
    }

    /// Substitui o vetor inteiro
    ///
    /// Exige comprimento 2^n e |Σ|v|² - 1| dentro de `norm_tolerance`.
    pub fn set_state(&mut self, vector: &[Complex]) -> QuantumResult<()> {
        if vector.len() != self.dimension() {
            return Err(QuantumError::DimensionMismatch {
                expected: self.dimension(),
                actual: vector.len(),
            });
        }
        let norm: f64 = vector.iter().map(|a| a.norm_sq()).sum();
        let normalized = (norm - 1.0).abs() <= self.config.norm_tolerance;
        if !normalized {
            return Err(QuantumError::NotNormalized { norm });
        }

        self.amplitudes.copy_from_slice(vector);
        Ok(())
    }

    /// Aplica uma porta conforme sua aridade
    pub fn apply_gate(&mut self, gate: &Gate, qubits: &[usize]) -> QuantumResult<()> {
        match *qubits {
            [q] if gate.num_qubits() == 1 => self.apply_single_qubit_gate(gate, q),
            [q1, q2] if gate.num_qubits() == 2 => self.apply_two_qubit_gate(gate, [q1, q2]),
            _ => Err(QuantumError::ArityMismatch {
                gate: gate.name(),
                expected: gate.num_qubits(),
                actual: qubits.len(),
            }),
        }
    }

    /// Aplica porta single-qubit ao qubit `qubit`
    ///
    /// Cada amplitude de entrada contribui para dois índices de saída (`i`
    /// e `i ^ (1 << qubit)`), então o resultado vai para um vetor novo.
    pub fn apply_single_qubit_gate(&mut self, gate: &Gate, qubit: usize) -> QuantumResult<()> {
        let GateMatrix::Single(matrix) = gate.matrix() else {
            return Err(QuantumError::ArityMismatch {
                gate: gate.name(),
                expected: gate.num_qubits(),
                actual: 1,
            });
        };
        check_qubit(qubit, self.num_qubits)?;

        let m = &matrix.elements;
        let mask = 1 << qubit;
        let mut next = vec![Complex::ZERO; self.dimension()];

        for (i, &amp) in self.amplitudes.iter().enumerate() {
            let flipped = i ^ mask;
            if i & mask == 0 {
                next[i] = next[i].add(amp.mul(m[0][0]));
                next[flipped] = next[flipped].add(amp.mul(m[1][0]));
            } else {
                next[flipped] = next[flipped].add(amp.mul(m[0][1]));
                next[i] = next[i].add(amp.mul(m[1][1]));
            }
        }

        self.amplitudes = next;
        tracing::trace!(gate = gate.name(), qubit, "single-qubit gate applied");
        Ok(())
    }

    /// Aplica porta two-qubit aos qubits `[q1, q2]`
    ///
    /// A ordem é normalizada para controle = min(q1, q2) e alvo = max(q1, q2).
    /// Para cada índice de entrada o sub-estado é `controle << 1 | alvo` e a
    /// contribuição para cada sub-estado de saída é `v · m[entrada][saída]`.
    pub fn apply_two_qubit_gate(&mut self, gate: &Gate, qubits: [usize; 2]) -> QuantumResult<()> {
        let GateMatrix::Two(matrix) = gate.matrix() else {
            return Err(QuantumError::ArityMismatch {
                gate: gate.name(),
                expected: gate.num_qubits(),
                actual: 2,
            });
        };
        let [q1, q2] = qubits;
        check_qubit(q1, self.num_qubits)?;
        check_qubit(q2, self.num_qubits)?;
        if q1 == q2 {
            return Err(QuantumError::DuplicateQubit(q1));
        }

        let (control, target) = (q1.min(q2), q1.max(q2));
        let clear = !((1 << control) | (1 << target));
        let mut next = vec![Complex::ZERO; self.dimension()];

        for (i, &amp) in self.amplitudes.iter().enumerate() {
            if amp == Complex::ZERO {
                continue;
            }
            let input = (((i >> control) & 1) << 1) | ((i >> target) & 1);
            let base = i & clear;
            for (output, &entry) in matrix.elements[input].iter().enumerate() {
                let j = base | ((output >> 1) << control) | ((output & 1) << target);
                next[j] = next[j].add(amp.mul(entry));
            }
        }

        self.amplitudes = next;
        tracing::trace!(gate = gate.name(), control, target, "two-qubit gate applied");
        Ok(())
    }

    /// Probabilidade de o qubit valer 1
    pub fn probability_one(&self, qubit: usize) -> QuantumResult<f64> {
        check_qubit(qubit, self.num_qubits)?;
        let mask = 1 << qubit;
        Ok(self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, a)| a.norm_sq())
            .sum())
    }

    /// Mede um qubit com o gerador da thread
    pub fn measure(&mut self, qubit: usize) -> QuantumResult<u8> {
        self.measure_with(qubit, &mut rand::thread_rng())
    }

    /// Mede um qubit pela regra de Born e colapsa o estado
    ///
    /// Amplitudes inconsistentes com o resultado são zeradas e as
    /// sobreviventes divididas por √P(resultado). Se P(resultado) fica
    /// abaixo de `collapse_floor` (deriva de ponto flutuante), o denominador
    /// é fixado no piso para não propagar NaN.
    pub fn measure_with<R: Rng + ?Sized>(&mut self, qubit: usize, rng: &mut R) -> QuantumResult<u8> {
        let p1 = self.probability_one(qubit)?;
        let r: f64 = rng.gen_range(0.0..1.0);
        let outcome: u8 = if r < p1 { 1 } else { 0 };

        let mask = 1 << qubit;
        let survivors = if outcome == 1 { p1 } else { self.norm_sq() - p1 };
        let mass = if survivors < self.config.collapse_floor {
            tracing::warn!(
                qubit,
                outcome,
                survivors,
                "collapse onto near-zero probability branch, clamping denominator"
            );
            self.config.collapse_floor
        } else {
            survivors
        };
        let scale = 1.0 / mass.sqrt();

        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            let bit = u8::from(i & mask != 0);
            *amp = if bit == outcome {
                amp.scale(scale)
            } else {
                Complex::ZERO
            };
        }

        tracing::debug!(qubit, outcome, probability = survivors, "qubit measured");
        Ok(outcome)
    }

    /// Mede todos os qubits com o gerador da thread
    pub fn measure_all(&mut self) -> Vec<u8> {
        self.measure_all_with(&mut rand::thread_rng())
    }

    /// Amostra um estado da base, colapsa para ele e devolve seus bits
    ///
    /// O elemento k do resultado é o valor do qubit k.
    pub fn measure_all_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<u8> {
        let probabilities = self.probabilities();
        let index = sample_index(&probabilities, rng.gen_range(0.0..1.0));

        self.amplitudes.fill(Complex::ZERO);
        self.amplitudes[index] = Complex::ONE;

        tracing::debug!(index, "register measured");
        self.index_to_bits(index)
    }

    /// Probabilidade de um estado da base dado como bits (elemento k = qubit k)
    pub fn get_probability(&self, basis_state: &[u8]) -> QuantumResult<f64> {
        if basis_state.len() != self.num_qubits {
            return Err(QuantumError::DimensionMismatch {
                expected: self.num_qubits,
                actual: basis_state.len(),
            });
        }

        let mut index = 0;
        for (k, &bit) in basis_state.iter().enumerate() {
            match bit {
                0 => {}
                1 => index |= 1 << k,
                other => {
                    return Err(QuantumError::InvalidBasisState(format!(
                        "bit {k} is {other}, expected 0 or 1"
                    )));
                }
            }
        }

        Ok(self.amplitudes[index].norm_sq())
    }

    /// Amostra `shots` resultados sem colapsar o estado
    ///
    /// Chave: índice do estado da base; valor: contagem.
    pub fn sample_counts<R: Rng + ?Sized>(&self, shots: usize, rng: &mut R) -> BTreeMap<usize, usize> {
        let probabilities = self.probabilities();
        let mut counts = BTreeMap::new();
        for _ in 0..shots {
            let index = sample_index(&probabilities, rng.gen_range(0.0..1.0));
            *counts.entry(index).or_insert(0) += 1;
        }
        counts
    }

    /// Bits de um índice (elemento k = qubit k)
    pub(crate) fn index_to_bits(&self, index: usize) -> Vec<u8> {
        (0..self.num_qubits).map(|k| ((index >> k) & 1) as u8).collect()
    }
}

/// Índice cuja probabilidade acumulada ultrapassa `r`
///
/// Se a deriva numérica deixar a soma abaixo de `r`, devolve o último índice
/// com probabilidade não nula.
fn sample_index(probabilities: &[f64], r: f64) -> usize {
    let mut cumulative = 0.0;
    for (i, &p) in probabilities.iter().enumerate() {
        cumulative += p;
        if r < cumulative {
            return i;
        }
    }
    probabilities.iter().rposition(|&p| p > 0.0).unwrap_or(0)
}

impl QuantumRegister for StateVector {
    fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    fn measure_qubit(&mut self, index: usize, rng: &mut dyn RngCore) -> QuantumResult<u8> {
        self.measure_with(index, rng)
    }

    fn measure_register(&mut self, rng: &mut dyn RngCore) -> Vec<u8> {
        self.measure_all_with(rng)
    }

    fn reset(&mut self) {
        StateVector::reset(self)
    }
}
