//! Qubit isolado com invariante de normalização

use crate::complex::Complex;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;

/// Estado de um qubit: α|0⟩ + β|1⟩
///
/// Após qualquer mutação vale |α|² + |β|² = 1, exceto no caso degenerado em
/// que ambas as amplitudes são exatamente zero: aí a normalização é pulada
/// e o vetor nulo é mantido.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Qubit {
    alpha: Complex,
    beta: Complex,
}

impl Default for Qubit {
    fn default() -> Self {
        Self::zero()
    }
}

impl Qubit {
    /// Cria qubit a partir de amplitudes, renormalizando
    pub fn new(alpha: Complex, beta: Complex) -> Self {
        let mut qubit = Self { alpha, beta };
        qubit.normalize();
        qubit
    }

    /// |0⟩
    pub const fn zero() -> Self {
        Self {
            alpha: Complex::ONE,
            beta: Complex::ZERO,
        }
    }

    /// |1⟩
    pub const fn one() -> Self {
        Self {
            alpha: Complex::ZERO,
            beta: Complex::ONE,
        }
    }

    /// |+⟩ = (|0⟩ + |1⟩)/√2
    pub const fn plus() -> Self {
        Self {
            alpha: Complex::real(FRAC_1_SQRT_2),
            beta: Complex::real(FRAC_1_SQRT_2),
        }
    }

    /// |-⟩ = (|0⟩ - |1⟩)/√2
    pub const fn minus() -> Self {
        Self {
            alpha: Complex::real(FRAC_1_SQRT_2),
            beta: Complex::real(-FRAC_1_SQRT_2),
        }
    }

    /// Amplitude de |0⟩
    pub fn alpha(&self) -> Complex {
        self.alpha
    }

    /// Amplitude de |1⟩
    pub fn beta(&self) -> Complex {
        self.beta
    }

    /// Amplitudes [α, β]
    pub fn amplitudes(&self) -> [Complex; 2] {
        [self.alpha, self.beta]
    }

    /// Substitui as amplitudes e renormaliza
    pub fn set_state(&mut self, alpha: Complex, beta: Complex) {
        self.alpha = alpha;
        self.beta = beta;
        self.normalize();
    }

    fn normalize(&mut self) {
        let norm = (self.alpha.norm_sq() + self.beta.norm_sq()).sqrt();
        if norm == 0.0 {
            tracing::warn!("qubit set to the zero vector, skipping normalization");
            return;
        }
        self.alpha = self.alpha.scale(1.0 / norm);
        self.beta = self.beta.scale(1.0 / norm);
    }

    /// Probabilidade de medir 0
    pub fn probability_zero(&self) -> f64 {
        self.alpha.norm_sq()
    }

    /// Probabilidade de medir 1
    pub fn probability_one(&self) -> f64 {
        self.beta.norm_sq()
    }

    /// Verifica normalização dentro de `epsilon`
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.probability_zero() + self.probability_one() - 1.0).abs() < epsilon
    }

    /// Mede com o gerador da thread
    pub fn measure(&mut self) -> u8 {
        self.measure_with(&mut rand::thread_rng())
    }

    /// Mede usando `rng` e colapsa para |0⟩ ou |1⟩
    pub fn measure_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u8 {
        let r: f64 = rng.gen_range(0.0..1.0);
        let outcome = if r < self.probability_zero() {
            *self = Self::zero();
            0
        } else {
            *self = Self::one();
            1
        };
        tracing::trace!(outcome, "qubit measured");
        outcome
    }
}
