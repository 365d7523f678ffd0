//! Configuração do simulador de vetor de estado

use crate::error::{QuantumError, QuantumResult};
use serde::{Deserialize, Serialize};

/// Teto absoluto de qubits de um [`StateVector`](crate::StateVector)
///
/// 2^15 amplitudes complexas (512 KiB) é o envelope de memória pretendido.
pub const MAX_QUBITS: usize = 15;

/// Configuração do simulador
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Máximo de qubits aceito na construção (nunca acima de [`MAX_QUBITS`])
    pub max_qubits: usize,
    /// Tolerância de |Σ|v|² - 1| em `set_state`
    pub norm_tolerance: f64,
    /// Piso da massa de probabilidade sobrevivente no colapso
    pub collapse_floor: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_qubits: MAX_QUBITS,
            norm_tolerance: 1e-10,
            collapse_floor: f64::EPSILON,
        }
    }
}

impl SimulatorConfig {
    /// Valida os limites da configuração
    pub fn validate(&self) -> QuantumResult<()> {
        if self.max_qubits > MAX_QUBITS {
            return Err(QuantumError::InvalidConfig(format!(
                "max_qubits {} above hard limit {}",
                self.max_qubits, MAX_QUBITS
            )));
        }
        if !(self.norm_tolerance.is_finite() && self.norm_tolerance > 0.0) {
            return Err(QuantumError::InvalidConfig(format!(
                "norm_tolerance must be positive, got {}",
                self.norm_tolerance
            )));
        }
        if !(self.collapse_floor.is_finite() && self.collapse_floor > 0.0) {
            return Err(QuantumError::InvalidConfig(format!(
                "collapse_floor must be positive, got {}",
                self.collapse_floor
            )));
        }
        Ok(())
    }
}
