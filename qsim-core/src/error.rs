//! Tipos de erro para qsim-core

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Resultado customizado para operações quânticas
pub type QuantumResult<T> = Result<T, QuantumError>;

/// Erros que podem ocorrer em operações quânticas
///
/// Todos são erros de programação do chamador: nenhum é transiente e o
/// motor nunca tenta se recuperar deles.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    #[error("Capacity exceeded: {requested} qubits requested, maximum is {max}")]
    CapacityExceeded { requested: usize, max: usize },

    #[error("Gate {gate} acts on {expected} qubit(s), got {actual} index(es)")]
    ArityMismatch {
        gate: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Qubit index {index} out of range for {num_qubits}-qubit register")]
    QubitOutOfRange { index: usize, num_qubits: usize },

    #[error("State not normalized: squared norm = {norm}")]
    NotNormalized { norm: f64 },

    #[error("Two-qubit gate needs distinct qubits, got {0} twice")]
    DuplicateQubit(usize),

    #[error("Invalid basis state: {0}")]
    InvalidBasisState(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Categoria do erro
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Registrador maior que o teto de qubits
    Capacity,
    /// Aridade ou comprimento incompatível
    Shape,
    /// Índice de qubit fora de [0, n)
    Index,
    /// Estado inválido (não normalizado, qubits repetidos, base inválida)
    State,
    /// Configuração inválida
    Config,
}

impl QuantumError {
    /// Categoria do erro
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CapacityExceeded { .. } => ErrorKind::Capacity,
            Self::ArityMismatch { .. } | Self::DimensionMismatch { .. } => ErrorKind::Shape,
            Self::QubitOutOfRange { .. } => ErrorKind::Index,
            Self::NotNormalized { .. } | Self::DuplicateQubit(_) | Self::InvalidBasisState(_) => {
                ErrorKind::State
            }
            Self::InvalidConfig(_) => ErrorKind::Config,
        }
    }
}

/// Verifica se `index` é um qubit válido num registrador de `num_qubits`
pub(crate) fn check_qubit(index: usize, num_qubits: usize) -> QuantumResult<()> {
    if index >= num_qubits {
        return Err(QuantumError::QubitOutOfRange { index, num_qubits });
    }
    Ok(())
}
