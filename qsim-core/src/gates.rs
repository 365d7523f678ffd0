//! # Quantum Gates — Portas Quânticas
//!
//! Descritores imutáveis de portas unitárias.
//!
//! ## Gates Implementadas
//!
//! - **Single-qubit**: H (Hadamard), X, Y, Z (Pauli), S, T (Phase)
//! - **Rotation**: RX, RY, RZ, P(φ)
//! - **Two-qubit**: CNOT, CZ, SWAP sobre a base {00, 01, 10, 11} em ordem
//!   (controle, alvo)
//!
//! A matriz é a referência para [`StateVector`](crate::StateVector).
//! [`Gate::apply`] é a aproximação local usada por
//! [`QuantumCircuit`](crate::QuantumCircuit), que guarda cada qubit de forma
//! independente e por isso não representa emaranhamento.

use crate::complex::Complex;
use crate::error::{QuantumError, QuantumResult};
use crate::qubit::Qubit;
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

const O: Complex = Complex::ZERO;
const L: Complex = Complex::ONE;

/// Matriz 2x2 complexa para gates single-qubit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix2x2 {
    /// Elementos: [[a, b], [c, d]]
    pub elements: [[Complex; 2]; 2],
}

impl Matrix2x2 {
    /// Cria matriz identidade
    pub const fn identity() -> Self {
        Self {
            elements: [[L, O], [O, L]],
        }
    }

    /// Aplica a um estado [alpha, beta]
    pub fn apply(&self, state: [Complex; 2]) -> [Complex; 2] {
        let [alpha, beta] = state;
        let [[a, b], [c, d]] = self.elements;

        [
            a.mul(alpha).add(b.mul(beta)),
            c.mul(alpha).add(d.mul(beta)),
        ]
    }

    /// Multiplicação de matrizes
    pub fn mul(&self, other: &Matrix2x2) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        let [[e, f], [g, h]] = other.elements;

        Matrix2x2 {
            elements: [
                [a.mul(e).add(b.mul(g)), a.mul(f).add(b.mul(h))],
                [c.mul(e).add(d.mul(g)), c.mul(f).add(d.mul(h))],
            ],
        }
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        Matrix2x2 {
            elements: [[a.conj(), c.conj()], [b.conj(), d.conj()]],
        }
    }

    /// Verifica se é a identidade dentro de `epsilon`
    pub fn is_identity(&self, epsilon: f64) -> bool {
        let id = Self::identity();
        (0..2).all(|r| (0..2).all(|c| self.elements[r][c].approx_eq(id.elements[r][c], epsilon)))
    }
}

/// Matriz 4x4 complexa para gates two-qubit
///
/// Linhas e colunas indexadas pelo sub-estado `controle << 1 | alvo`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix4x4 {
    pub elements: [[Complex; 4]; 4],
}

impl Matrix4x4 {
    /// Cria matriz identidade
    pub const fn identity() -> Self {
        Self {
            elements: [[L, O, O, O], [O, L, O, O], [O, O, L, O], [O, O, O, L]],
        }
    }

    /// Multiplicação de matrizes
    pub fn mul(&self, other: &Matrix4x4) -> Matrix4x4 {
        let mut elements = [[Complex::ZERO; 4]; 4];
        for (r, row) in elements.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).fold(Complex::ZERO, |acc, k| {
                    acc.add(self.elements[r][k].mul(other.elements[k][c]))
                });
            }
        }
        Matrix4x4 { elements }
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> Matrix4x4 {
        let mut elements = [[Complex::ZERO; 4]; 4];
        for (r, row) in elements.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.elements[c][r].conj();
            }
        }
        Matrix4x4 { elements }
    }

    /// Verifica se é a identidade dentro de `epsilon`
    pub fn is_identity(&self, epsilon: f64) -> bool {
        let id = Self::identity();
        (0..4).all(|r| (0..4).all(|c| self.elements[r][c].approx_eq(id.elements[r][c], epsilon)))
    }
}

/// Matriz de uma porta, conforme a aridade
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GateMatrix {
    Single(Matrix2x2),
    Two(Matrix4x4),
}

/// Tipo da porta e seus parâmetros
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GateKind {
    Hadamard,
    PauliX,
    PauliY,
    PauliZ,
    S,
    T,
    /// Fase genérica diag(1, e^(iφ))
    Phase(f64),
    Rx(f64),
    Ry(f64),
    Rz(f64),
    Cnot,
    Cz,
    Swap,
}

/// Porta quântica imutável
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gate {
    name: &'static str,
    kind: GateKind,
    matrix: GateMatrix,
}

// =============================================================================
// Portas Padrão
// =============================================================================

/// Porta Hadamard: cria superposição
pub const H: Gate = Gate {
    name: "H",
    kind: GateKind::Hadamard,
    matrix: GateMatrix::Single(Matrix2x2 {
        elements: [
            [Complex::real(FRAC_1_SQRT_2), Complex::real(FRAC_1_SQRT_2)],
            [Complex::real(FRAC_1_SQRT_2), Complex::real(-FRAC_1_SQRT_2)],
        ],
    }),
};

/// Porta Pauli-X (NOT quântico)
pub const X: Gate = Gate {
    name: "X",
    kind: GateKind::PauliX,
    matrix: GateMatrix::Single(Matrix2x2 {
        elements: [[O, L], [L, O]],
    }),
};

/// Porta Pauli-Y
pub const Y: Gate = Gate {
    name: "Y",
    kind: GateKind::PauliY,
    matrix: GateMatrix::Single(Matrix2x2 {
        elements: [[O, Complex::new(0.0, -1.0)], [Complex::I, O]],
    }),
};

/// Porta Pauli-Z (phase flip)
pub const Z: Gate = Gate {
    name: "Z",
    kind: GateKind::PauliZ,
    matrix: GateMatrix::Single(Matrix2x2 {
        elements: [[L, O], [O, Complex::real(-1.0)]],
    }),
};

/// Porta S (√Z)
pub const S: Gate = Gate {
    name: "S",
    kind: GateKind::S,
    matrix: GateMatrix::Single(Matrix2x2 {
        elements: [[L, O], [O, Complex::I]],
    }),
};

/// Porta T (π/8)
pub const T: Gate = Gate {
    name: "T",
    kind: GateKind::T,
    matrix: GateMatrix::Single(Matrix2x2 {
        elements: [[L, O], [O, Complex::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2)]],
    }),
};

/// CNOT: inverte o alvo quando o controle é 1
pub const CNOT: Gate = Gate {
    name: "CNOT",
    kind: GateKind::Cnot,
    matrix: GateMatrix::Two(Matrix4x4 {
        elements: [[L, O, O, O], [O, L, O, O], [O, O, O, L], [O, O, L, O]],
    }),
};

/// CZ: fase -1 em |11⟩
pub const CZ: Gate = Gate {
    name: "CZ",
    kind: GateKind::Cz,
    matrix: GateMatrix::Two(Matrix4x4 {
        elements: [
            [L, O, O, O],
            [O, L, O, O],
            [O, O, L, O],
            [O, O, O, Complex::real(-1.0)],
        ],
    }),
};

/// SWAP: troca os dois qubits
pub const SWAP: Gate = Gate {
    name: "SWAP",
    kind: GateKind::Swap,
    matrix: GateMatrix::Two(Matrix4x4 {
        elements: [[L, O, O, O], [O, O, L, O], [O, L, O, O], [O, O, O, L]],
    }),
};

/// Rotação em X: [[c, -is], [-is, c]] com c = cos(θ/2), s = sin(θ/2)
pub fn rx(theta: f64) -> Gate {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    Gate {
        name: "RX",
        kind: GateKind::Rx(theta),
        matrix: GateMatrix::Single(Matrix2x2 {
            elements: [
                [Complex::real(c), Complex::new(0.0, -s)],
                [Complex::new(0.0, -s), Complex::real(c)],
            ],
        }),
    }
}

/// Rotação em Y: [[c, -s], [s, c]]
pub fn ry(theta: f64) -> Gate {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    Gate {
        name: "RY",
        kind: GateKind::Ry(theta),
        matrix: GateMatrix::Single(Matrix2x2 {
            elements: [
                [Complex::real(c), Complex::real(-s)],
                [Complex::real(s), Complex::real(c)],
            ],
        }),
    }
}

/// Rotação em Z: diag(e^(-iθ/2), e^(iθ/2))
pub fn rz(theta: f64) -> Gate {
    let half = theta / 2.0;
    Gate {
        name: "RZ",
        kind: GateKind::Rz(theta),
        matrix: GateMatrix::Single(Matrix2x2 {
            elements: [
                [Complex::from_polar(-half), O],
                [O, Complex::from_polar(half)],
            ],
        }),
    }
}

/// Porta de fase genérica: diag(1, e^(iφ))
pub fn phase(phi: f64) -> Gate {
    Gate {
        name: "P",
        kind: GateKind::Phase(phi),
        matrix: GateMatrix::Single(Matrix2x2 {
            elements: [[L, O], [O, Complex::from_polar(phi)]],
        }),
    }
}

impl Gate {
    /// Nome da porta
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Tipo e parâmetros
    pub fn kind(&self) -> GateKind {
        self.kind
    }

    /// Número de qubits em que atua (1 ou 2)
    pub fn num_qubits(&self) -> usize {
        match self.matrix {
            GateMatrix::Single(_) => 1,
            GateMatrix::Two(_) => 2,
        }
    }

    /// Matriz unitária
    pub fn matrix(&self) -> &GateMatrix {
        &self.matrix
    }

    /// Verifica se U·U† = I
    pub fn is_unitary(&self) -> bool {
        match &self.matrix {
            GateMatrix::Single(m) => m.mul(&m.dagger()).is_identity(1e-10),
            GateMatrix::Two(m) => m.mul(&m.dagger()).is_identity(1e-10),
        }
    }

    /// Aplica a porta diretamente aos qubits locais
    ///
    /// Para portas two-qubit `qubits[0]` é o controle e `qubits[1]` o alvo.
    /// CNOT e CZ interpolam as amplitudes do alvo pela probabilidade atual
    /// de |1⟩ do controle (`p1`), sem estado conjunto:
    ///
    /// ```text
    /// CNOT: α' = (1-p1)α + p1β    β' = (1-p1)β + p1α
    /// CZ:   α' = α                β' = (1-p1)β + p1(-β)
    /// ```
    ///
    /// Com `p1 = 0` o alvo fica inalterado. Quando a mistura cancela o alvo
    /// (controle |+⟩, alvo |−⟩) o resultado é quase nulo e a renormalização
    /// amplifica o erro de arredondamento: o alvo sai com sinal e fase
    /// arbitrários.
    pub fn apply(&self, qubits: &mut [Qubit]) -> QuantumResult<()> {
        if qubits.len() != self.num_qubits() {
            return Err(QuantumError::ArityMismatch {
                gate: self.name,
                expected: self.num_qubits(),
                actual: qubits.len(),
            });
        }

        match (&self.matrix, qubits) {
            (GateMatrix::Single(m), [qubit]) => {
                let [alpha, beta] = m.apply(qubit.amplitudes());
                qubit.set_state(alpha, beta);
            }
            (GateMatrix::Two(_), [control, target]) => match self.kind {
                GateKind::Cnot => {
                    let p1 = control.probability_one();
                    let (alpha, beta) = (target.alpha(), target.beta());
                    target.set_state(
                        alpha.scale(1.0 - p1).add(beta.scale(p1)),
                        beta.scale(1.0 - p1).add(alpha.scale(p1)),
                    );
                }
                GateKind::Cz => {
                    let p1 = control.probability_one();
                    let (alpha, beta) = (target.alpha(), target.beta());
                    target.set_state(alpha, beta.scale(1.0 - p1).add((-beta).scale(p1)));
                }
                _ => std::mem::swap(control, target),
            },
            _ => unreachable!("arity checked above"),
        }

        tracing::trace!(gate = self.name, "gate applied to local qubits");
        Ok(())
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            GateKind::Rx(a) | GateKind::Ry(a) | GateKind::Rz(a) | GateKind::Phase(a) => {
                write!(f, "{}({:.4})", self.name, a)
            }
            _ => write!(f, "{}", self.name),
        }
    }
}

// =============================================================================
// Testes
// =============================================================================
