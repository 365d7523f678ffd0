//! Conceito comum de registrador quântico
//!
//! [`QuantumCircuit`](crate::QuantumCircuit) e [`StateVector`](crate::StateVector)
//! representam o mesmo objeto com fidelidades diferentes. O trait cobre só o
//! que ambos fazem igual (tamanho, medição, reset); aplicação de portas fica
//! em cada tipo.

use crate::error::QuantumResult;
use rand::RngCore;

/// Registrador de qubits mensurável
pub trait QuantumRegister {
    /// Número de qubits
    fn num_qubits(&self) -> usize;

    /// Mede um qubit, colapsando o registrador
    fn measure_qubit(&mut self, index: usize, rng: &mut dyn RngCore) -> QuantumResult<u8>;

    /// Mede todos os qubits; elemento k é o qubit k
    fn measure_register(&mut self, rng: &mut dyn RngCore) -> Vec<u8>;

    /// Volta para |0…0⟩
    fn reset(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{H, QuantumCircuit, StateVector};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn measure_twice<R: QuantumRegister>(register: &mut R, rng: &mut StdRng) -> (Vec<u8>, Vec<u8>) {
        let first = register.measure_register(rng);
        let second = register.measure_register(rng);
        (first, second)
    }

    #[test]
    fn test_both_registers_collapse() {
        let mut rng = StdRng::seed_from_u64(11);

        let mut circuit = QuantumCircuit::new(3);
        circuit.add_gate(H, &[0]).unwrap().add_gate(H, &[2]).unwrap();
        circuit.execute();
        let (a, b) = measure_twice(&mut circuit, &mut rng);
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);

        let mut sv = StateVector::new(3).unwrap();
        sv.apply_single_qubit_gate(&H, 0).unwrap();
        sv.apply_single_qubit_gate(&H, 2).unwrap();
        let (a, b) = measure_twice(&mut sv, &mut rng);
        assert_eq!(a, b);
        assert_eq!(a[1], 0);
    }

    #[test]
    fn test_reset_through_trait() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut registers: Vec<Box<dyn QuantumRegister>> = vec![
            Box::new(QuantumCircuit::new(2)),
            Box::new(StateVector::new(2).unwrap()),
        ];

        for register in registers.iter_mut() {
            register.reset();
            assert_eq!(register.num_qubits(), 2);
            assert_eq!(register.measure_register(&mut rng), vec![0, 0]);
            assert!(register.measure_qubit(2, &mut rng).is_err());
        }
    }
}
