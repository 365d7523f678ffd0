//! # Complex — Aritmética Complexa
//!
//! Número complexo de valor (`Copy`), sem identidade. Todas as operações
//! retornam novos valores; NaN/Inf propagam segundo IEEE 754.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Número complexo com partes real e imaginária em f64
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    /// Zero complexo
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// Um complexo
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Unidade imaginária
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    /// Cria número complexo
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Número puramente real
    pub const fn real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// e^(i*theta)
    pub fn from_polar(theta: f64) -> Self {
        Self {
            re: theta.cos(),
            im: theta.sin(),
        }
    }

    /// Adição
    pub fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    /// Subtração
    pub fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }

    /// Multiplicação
    pub fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    /// Multiplicação por escalar
    pub fn scale(self, s: f64) -> Self {
        Self {
            re: self.re * s,
            im: self.im * s,
        }
    }

    /// Multiplicação por fator complexo
    pub fn scale_complex(self, factor: Self) -> Self {
        self.mul(factor)
    }

    /// Conjugado
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Módulo ao quadrado
    pub fn norm_sq(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Módulo (norma euclidiana)
    pub fn abs(self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Fase (argumento)
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Exponencial complexa: e^re * (cos im, sin im)
    pub fn exp(self) -> Self {
        Self::from_polar(self.im).scale(self.re.exp())
    }

    /// Verifica igualdade dentro de uma tolerância
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.re - other.re).abs() <= epsilon && (self.im - other.im).abs() <= epsilon
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Complex::add(self, rhs)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Complex::sub(self, rhs)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Complex::mul(self, rhs)
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::real(re)
    }
}

impl From<num_complex::Complex64> for Complex {
    fn from(c: num_complex::Complex64) -> Self {
        Self { re: c.re, im: c.im }
    }
}

impl From<Complex> for num_complex::Complex64 {
    fn from(c: Complex) -> Self {
        num_complex::Complex64::new(c.re, c.im)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_complex_arithmetic() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);

        let sum = a.add(b);
        assert_eq!(sum.re, 4.0);
        assert_eq!(sum.im, 6.0);

        let diff = a.sub(b);
        assert_eq!(diff, Complex::new(-2.0, -2.0));

        let product = a.mul(b);
        assert_eq!(product.re, -5.0); // 1*3 - 2*4
        assert_eq!(product.im, 10.0); // 1*4 + 2*3
    }

    #[test]
    fn test_operators_match_methods() {
        let a = Complex::new(0.5, -1.5);
        let b = Complex::new(-2.0, 0.25);

        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.sub(b));
        assert_eq!(a * b, a.mul(b));
        assert_eq!(a * 2.0, a.scale(2.0));
        assert_eq!(-a, Complex::new(-0.5, 1.5));
    }

    #[test]
    fn test_scale_complex() {
        let a = Complex::new(2.0, 0.0);
        assert_eq!(a.scale_complex(Complex::I), Complex::new(0.0, 2.0));
    }

    #[test]
    fn test_conjugate_and_magnitude() {
        let a = Complex::new(3.0, 4.0);
        assert_eq!(a.conj(), Complex::new(3.0, -4.0));
        assert_eq!(a.abs(), 5.0);
        assert_eq!(a.norm_sq(), 25.0);
        // z * conj(z) = |z|²
        assert_eq!(a.mul(a.conj()), Complex::real(25.0));
    }

    #[test]
    fn test_phase() {
        assert!((Complex::I.arg() - FRAC_PI_2).abs() < 1e-12);
        assert!((Complex::new(-1.0, 0.0).arg() - PI).abs() < 1e-12);
        assert!((Complex::new(1.0, 1.0).arg() - FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn test_exp_matches_num_complex() {
        let samples = [
            Complex::new(0.0, PI),
            Complex::new(1.0, 0.0),
            Complex::new(-0.5, 2.25),
            Complex::new(0.3, -1.1),
        ];

        for z in samples {
            let ours = z.exp();
            let reference: Complex = Complex64::from(z).exp().into();
            assert!(ours.approx_eq(reference, 1e-12), "{z}: {ours} vs {reference}");
        }
    }

    #[test]
    fn test_euler_identity() {
        // e^(iπ) = -1
        let z = Complex::new(0.0, PI).exp();
        assert!(z.approx_eq(Complex::real(-1.0), 1e-12));
        assert!(Complex::from_polar(PI).approx_eq(z, 1e-15));
    }

    #[test]
    fn test_nan_propagates() {
        let nan = Complex::new(f64::NAN, 0.0);
        assert!(nan.add(Complex::ONE).re.is_nan());
        assert!(nan.abs().is_nan());
    }

    #[test]
    fn test_display() {
        assert_eq!(Complex::new(1.0, -2.0).to_string(), "1-2i");
        assert_eq!(Complex::new(0.5, 0.0).to_string(), "0.5+0i");
    }
}
