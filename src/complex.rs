//! Complex-number arithmetic
//!
//! A small complex value type with operator overloads and the
//! two-decimal `a.bb+c.ddi` display used by the exercise.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A complex number
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Modulus of the complex number
    pub fn magnitude(&self) -> f64 {
        (self.real * self.real + self.imag * self.imag).sqrt()
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.real + rhs.real, self.imag + rhs.imag)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.real - rhs.real, self.imag - rhs.imag)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.real * rhs.real - self.imag * rhs.imag,
            self.real * rhs.imag + self.imag * rhs.real,
        )
    }
}

impl Div for Complex {
    type Output = Complex;

    fn div(self, rhs: Complex) -> Complex {
        let denom = rhs.real * rhs.real + rhs.imag * rhs.imag;
        Complex::new(
            (self.real * rhs.real + self.imag * rhs.imag) / denom,
            (self.imag * rhs.real - self.real * rhs.imag) / denom,
        )
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.imag < 0.0 { '-' } else { '+' };
        write!(f, "{:.2}{}{:.2}i", self.real, sign, self.imag.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sub() {
        let c1 = Complex::new(2.0, 1.0);
        let c2 = Complex::new(5.0, 6.0);

        assert_eq!(c1 + c2, Complex::new(7.0, 7.0));
        assert_eq!(c1 - c2, Complex::new(-3.0, -5.0));
    }

    #[test]
    fn test_mul() {
        let c1 = Complex::new(2.0, 1.0);
        let c2 = Complex::new(5.0, 6.0);

        assert_eq!(c1 * c2, Complex::new(4.0, 17.0));
    }

    #[test]
    fn test_div() {
        let c1 = Complex::new(4.0, 17.0);
        let c2 = Complex::new(5.0, 6.0);

        let q = c1 / c2;
        assert!((q.real - 2.0).abs() < 1e-10);
        assert!((q.imag - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_magnitude() {
        assert!((Complex::new(3.0, 4.0).magnitude() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_display() {
        assert_eq!(Complex::new(2.0, 1.0).to_string(), "2.00+1.00i");
        assert_eq!(Complex::new(2.0, -1.0).to_string(), "2.00-1.00i");
        assert_eq!(Complex::new(0.0, 5.0).to_string(), "0.00+5.00i");
        assert_eq!(Complex::new(5.0, 0.0).to_string(), "5.00+0.00i");
    }
}
