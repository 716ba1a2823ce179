//! Operator overloads over the named [`Vector`] operations.
//!
//! `+`, `-` and vector `*` panic when the operands differ in dimension, the
//! same way `ndarray` panics on mismatched shapes. Use [`Vector::add`],
//! [`Vector::subtract`], [`Vector::multiply`] or [`Vector::product`] to get a
//! [`VectorError::DimensionMismatch`](crate::VectorError::DimensionMismatch)
//! back instead.

use crate::{vector::Vector, Result};
use std::ops::{Add, Index, Mul, Neg, Sub};

/// Right-hand side of a multiplication: either a real number or a vector.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Scalar(f64),
    Vector(&'a Vector),
}

impl From<f64> for Operand<'_> {
    fn from(scalar: f64) -> Self {
        Operand::Scalar(scalar)
    }
}

impl From<i32> for Operand<'_> {
    fn from(scalar: i32) -> Self {
        Operand::Scalar(scalar.into())
    }
}

impl<'a> From<&'a Vector> for Operand<'a> {
    fn from(vector: &'a Vector) -> Self {
        Operand::Vector(vector)
    }
}

impl Vector {
    /// Scales by a scalar operand or multiplies componentwise by a vector
    /// operand.
    pub fn product<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vector> {
        match rhs.into() {
            Operand::Scalar(factor) => Ok(self.scale(factor)),
            Operand::Vector(other) => self.multiply(other),
        }
    }
}

impl Add<&Vector> for &Vector {
    type Output = Vector;

    fn add(self, rhs: &Vector) -> Vector {
        Vector::add(self, rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Vector;

    fn sub(self, rhs: &Vector) -> Vector {
        self.subtract(rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl Mul<&Vector> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Vector {
        self.multiply(rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<&Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Vector {
        rhs.scale(self)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.negate()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.as_array()[index]
    }
}
