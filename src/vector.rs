use crate::{config::DEFAULT_TOLERANCE, Result, VectorError};
use approx::AbsDiffEq;
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numbers accepted as coordinates by [`Vector::new`].
///
/// Every primitive integer and float type converts with `as f64`, so 64-bit
/// integers beyond 2^53 round to the nearest representable `f64`.
pub trait Coordinate {
    fn to_f64(self) -> f64;
}

macro_rules! impl_coordinate {
    ($($t:ty),*) => {
        $(
            impl Coordinate for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_coordinate!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// An immutable point or displacement in N-dimensional real space.
///
/// Every operation returns a new `Vector`; the coordinates of an existing
/// vector never change. The magnitude is computed once at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    coordinates: Array1<f64>,
    magnitude: f64,
}

impl Vector {
    /// Builds a vector from any sequence of primitive numbers (see
    /// [`Coordinate`]).
    ///
    /// Fails with [`VectorError::InvalidArgument`] when the sequence is empty
    /// or contains a NaN or infinite value.
    pub fn new<I, T>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Coordinate,
    {
        let coordinates: Vec<f64> = coordinates.into_iter().map(Coordinate::to_f64).collect();
        Self::from_array(Array1::from_vec(coordinates))
    }

    pub fn from_array(coordinates: Array1<f64>) -> Result<Self> {
        if coordinates.is_empty() {
            log::trace!("rejecting vector with no coordinates");
            return Err(VectorError::InvalidArgument(
                "coordinates must not be empty".to_string(),
            ));
        }
        if let Some((i, c)) = coordinates.iter().enumerate().find(|(_, c)| !c.is_finite()) {
            log::trace!("rejecting vector with non-finite coordinate {} at {}", c, i);
            return Err(VectorError::InvalidArgument(format!(
                "coordinate {} is not finite: {}",
                i, c
            )));
        }
        Ok(Self::from_raw(coordinates))
    }

    /// The zero vector of the given dimension.
    pub fn zeros(dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(VectorError::InvalidArgument(
                "dimension must be at least 1".to_string(),
            ));
        }
        Ok(Self::from_raw(Array1::zeros(dimension)))
    }

    // Callers guarantee at least one coordinate.
    fn from_raw(coordinates: Array1<f64>) -> Self {
        let magnitude = norm(&coordinates);
        Self {
            coordinates,
            magnitude,
        }
    }

    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    pub fn coordinates(&self) -> ArrayView1<'_, f64> {
        self.coordinates.view()
    }

    pub fn as_array(&self) -> &Array1<f64> {
        &self.coordinates
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.coordinates.to_vec()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.coordinates.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.coordinates.iter().copied()
    }

    /// Euclidean norm: the square root of the sum of squared coordinates.
    ///
    /// Tiny and huge coordinates are rescaled before squaring, so only a norm
    /// that itself exceeds `f64::MAX` comes back infinite.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude == 0.0
    }

    /// The vector of magnitude 1 pointing in the same direction.
    ///
    /// Fails with [`VectorError::UndefinedOperation`] for the zero vector, and
    /// for a vector whose coordinates overflowed during arithmetic.
    pub fn unit(&self) -> Result<Vector> {
        if !self.coordinates.iter().all(|c| c.is_finite()) {
            log::trace!("unit vector requested for non-finite vector {}", self);
            return Err(VectorError::UndefinedOperation(
                "vector with non-finite coordinates has no unit vector".to_string(),
            ));
        }
        if self.is_zero() {
            log::trace!("unit vector requested for zero vector {}", self);
            return Err(VectorError::UndefinedOperation(
                "zero vector has no unit vector".to_string(),
            ));
        }
        if self.magnitude.is_normal() {
            return Ok(Self::from_raw(&self.coordinates / self.magnitude));
        }
        // Overflowed or subnormal norm: normalize the largest coordinate to 1 first.
        let scaled = &self.coordinates / max_abs(&self.coordinates);
        let magnitude = norm(&scaled);
        Ok(Self::from_raw(scaled / magnitude))
    }

    /// Arithmetic does not re-check finiteness: coordinates that overflow
    /// become infinite, and [`Vector::unit`] then refuses the result.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        Ok(Self::from_raw(&self.coordinates + &other.coordinates))
    }

    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        Ok(Self::from_raw(&self.coordinates - &other.coordinates))
    }

    /// Componentwise (Hadamard) product.
    pub fn multiply(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        Ok(Self::from_raw(&self.coordinates * &other.coordinates))
    }

    pub fn scale(&self, factor: f64) -> Vector {
        Self::from_raw(&self.coordinates * factor)
    }

    pub fn negate(&self) -> Vector {
        self.scale(-1.0)
    }

    /// Tolerance-based equality: same dimension and every coordinate pair
    /// within `tolerance` of each other.
    ///
    /// This is not an equivalence relation. It is reflexive and symmetric, but
    /// `a == b` and `b == c` do not imply `a == c` near the tolerance boundary.
    pub fn approx_eq(&self, other: &Vector, tolerance: f64) -> bool {
        self.dimension() == other.dimension()
            && self
                .coordinates
                .iter()
                .zip(other.coordinates.iter())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    fn check_dimension(&self, other: &Vector) -> Result<()> {
        if self.dimension() != other.dimension() {
            log::trace!(
                "dimension mismatch: {} vs {}",
                self.dimension(),
                other.dimension()
            );
            return Err(VectorError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        Ok(())
    }

    pub(crate) fn render(&self, precision: Option<usize>) -> String {
        let coordinates: Vec<String> = self
            .coordinates
            .iter()
            .map(|c| match precision {
                Some(p) => format!("{:.*}", p, c),
                None => c.to_string(),
            })
            .collect();
        format!("Vector: [{}]", coordinates.join(", "))
    }
}

fn max_abs(coordinates: &Array1<f64>) -> f64 {
    coordinates.iter().fold(0.0_f64, |m, c| m.max(c.abs()))
}

fn norm(coordinates: &Array1<f64>) -> f64 {
    let sum_of_squares = coordinates.dot(coordinates);
    if sum_of_squares.is_normal() || sum_of_squares.is_nan() {
        return sum_of_squares.sqrt();
    }

    // Zero, underflowed or overflowed: retry relative to the largest coordinate.
    let max = max_abs(coordinates);
    if max == 0.0 || !max.is_finite() {
        return max;
    }
    let scaled = coordinates / max;
    max * scaled.dot(&scaled).sqrt()
}

impl PartialEq for Vector {
    /// Compares with [`DEFAULT_TOLERANCE`]; see [`Vector::approx_eq`].
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, DEFAULT_TOLERANCE)
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        DEFAULT_TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.approx_eq(other, epsilon)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Vec<f64>) -> Result<Self> {
        Self::from_array(Array1::from_vec(coordinates))
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: &[f64]) -> Result<Self> {
        Self::from_array(Array1::from_vec(coordinates.to_vec()))
    }
}

impl From<Vector> for Vec<f64> {
    fn from(vector: Vector) -> Self {
        vector.coordinates.to_vec()
    }
}
