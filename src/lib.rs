//! Immutable N-dimensional vectors with componentwise arithmetic,
//! magnitude, unit-vector derivation and tolerance-based equality.

pub mod config;
pub mod ops;
pub mod utils;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VectorError {
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),
    #[error("Dimension Mismatch: expected {expected} coordinates, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("Undefined Operation: {0}")]
    UndefinedOperation(String),
    #[error("Config Error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use config::{VectorConfig, DEFAULT_TOLERANCE};
pub use ops::Operand;
pub use utils::{generate_random_vectors, sum};
pub use vector::{Coordinate, Vector};
