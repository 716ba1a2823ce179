use crate::{vector::Vector, Result, VectorError};
use rand::Rng;

/// Adds the vectors left to right.
pub fn sum(vectors: &[Vector]) -> Result<Vector> {
    let (first, rest) = vectors.split_first().ok_or_else(|| {
        VectorError::InvalidArgument("cannot sum an empty list of vectors".to_string())
    })?;

    rest.iter().try_fold(first.clone(), |acc, v| acc.add(v))
}

/// `num` vectors of dimension `dim` with coordinates drawn from `[-1, 1)`.
pub fn generate_random_vectors(dim: usize, num: usize) -> Result<Vec<Vector>> {
    let mut rng = rand::thread_rng();

    (0..num)
        .map(|_| Vector::new((0..dim).map(|_| rng.gen_range(-1.0_f64..1.0))))
        .collect()
}
