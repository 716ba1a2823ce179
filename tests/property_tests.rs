use proptest::prelude::*;
use vector_algebra::{Vector, VectorError};

const MAX_DIM: usize = 10;

fn bounded_f64() -> impl Strategy<Value = f64> {
    -1000.0_f64..1000.0_f64
}

fn vector_of(dim: usize) -> impl Strategy<Value = Vector> {
    prop::collection::vec(bounded_f64(), dim).prop_map(|c| Vector::new(c).unwrap())
}

fn any_vector() -> impl Strategy<Value = Vector> {
    (1..=MAX_DIM).prop_flat_map(vector_of)
}

/// Coordinates bounded away from zero so the magnitude never vanishes.
fn nonzero_vector() -> impl Strategy<Value = Vector> {
    (1..=MAX_DIM).prop_flat_map(|d| {
        prop::collection::vec(prop_oneof![0.01_f64..100.0, -100.0_f64..-0.01], d)
            .prop_map(|c| Vector::new(c).unwrap())
    })
}

fn three_vectors() -> impl Strategy<Value = (Vector, Vector, Vector)> {
    (1..=MAX_DIM).prop_flat_map(|d| (vector_of(d), vector_of(d), vector_of(d)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn adding_zero_is_identity(v in any_vector()) {
        let zero = Vector::zeros(v.dimension()).unwrap();
        prop_assert_eq!(&v + &zero, v);
    }

    #[test]
    fn subtracting_self_gives_zero(v in any_vector()) {
        let zero = Vector::zeros(v.dimension()).unwrap();
        prop_assert_eq!(&v - &v, zero);
    }

    #[test]
    fn addition_is_associative_and_commutative((a, b, c) in three_vectors()) {
        let left = &(&a + &b) + &c;
        let right = &a + &(&b + &c);
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn scalar_multiplication_is_symmetric(v in any_vector(), k in -100.0_f64..100.0) {
        prop_assert_eq!(k * &v, &v * k);
    }

    #[test]
    fn scaling_by_zero_one_and_minus_one(v in any_vector()) {
        prop_assert_eq!(0.0 * &v, Vector::zeros(v.dimension()).unwrap());
        prop_assert_eq!(1.0 * &v, v.clone());

        let flipped = -1.0 * &v;
        for (a, b) in v.iter().zip(flipped.iter()) {
            prop_assert_eq!(-a, b);
        }
    }

    #[test]
    fn zero_vector_has_zero_magnitude(dim in 1..=MAX_DIM) {
        let zero = Vector::zeros(dim).unwrap();
        prop_assert_eq!(zero.magnitude(), 0.0);
        prop_assert!(zero.is_zero());
        prop_assert!(matches!(zero.unit(), Err(VectorError::UndefinedOperation(_))));
    }

    #[test]
    fn magnitude_is_non_negative(v in any_vector()) {
        prop_assert!(v.magnitude() >= 0.0);
    }

    #[test]
    fn unit_is_scaled_by_inverse_magnitude(v in nonzero_vector()) {
        let unit = v.unit().unwrap();
        prop_assert_eq!(&unit, &(1.0 / v.magnitude() * &v));
        prop_assert!((unit.magnitude() - 1.0).abs() < 1e-9);
        prop_assert_eq!(unit.unit().unwrap(), unit);
    }

    #[test]
    fn equality_is_reflexive_and_symmetric(a in any_vector(), b in any_vector()) {
        prop_assert!(a == a);
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn mismatched_dimensions_fail(a in vector_of(3), b in vector_of(4)) {
        prop_assert!(
            matches!(a.add(&b), Err(VectorError::DimensionMismatch { expected: 3, found: 4 })),
            "add should reject mismatched dimensions"
        );
        prop_assert!(
            matches!(b.multiply(&a), Err(VectorError::DimensionMismatch { expected: 4, found: 3 })),
            "multiply should reject mismatched dimensions"
        );
    }
}
