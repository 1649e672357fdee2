//! Euclidean distance between feature rows.

use num_traits::Float;

/// Sum of squared per-feature differences.
///
/// Both rows must have the same length; only the common prefix is compared.
pub fn squared_euclidean<F: Float>(a: &[F], b: &[F]) -> F {
    debug_assert_eq!(a.len(), b.len(), "rows must have the same number of features");
    a.iter().zip(b.iter()).fold(F::zero(), |acc, (&x, &y)| {
        let diff = x - y;
        acc + diff * diff
    })
}

/// Calculates the Euclidean distance between two rows.
pub fn euclidean_distance<F: Float>(a: &[F], b: &[F]) -> F {
    squared_euclidean(a, b).sqrt()
}
