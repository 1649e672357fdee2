//! The classifier contract: fit, predict, score and fitted-state introspection.

use crate::error::Result;

/// A supervised classifier over rows of `F` features with labels of type `L`.
///
/// Rows are any `AsRef<[F]>` (`Vec<F>`, arrays, slices), so callers can pass
/// their own storage without converting it first.
///
/// # Examples
///
/// ```
/// use one_nearest_neighbor::prelude::*;
///
/// let x_train = vec![vec![0.0], vec![10.0]];
/// let y_train = vec!["a", "b"];
///
/// let mut model = OneNearestNeighbor::new();
/// let predictions = model.fit(&x_train, &y_train)?.predict(&[[1.0], [9.0]])?;
/// assert_eq!(predictions, vec!["a", "b"]);
/// assert_eq!(model.score(&x_train, &y_train)?, 1.0);
/// # Ok::<(), one_nearest_neighbor::ClassifierError>(())
/// ```
pub trait Classifier<F, L> {
    /// Fits the model to training data and returns it for chaining.
    ///
    /// A refit replaces all previously fitted state. On error the previous
    /// state, if any, is left as it was.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for malformed features or mismatched lengths
    /// and `InvalidTarget` when `y` is not a classification target.
    fn fit<R: AsRef<[F]>>(&mut self, x: &[R], y: &[L]) -> Result<&mut Self>;

    /// Predicts one label per row of `x`.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` before `fit`, and `InvalidInput` when `x` fails
    /// validation or its feature count differs from the fitted one.
    fn predict<R: AsRef<[F]>>(&self, x: &[R]) -> Result<Vec<L>>;

    /// Mean accuracy of `predict(x)` against `y`.
    ///
    /// # Errors
    ///
    /// Propagates errors from validation of `(x, y)` and from `predict`.
    fn score<R: AsRef<[F]>>(&self, x: &[R], y: &[L]) -> Result<f64>;

    /// Classes seen during fit, sorted ascending.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` before `fit`.
    fn classes(&self) -> Result<&[L]>;

    /// Number of features seen during fit.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` before `fit`.
    fn n_features_in(&self) -> Result<usize>;
}
