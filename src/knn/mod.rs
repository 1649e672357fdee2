//! The one-nearest-neighbor classifier.
//!
//! [`OneNearestNeighbor`] predicts, for each query row, the label of the
//! closest training row under Euclidean distance. Validation and scoring are
//! injected capabilities; the search itself lives in [`NearestLabelFinder`].

pub mod finder;
pub mod nearest;

use num_traits::Float;
use tracing::debug;

pub use finder::NearestLabelFinder;
pub use nearest::{NearestSoFar, Neighbor};

use crate::error::{ClassifierError, Result};
use crate::label::ClassLabel;
use crate::metrics::{Accuracy, Scorer};
use crate::traits::Classifier;
use crate::validation::{
    check_consistent_length, DatasetValidator, StrictValidator, TargetValidator,
};

const ESTIMATOR_NAME: &str = "OneNearestNeighbor";

/// One-nearest-neighbor classifier.
///
/// - `F`: feature type (`f64`, `f32`).
/// - `L`: label type, see [`ClassLabel`].
/// - `D`: feature/dataset validation, `T`: target validation, `S`: scoring.
///
/// Unfitted until the first successful [`fit`](Classifier::fit). `predict`
/// and `score` borrow immutably and may run concurrently; `fit` needs a
/// mutable borrow, which serializes it against everything else.
///
/// # Example
///
/// ```
/// use one_nearest_neighbor::prelude::*;
///
/// let x = vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![5.0, 5.0], vec![6.0, 5.0]];
/// let y = vec![0, 0, 1, 1];
///
/// let mut knn = OneNearestNeighbor::new();
/// knn.fit(&x, &y).expect("valid training data");
///
/// assert_eq!(knn.classes().unwrap(), &[0, 1]);
/// assert_eq!(knn.n_features_in().unwrap(), 2);
/// assert_eq!(knn.predict(&[[0.5, 0.5], [5.5, 5.0]]).unwrap(), vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct OneNearestNeighbor<F, L, D = StrictValidator, T = StrictValidator, S = Accuracy> {
    dataset_validator: D,
    target_validator: T,
    scorer: S,
    finder: Option<NearestLabelFinder<F, L>>,
}

impl<F, L> OneNearestNeighbor<F, L> {
    /// Creates an unfitted classifier with the default capabilities.
    pub fn new() -> Self {
        OneNearestNeighbor {
            dataset_validator: StrictValidator::default(),
            target_validator: StrictValidator::default(),
            scorer: Accuracy,
            finder: None,
        }
    }
}

impl<F, L> Default for OneNearestNeighbor<F, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, L, D, T, S> OneNearestNeighbor<F, L, D, T, S> {
    /// Replaces the feature/dataset validator. Drops any fitted state.
    pub fn with_dataset_validator<D2>(
        self,
        dataset_validator: D2,
    ) -> OneNearestNeighbor<F, L, D2, T, S> {
        OneNearestNeighbor {
            dataset_validator,
            target_validator: self.target_validator,
            scorer: self.scorer,
            finder: None,
        }
    }

    /// Replaces the classification-target validator. Drops any fitted state.
    pub fn with_target_validator<T2>(
        self,
        target_validator: T2,
    ) -> OneNearestNeighbor<F, L, D, T2, S> {
        OneNearestNeighbor {
            dataset_validator: self.dataset_validator,
            target_validator,
            scorer: self.scorer,
            finder: None,
        }
    }

    /// Replaces the scorer used by `score`. Keeps fitted state.
    pub fn with_scorer<S2>(self, scorer: S2) -> OneNearestNeighbor<F, L, D, T, S2> {
        OneNearestNeighbor {
            dataset_validator: self.dataset_validator,
            target_validator: self.target_validator,
            scorer,
            finder: self.finder,
        }
    }

    pub fn is_fitted(&self) -> bool {
        self.finder.is_some()
    }

    /// The fitted search state.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` before `fit`.
    pub fn finder(&self) -> Result<&NearestLabelFinder<F, L>> {
        self.finder.as_ref().ok_or(ClassifierError::NotFitted {
            estimator: ESTIMATOR_NAME,
        })
    }
}

impl<F, L, D, T, S> OneNearestNeighbor<F, L, D, T, S>
where
    F: Float,
    L: ClassLabel,
    D: DatasetValidator<F>,
    T: TargetValidator<L>,
    S: Scorer<L>,
{
    /// Predicts the label for a single row.
    ///
    /// # Errors
    ///
    /// Same as [`predict`](Classifier::predict).
    pub fn predict_single(&self, row: &[F]) -> Result<L> {
        let mut predictions = self.predict(&[row])?;
        predictions
            .pop()
            .ok_or_else(|| ClassifierError::invalid_input("Prediction produced no label"))
    }

    /// The nearest training row (index and distance) for each query row.
    ///
    /// # Errors
    ///
    /// Same as [`predict`](Classifier::predict).
    pub fn kneighbors<R: AsRef<[F]>>(&self, x: &[R]) -> Result<Vec<Neighbor<F>>> {
        let finder = self.finder()?;
        self.dataset_validator
            .validate_features(x, Some(finder.training_set().n_features()))?;
        finder.kneighbors(x)
    }
}

impl<F, L, D, T, S> Classifier<F, L> for OneNearestNeighbor<F, L, D, T, S>
where
    F: Float,
    L: ClassLabel,
    D: DatasetValidator<F>,
    T: TargetValidator<L>,
    S: Scorer<L>,
{
    fn fit<R: AsRef<[F]>>(&mut self, x: &[R], y: &[L]) -> Result<&mut Self> {
        let n_features = self.dataset_validator.validate_dataset(x, y)?;
        if x.is_empty() {
            return Err(ClassifierError::invalid_input("Cannot fit with zero samples"));
        }
        self.target_validator.validate_targets(y)?;

        let finder = NearestLabelFinder::fit(x, y);
        debug!(
            n_samples = finder.training_set().n_samples(),
            n_features,
            n_classes = finder.training_set().classes().len(),
            "fitted {}",
            ESTIMATOR_NAME
        );
        self.finder = Some(finder);
        Ok(self)
    }

    fn predict<R: AsRef<[F]>>(&self, x: &[R]) -> Result<Vec<L>> {
        let finder = self.finder()?;
        self.dataset_validator
            .validate_features(x, Some(finder.training_set().n_features()))?;

        let predictions = finder.predict(x)?;
        debug!(n_queries = x.len(), "predicted labels");
        Ok(predictions)
    }

    fn score<R: AsRef<[F]>>(&self, x: &[R], y: &[L]) -> Result<f64> {
        check_consistent_length(x.len(), y.len())?;
        let predictions = self.predict(x)?;
        let score = self.scorer.score(y, &predictions)?;
        debug!(n_queries = x.len(), score, "scored predictions");
        Ok(score)
    }

    fn classes(&self) -> Result<&[L]> {
        Ok(self.finder()?.training_set().classes())
    }

    fn n_features_in(&self) -> Result<usize> {
        Ok(self.finder()?.training_set().n_features())
    }
}
