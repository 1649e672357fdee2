//! Brute-force nearest-label search over a fitted training set.

use num_traits::Float;
use tracing::trace;

use super::nearest::{Neighbor, NearestSoFar};
use crate::common_types::TrainingSet;
use crate::distance::euclidean_distance;
use crate::error::{ClassifierError, Result};
use crate::label::ClassLabel;

/// Owns a [`TrainingSet`] and answers nearest-neighbor label queries.
///
/// Performs no input validation: rows are assumed to have the fitted number
/// of features. [`OneNearestNeighbor`](super::OneNearestNeighbor) validates
/// before calling in.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestLabelFinder<F, L> {
    training: TrainingSet<F, L>,
}

impl<F, L> NearestLabelFinder<F, L>
where
    F: Float,
    L: ClassLabel,
{
    /// Copies `features` and `labels` into a new finder.
    pub fn fit<R: AsRef<[F]>>(features: &[R], labels: &[L]) -> Self {
        NearestLabelFinder {
            training: TrainingSet::new(features, labels),
        }
    }

    pub fn training_set(&self) -> &TrainingSet<F, L> {
        &self.training
    }

    /// Closest training row to `query`, lowest index first on ties.
    ///
    /// Compares true Euclidean distances rather than squared ones so that
    /// rounding produces the same ties as the reference computation.
    /// Returns `None` only when the training set is empty.
    pub fn nearest(&self, query: &[F]) -> Option<Neighbor<F>> {
        let mut best = NearestSoFar::new();
        for (j, row) in self.training.features().iter().enumerate() {
            best.offer(j, euclidean_distance(query, row));
        }
        best.into_nearest()
    }

    /// The nearest training row for each query row, aligned with `rows`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the training set is empty.
    pub fn kneighbors<R: AsRef<[F]>>(&self, rows: &[R]) -> Result<Vec<Neighbor<F>>> {
        rows.iter()
            .map(|row| self.nearest(row.as_ref()).ok_or_else(empty_training_set))
            .collect()
    }

    /// The label of the nearest training row for each query row.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the training set is empty.
    pub fn predict<R: AsRef<[F]>>(&self, rows: &[R]) -> Result<Vec<L>> {
        let labels = self.training.labels();
        let mut predictions = Vec::with_capacity(rows.len());

        for (i, row) in rows.iter().enumerate() {
            let neighbor = self.nearest(row.as_ref()).ok_or_else(empty_training_set)?;
            trace!(query = i, nearest = neighbor.index, "nearest training row");
            predictions.push(labels[neighbor.index].clone());
        }
        Ok(predictions)
    }
}

fn empty_training_set() -> ClassifierError {
    ClassifierError::invalid_input("Cannot search an empty training set")
}
