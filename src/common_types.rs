//! This module contains the data structures shared by the finder and the estimator.

use std::collections::BTreeSet;

use crate::label::ClassLabel;

/// The reference set captured at fit time.
///
/// - `F`: The type of the features (e.g., `f64`, `f32`).
/// - `L`: The type of the label (e.g., `i32`, `String`).
///
/// Rows and labels are copied out of the caller's slices, so later changes to
/// those slices never reach a fitted model.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet<F, L> {
    features: Vec<Vec<F>>,
    labels: Vec<L>,
    classes: Vec<L>,
    n_features: usize,
}

impl<F: Copy, L: ClassLabel> TrainingSet<F, L> {
    /// Copies `features` and `labels` into a new snapshot.
    ///
    /// Callers are expected to have validated shapes already; the row length
    /// of the first row is taken as `n_features` (0 for an empty set).
    pub fn new<R: AsRef<[F]>>(features: &[R], labels: &[L]) -> Self {
        let features: Vec<Vec<F>> = features.iter().map(|row| row.as_ref().to_vec()).collect();
        let n_features = features.first().map_or(0, Vec::len);
        let classes = labels.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();

        TrainingSet {
            features,
            labels: labels.to_vec(),
            classes,
            n_features,
        }
    }
}

impl<F, L> TrainingSet<F, L> {
    pub fn features(&self) -> &[Vec<F>] {
        &self.features
    }

    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Distinct labels, sorted ascending.
    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn n_samples(&self) -> usize {
        self.labels.len()
    }
}
