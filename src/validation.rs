//! Input and target validation consumed by the estimator before it touches data.
//!
//! Two capabilities are split out so callers can swap either one:
//! [`DatasetValidator`] checks feature rows (and their pairing with labels),
//! [`TargetValidator`] checks that labels form a classification target.
//! [`StrictValidator`] implements both, configured by [`ValidationOptions`].

use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, Result};
use crate::label::{ClassLabel, LabelKind};

/// Checks feature rows for shape and numeric validity.
pub trait DatasetValidator<F> {
    /// Validates a batch of feature rows and returns its feature count.
    ///
    /// When `expected_n_features` is `Some`, the batch must have exactly that
    /// many features per row.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` on too few rows or features, ragged rows,
    /// invalid values or a feature count mismatch.
    fn validate_features<R: AsRef<[F]>>(
        &self,
        rows: &[R],
        expected_n_features: Option<usize>,
    ) -> Result<usize>;

    /// Validates rows paired with one label each and returns the feature count.
    ///
    /// # Errors
    ///
    /// Everything `validate_features` rejects, plus a row/label count mismatch.
    fn validate_dataset<R: AsRef<[F]>, L>(&self, rows: &[R], labels: &[L]) -> Result<usize> {
        check_consistent_length(rows.len(), labels.len())?;
        self.validate_features(rows, None)
    }
}

/// Checks that labels are a valid classification target.
pub trait TargetValidator<L> {
    /// # Errors
    ///
    /// Returns `InvalidTarget` when `labels` look like a regression target or
    /// mix incompatible label kinds.
    fn validate_targets(&self, labels: &[L]) -> Result<()>;
}

/// Knobs for [`StrictValidator`], named after the checks they relax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidationOptions {
    /// Minimum number of rows a batch must have.
    pub min_samples: usize,
    /// Minimum number of features per row.
    pub min_features: usize,
    /// Accept NaN and infinite feature values.
    pub allow_non_finite: bool,
}

impl ValidationOptions {
    const DEFAULT_MIN_SAMPLES: usize = 1;
    const DEFAULT_MIN_FEATURES: usize = 1;

    pub fn with_min_samples(mut self, min_samples: usize) -> Self {
        self.min_samples = min_samples;
        self
    }

    pub fn with_min_features(mut self, min_features: usize) -> Self {
        self.min_features = min_features;
        self
    }

    pub fn with_allow_non_finite(mut self, allow_non_finite: bool) -> Self {
        self.allow_non_finite = allow_non_finite;
        self
    }
}

impl Default for ValidationOptions {
    fn default() -> Self {
        ValidationOptions {
            min_samples: Self::DEFAULT_MIN_SAMPLES,
            min_features: Self::DEFAULT_MIN_FEATURES,
            allow_non_finite: false,
        }
    }
}

/// Default validator for both features and targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrictValidator {
    options: ValidationOptions,
}

impl StrictValidator {
    pub fn new(options: ValidationOptions) -> Self {
        StrictValidator { options }
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }
}

impl<F: Float> DatasetValidator<F> for StrictValidator {
    fn validate_features<R: AsRef<[F]>>(
        &self,
        rows: &[R],
        expected_n_features: Option<usize>,
    ) -> Result<usize> {
        let n_samples = rows.len();
        let n_features = rows
            .first()
            .map(|row| row.as_ref().len())
            .or(expected_n_features)
            .unwrap_or(0);

        if n_samples < self.options.min_samples {
            return Err(ClassifierError::invalid_input(format!(
                "Found array with {n_samples} sample(s) (shape=({n_samples}, {n_features})) while a minimum of {} is required.",
                self.options.min_samples
            )));
        }

        for (i, row) in rows.iter().enumerate() {
            let len = row.as_ref().len();
            if len != n_features {
                return Err(ClassifierError::invalid_input(format!(
                    "Inhomogeneous rows: row {i} has {len} features, expected {n_features}"
                )));
            }
        }

        if n_samples > 0 && n_features < self.options.min_features {
            return Err(ClassifierError::invalid_input(format!(
                "Found array with {n_features} feature(s) (shape=({n_samples}, {n_features})) while a minimum of {} is required.",
                self.options.min_features
            )));
        }

        if let Some(expected) = expected_n_features {
            if n_samples > 0 && n_features != expected {
                return Err(ClassifierError::invalid_input(format!(
                    "X has {n_features} features, but the fitted model is expecting {expected} features as input."
                )));
            }
        }

        if !self.options.allow_non_finite {
            for (i, row) in rows.iter().enumerate() {
                if let Some(j) = row.as_ref().iter().position(|v| !v.is_finite()) {
                    let what = if row.as_ref()[j].is_nan() { "NaN" } else { "infinity" };
                    return Err(ClassifierError::invalid_input(format!(
                        "Input contains {what} at row {i}, column {j}."
                    )));
                }
            }
        }

        Ok(n_features)
    }
}

impl<L: ClassLabel> TargetValidator<L> for StrictValidator {
    fn validate_targets(&self, labels: &[L]) -> Result<()> {
        let mut seen: Option<LabelKind> = None;
        for label in labels {
            let kind = label.kind();
            if kind == LabelKind::Continuous {
                return Err(ClassifierError::invalid_target(
                    "Unknown label type: continuous. Maybe you are trying to fit a classifier, \
                     which expects discrete classes on a regression target with continuous values.",
                ));
            }
            match seen {
                None => seen = Some(kind),
                Some(first) if first != kind => {
                    return Err(ClassifierError::invalid_target(format!(
                        "Mix of label input types ({} and {})",
                        first.as_str(),
                        kind.as_str()
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Rejects paired sequences of different lengths.
pub fn check_consistent_length(n_rows: usize, n_labels: usize) -> Result<()> {
    if n_rows != n_labels {
        return Err(ClassifierError::invalid_input(format!(
            "Found input variables with inconsistent numbers of samples: [{n_rows}, {n_labels}]"
        )));
    }
    Ok(())
}
