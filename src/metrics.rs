//! Scoring of predictions against true labels.
//!
//! The estimator never computes accuracy itself; it hands its predictions to
//! a [`Scorer`]. [`Accuracy`] is the default.

use crate::error::{ClassifierError, Result};

/// Scores a sequence of predicted labels against the true ones.
pub trait Scorer<L> {
    /// Returns a score for `y_pred` given `y_true`, both aligned by position.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the sequences cannot be compared.
    fn score(&self, y_true: &[L], y_pred: &[L]) -> Result<f64>;
}

/// Mean accuracy: the fraction of positions where prediction equals truth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accuracy;

impl<L: PartialEq> Scorer<L> for Accuracy {
    fn score(&self, y_true: &[L], y_pred: &[L]) -> Result<f64> {
        accuracy_score(y_true, y_pred)
    }
}

/// Compute classification accuracy.
///
/// accuracy = `correct_predictions` / `total_predictions`
///
/// # Errors
///
/// Returns `InvalidInput` if the sequences differ in length or are empty.
///
/// # Examples
///
/// ```
/// use one_nearest_neighbor::metrics::accuracy_score;
///
/// let y_true = vec![0, 1, 2, 0];
/// let y_pred = vec![0, 2, 1, 0];
/// assert_eq!(accuracy_score(&y_true, &y_pred).unwrap(), 0.5);
/// ```
pub fn accuracy_score<L: PartialEq>(y_true: &[L], y_pred: &[L]) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(ClassifierError::invalid_input(format!(
            "Found input variables with inconsistent numbers of samples: [{}, {}]",
            y_true.len(),
            y_pred.len()
        )));
    }
    if y_true.is_empty() {
        return Err(ClassifierError::invalid_input(
            "Cannot compute accuracy of an empty label sequence",
        ));
    }

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();

    Ok(correct as f64 / y_true.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_all_correct_and_all_wrong() {
        assert_eq!(accuracy_score(&["a", "b"], &["a", "b"]).unwrap(), 1.0);
        assert_eq!(accuracy_score(&["a", "b"], &["b", "a"]).unwrap(), 0.0);
    }

    #[test]
    fn test_accuracy_partial() {
        let acc = accuracy_score(&[0, 1, 2], &[0, 1, 1]).unwrap();
        assert!((acc - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_accuracy_length_mismatch() {
        let err = accuracy_score(&[0, 1], &[0]).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidInput { .. }));
        assert!(err.to_string().contains("[2, 1]"));
    }

    #[test]
    fn test_accuracy_empty() {
        let empty: [u8; 0] = [];
        assert!(accuracy_score(&empty, &empty).is_err());
    }

    #[test]
    fn test_scorer_trait_delegates() {
        let acc = Accuracy.score(&[1, 1, 0, 0], &[1, 0, 0, 0]).unwrap();
        assert_eq!(acc, 0.75);
    }
}
