//! Convenience re-exports.
//!
//! ```
//! use one_nearest_neighbor::prelude::*;
//! ```

pub use crate::error::ClassifierError;
pub use crate::knn::{NearestLabelFinder, OneNearestNeighbor};
pub use crate::label::ClassLabel;
pub use crate::metrics::{accuracy_score, Accuracy, Scorer};
pub use crate::traits::Classifier;
pub use crate::validation::{DatasetValidator, StrictValidator, TargetValidator, ValidationOptions};
