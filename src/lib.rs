//! A one-nearest-neighbor classifier with fit/predict/score semantics.
//!
//! For every query row the classifier returns the label of the closest
//! training row under Euclidean distance, resolving ties to the training row
//! that was seen first.
//!
//! # Modules
//!
//! - [`knn`]: the [`OneNearestNeighbor`] estimator and its search core
//! - [`validation`]: dataset and classification-target validation
//! - [`metrics`]: accuracy scoring
//! - [`distance`]: Euclidean distance
//! - [`label`]: which types can be used as class labels

pub mod common_types;
pub mod distance;
pub mod error;
pub mod knn;
pub mod label;
pub mod metrics;
pub mod prelude;
pub mod traits;
pub mod validation;

// Python bindings are only compiled when the "python" feature is enabled
#[cfg(feature = "python")]
pub mod python;

pub use common_types::TrainingSet;
pub use error::{ClassifierError, Result};
pub use knn::{NearestLabelFinder, Neighbor, OneNearestNeighbor};
pub use traits::Classifier;
