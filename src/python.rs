//! Python bindings for the classifier.
//! This module is only compiled when the "python" feature is enabled

use ordered_float::OrderedFloat;
use pyo3::create_exception;
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;

use crate::distance::euclidean_distance;
use crate::error::ClassifierError;
use crate::knn::OneNearestNeighbor;
use crate::label::MixedLabel;
use crate::traits::Classifier;

create_exception!(
    one_nearest_neighbor,
    NotFittedError,
    PyValueError,
    "Raised when predict or score is called before fit."
);

impl From<ClassifierError> for PyErr {
    fn from(err: ClassifierError) -> Self {
        match err {
            ClassifierError::NotFitted { .. } => NotFittedError::new_err(err.to_string()),
            ClassifierError::InvalidInput { .. } | ClassifierError::InvalidTarget { .. } => {
                PyValueError::new_err(err.to_string())
            }
        }
    }
}

/// Python `int`, `float` and `str` labels, tried in that order.
///
/// Floats are kept as floats so a continuous target reaches target
/// validation and fails there with `ValueError`.
impl<'py> FromPyObject<'py> for MixedLabel {
    fn extract_bound(ob: &Bound<'py, PyAny>) -> PyResult<Self> {
        if let Ok(v) = ob.extract::<i64>() {
            return Ok(MixedLabel::Int(v));
        }
        if let Ok(v) = ob.extract::<f64>() {
            return Ok(MixedLabel::Float(OrderedFloat(v)));
        }
        if let Ok(s) = ob.extract::<String>() {
            return Ok(MixedLabel::Str(s));
        }
        Err(PyTypeError::new_err("Labels must be int, float or str"))
    }
}

impl IntoPy<PyObject> for MixedLabel {
    fn into_py(self, py: Python<'_>) -> PyObject {
        match self {
            MixedLabel::Int(v) => v.into_py(py),
            MixedLabel::Float(v) => v.0.into_py(py),
            MixedLabel::Str(s) => s.into_py(py),
        }
    }
}

/// Calculates the Euclidean distance between two vectors of f64.
#[pyfunction]
#[pyo3(name = "euclidean_distance")]
fn euclidean_distance_py(a: Vec<f64>, b: Vec<f64>) -> PyResult<f64> {
    if a.len() != b.len() {
        return Err(PyValueError::new_err("Input vectors must have the same length."));
    }
    Ok(euclidean_distance(&a, &b))
}

#[pyclass(name = "OneNearestNeighbor")]
pub struct PyOneNearestNeighbor {
    classifier: OneNearestNeighbor<f64, MixedLabel>,
}

#[pymethods]
impl PyOneNearestNeighbor {
    #[new]
    fn new() -> Self {
        PyOneNearestNeighbor {
            classifier: OneNearestNeighbor::new(),
        }
    }

    /// Fits on `X` (rows of floats) and `y` (ints, floats or strs) and returns self.
    fn fit<'py>(
        mut slf: PyRefMut<'py, Self>,
        x: Vec<Vec<f64>>,
        y: Vec<MixedLabel>,
    ) -> PyResult<PyRefMut<'py, Self>> {
        slf.classifier.fit(&x, &y)?;
        Ok(slf)
    }

    fn predict(&self, x: Vec<Vec<f64>>) -> PyResult<Vec<MixedLabel>> {
        Ok(self.classifier.predict(&x)?)
    }

    fn score(&self, x: Vec<Vec<f64>>, y: Vec<MixedLabel>) -> PyResult<f64> {
        Ok(self.classifier.score(&x, &y)?)
    }

    #[getter]
    fn classes_(&self) -> PyResult<Vec<MixedLabel>> {
        Ok(self.classifier.classes()?.to_vec())
    }

    #[getter]
    fn n_features_in_(&self) -> PyResult<usize> {
        Ok(self.classifier.n_features_in()?)
    }

    fn __repr__(&self) -> &'static str {
        "OneNearestNeighbor()"
    }
}

/// The name of this function must match the `lib.name` in `Cargo.toml`.
#[pymodule]
fn one_nearest_neighbor(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyOneNearestNeighbor>()?;
    m.add("NotFittedError", m.py().get_type_bound::<NotFittedError>())?;
    m.add_function(wrap_pyfunction!(euclidean_distance_py, m)?)?;
    Ok(())
}
