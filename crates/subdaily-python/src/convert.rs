use numpy::PyReadonlyArray1;
use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use subdaily_core::ForcingError;

/// Validate that a numpy array is C-contiguous and return its slice.
pub fn contiguous_slice<'py>(arr: &'py PyReadonlyArray1<'py, f64>) -> PyResult<&'py [f64]> {
    arr.as_slice()
        .map_err(|_| PyValueError::new_err("array must be C-contiguous"))
}

/// Validate length + contiguity of a numpy array.
pub fn checked_slice<'py>(
    arr: &'py PyReadonlyArray1<'py, f64>,
    expected_len: usize,
    name: &str,
) -> PyResult<&'py [f64]> {
    let slice = contiguous_slice(arr)?;
    if slice.len() != expected_len {
        return Err(PyValueError::new_err(format!(
            "{} must have {} elements, got {}",
            name, expected_len, slice.len()
        )));
    }
    Ok(slice)
}

/// Optional array of measurements where NaN marks a missing value.
pub fn optional_column<'py>(
    arr: &'py Option<PyReadonlyArray1<'py, f64>>,
    expected_len: usize,
    name: &str,
) -> PyResult<Option<&'py [f64]>> {
    arr.as_ref()
        .map(|a| checked_slice(a, expected_len, name))
        .transpose()
}

pub fn measured(column: Option<&[f64]>, i: usize) -> Option<f64> {
    column.map(|c| c[i]).filter(|v| !v.is_nan())
}

/// Map core errors onto Python exception types.
pub fn to_py_err(err: ForcingError) -> PyErr {
    match err {
        ForcingError::Configuration(_) => PyRuntimeError::new_err(err.to_string()),
        ForcingError::Io(_) => PyIOError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Load a JSON config, or the defaults when no path is given.
pub fn load_config(path: Option<&str>) -> PyResult<subdaily_core::ForcingConfig> {
    match path {
        Some(p) => subdaily_core::ForcingConfig::load(p).map_err(to_py_err),
        None => Ok(subdaily_core::ForcingConfig::default()),
    }
}
