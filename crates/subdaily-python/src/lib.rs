//! Python extension module `_core`.
//!
//! Each submodule is also entered in `sys.modules` so that
//! `from <package>._core.radiation import RadiationEstimator` works.

mod convert;
mod radiation;
mod temperature;

use pyo3::prelude::*;

type Register = fn(&Bound<'_, PyModule>) -> PyResult<()>;

const SUBMODULES: [(&str, Register); 2] = [
    ("radiation", radiation::register),
    ("temperature", temperature::register),
];

#[pyfunction]
fn rust_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(rust_version, m)?)?;

    let modules = m.py().import("sys")?.getattr("modules")?;
    let package = m.name()?;
    for (name, register) in SUBMODULES {
        register(m)?;
        modules.set_item(format!("{}.{}", package, name), m.getattr(name)?)?;
    }
    Ok(())
}
