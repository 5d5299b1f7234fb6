use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;
use crate::convert::{checked_slice, contiguous_slice, load_config, to_py_err};

use subdaily_core::forcing::{DailyTemperatureForcing, Resolution};
use subdaily_core::radiation::geometry::Site;
use subdaily_core::temperature::daylight;
use subdaily_core::temperature::params::DailyExtremes;
use subdaily_core::temperature::run;

/// Disaggregated multi-day temperature with range diagnostics.
#[pyclass(frozen)]
pub struct TemperatureResult {
    #[pyo3(get)]
    pub values: Py<PyArray1<f64>>,
    #[pyo3(get)]
    pub steps_per_day: usize,
    #[pyo3(get)]
    pub below_min: usize,
    #[pyo3(get)]
    pub above_max: usize,
}

/// Sub-daily temperature of the middle of three days.
///
/// Each argument holds yesterday, today and tomorrow.
#[pyfunction]
#[pyo3(signature = (tmin, tmax, tmin_hour, tmax_hour, step_hours=1, config_path=None))]
fn hourly_temperature<'py>(
    py: Python<'py>,
    tmin: PyReadonlyArray1<'py, f64>,
    tmax: PyReadonlyArray1<'py, f64>,
    tmin_hour: [u32; 3],
    tmax_hour: [u32; 3],
    step_hours: u32,
    config_path: Option<String>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let config = load_config(config_path.as_deref())?;
    let resolution = Resolution::from_step_hours(step_hours).map_err(to_py_err)?;
    let lo = checked_slice(&tmin, 3, "tmin")?;
    let hi = checked_slice(&tmax, 3, "tmax")?;

    let days: [DailyExtremes; 3] =
        std::array::from_fn(|d| DailyExtremes::new(tmin_hour[d], lo[d], tmax_hour[d], hi[d]));
    let out = run::hourly_temperature(&days, resolution, &config).map_err(to_py_err)?;
    Ok(PyArray1::from_vec(py, out.values))
}

/// Disaggregate every day of a record.
#[pyfunction]
#[pyo3(signature = (tmin, tmax, tmin_hour, tmax_hour, step_hours=1, config_path=None))]
fn disaggregate_temperature<'py>(
    py: Python<'py>,
    tmin: PyReadonlyArray1<'py, f64>,
    tmax: PyReadonlyArray1<'py, f64>,
    tmin_hour: Vec<u32>,
    tmax_hour: Vec<u32>,
    step_hours: u32,
    config_path: Option<String>,
) -> PyResult<TemperatureResult> {
    let config = load_config(config_path.as_deref())?;
    let resolution = Resolution::from_step_hours(step_hours).map_err(to_py_err)?;
    let forcing = DailyTemperatureForcing::new(
        contiguous_slice(&tmin)?.to_vec(),
        contiguous_slice(&tmax)?.to_vec(),
        tmin_hour,
        tmax_hour,
    )
    .map_err(to_py_err)?;

    let series = run::run(&forcing, resolution, &config).map_err(to_py_err)?;
    Ok(TemperatureResult {
        values: PyArray1::from_vec(py, series.values).unbind(),
        steps_per_day: series.steps_per_day,
        below_min: series.range.below_min,
        above_max: series.range.above_max,
    })
}

/// `(tmin_hour, tmax_hour)` from the day length at a site.
#[pyfunction]
#[pyo3(signature = (latitude, longitude, time_zone_longitude, day_of_year, config_path=None))]
fn extreme_hours(
    latitude: f64,
    longitude: f64,
    time_zone_longitude: f64,
    day_of_year: f64,
    config_path: Option<String>,
) -> PyResult<(u32, u32)> {
    let config = load_config(config_path.as_deref())?;
    let site = Site::new(latitude, longitude, time_zone_longitude);
    let profile = daylight::daylight_profile(&site, day_of_year, &config);
    Ok(daylight::extreme_hours(&profile, &config))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "temperature")?;
    m.add_function(wrap_pyfunction!(hourly_temperature, &m)?)?;
    m.add_function(wrap_pyfunction!(disaggregate_temperature, &m)?)?;
    m.add_function(wrap_pyfunction!(extreme_hours, &m)?)?;
    m.add_class::<TemperatureResult>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
