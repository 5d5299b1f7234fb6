use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;
use crate::convert::{checked_slice, contiguous_slice, load_config, measured, optional_column, to_py_err};

use subdaily_core::radiation::constants::SOLAR_CONSTANT;
use subdaily_core::radiation::fluxes::{RadiationFluxes, RadiationFluxesSeries};
use subdaily_core::radiation::geometry::{SolarGeometry, Site};
use subdaily_core::radiation::run::{self, RadiationForcing};
use subdaily_core::radiation::state::CloudState;

/// Radiation run results, one numpy array per column.
#[pyclass(frozen)]
pub struct RadiationResult {
    #[pyo3(get)]
    pub shortwave: Py<PyArray1<f64>>,
    #[pyo3(get)]
    pub longwave: Py<PyArray1<f64>>,
    #[pyo3(get)]
    pub cloud_fraction: Py<PyArray1<f64>>,
    #[pyo3(get)]
    pub extraterrestrial: Py<PyArray1<f64>>,
    #[pyo3(get)]
    pub clear_sky: Py<PyArray1<f64>>,
    #[pyo3(get)]
    pub sin_alpha: Py<PyArray1<f64>>,
}

impl RadiationResult {
    fn new(py: Python<'_>, series: RadiationFluxesSeries) -> Self {
        let array = |column: Vec<f64>| PyArray1::from_vec(py, column).unbind();
        Self {
            shortwave: array(series.shortwave),
            longwave: array(series.longwave),
            cloud_fraction: array(series.cloud_fraction),
            extraterrestrial: array(series.extraterrestrial),
            clear_sky: array(series.clear_sky),
            sin_alpha: array(series.sin_alpha),
        }
    }
}

/// Radiation results for a single hour, with its diagnostic flags.
#[pyclass(frozen)]
pub struct RadiationStepFluxes {
    #[pyo3(get)]
    pub shortwave: f64,
    #[pyo3(get)]
    pub longwave: f64,
    #[pyo3(get)]
    pub cloud_fraction: f64,
    #[pyo3(get)]
    pub extraterrestrial: f64,
    #[pyo3(get)]
    pub clear_sky: f64,
    #[pyo3(get)]
    pub sin_alpha: f64,
    #[pyo3(get)]
    pub exceeded_clear_sky: bool,
}

impl From<&RadiationFluxes> for RadiationStepFluxes {
    fn from(f: &RadiationFluxes) -> Self {
        Self {
            shortwave: f.shortwave,
            longwave: f.longwave,
            cloud_fraction: f.cloud_fraction,
            extraterrestrial: f.extraterrestrial,
            clear_sky: f.clear_sky,
            sin_alpha: f.sin_alpha,
            exceeded_clear_sky: f.diagnostics.exceeded_clear_sky,
        }
    }
}

/// Solar position for one hour.
#[pyclass(frozen)]
pub struct SolarGeometryResult {
    /// [rad]
    #[pyo3(get)]
    pub declination: f64,
    /// [deg]
    #[pyo3(get)]
    pub hour_angle: f64,
    #[pyo3(get)]
    pub sin_alpha: f64,
    #[pyo3(get)]
    pub radius: f64,
    #[pyo3(get)]
    pub extraterrestrial: f64,
}

impl From<SolarGeometry> for SolarGeometryResult {
    fn from(g: SolarGeometry) -> Self {
        Self {
            declination: g.declination,
            hour_angle: g.hour_angle,
            sin_alpha: g.sin_alpha,
            radius: g.radius,
            extraterrestrial: g.extraterrestrial,
        }
    }
}

#[pyfunction]
#[pyo3(signature = (day_of_year, hour, latitude, longitude, time_zone_longitude, solar_constant=SOLAR_CONSTANT))]
fn solar_geometry(
    day_of_year: f64,
    hour: f64,
    latitude: f64,
    longitude: f64,
    time_zone_longitude: f64,
    solar_constant: f64,
) -> SolarGeometryResult {
    let site = Site::new(latitude, longitude, time_zone_longitude);
    SolarGeometry::compute(&site, day_of_year, hour, solar_constant).into()
}

/// Per-cell radiation estimator carrying the last derived cloud fraction.
#[pyclass(name = "RadiationEstimator")]
pub struct PyRadiationEstimator {
    inner: run::RadiationEstimator,
}

#[pymethods]
impl PyRadiationEstimator {
    #[new]
    #[pyo3(signature = (latitude, longitude, time_zone_longitude, last_cloud_fraction=0.0, config_path=None))]
    fn new(
        latitude: f64,
        longitude: f64,
        time_zone_longitude: f64,
        last_cloud_fraction: f64,
        config_path: Option<String>,
    ) -> PyResult<Self> {
        let config = load_config(config_path.as_deref())?;
        let site = Site::new(latitude, longitude, time_zone_longitude);
        let state = CloudState::checked(last_cloud_fraction).map_err(to_py_err)?;
        Ok(Self {
            inner: run::RadiationEstimator::with_state(site, config, state),
        })
    }

    #[getter]
    fn last_cloud_fraction(&self) -> f64 {
        self.inner.state().last_cloud_fraction
    }

    /// Estimate one hour. Missing measurements are passed as None.
    #[pyo3(signature = (day_of_year, hour, air_temp, vapor_pressure, shortwave=None, longwave=None, cloud_fraction=None))]
    #[allow(clippy::too_many_arguments)]
    fn estimate(
        &mut self,
        day_of_year: f64,
        hour: f64,
        air_temp: f64,
        vapor_pressure: f64,
        shortwave: Option<f64>,
        longwave: Option<f64>,
        cloud_fraction: Option<f64>,
    ) -> PyResult<RadiationStepFluxes> {
        let forcing = RadiationForcing {
            day_of_year,
            hour,
            air_temp,
            vapor_pressure,
            shortwave,
            longwave,
            cloud_fraction,
        };
        let fluxes = self.inner.estimate(&forcing).map_err(to_py_err)?;
        Ok(RadiationStepFluxes::from(&fluxes))
    }

    /// Estimate a series of hours. NaN in an optional array marks a missing
    /// measurement for that hour.
    #[pyo3(signature = (day_of_year, hour, air_temp, vapor_pressure, shortwave=None, longwave=None, cloud_fraction=None))]
    #[allow(clippy::too_many_arguments)]
    fn run<'py>(
        &mut self,
        py: Python<'py>,
        day_of_year: PyReadonlyArray1<'py, f64>,
        hour: PyReadonlyArray1<'py, f64>,
        air_temp: PyReadonlyArray1<'py, f64>,
        vapor_pressure: PyReadonlyArray1<'py, f64>,
        shortwave: Option<PyReadonlyArray1<'py, f64>>,
        longwave: Option<PyReadonlyArray1<'py, f64>>,
        cloud_fraction: Option<PyReadonlyArray1<'py, f64>>,
    ) -> PyResult<RadiationResult> {
        let doy = contiguous_slice(&day_of_year)?;
        let n = doy.len();
        let hour = checked_slice(&hour, n, "hour")?;
        let air_temp = checked_slice(&air_temp, n, "air_temp")?;
        let vapor_pressure = checked_slice(&vapor_pressure, n, "vapor_pressure")?;
        let sw = optional_column(&shortwave, n, "shortwave")?;
        let lw = optional_column(&longwave, n, "longwave")?;
        let cf = optional_column(&cloud_fraction, n, "cloud_fraction")?;

        let forcing: Vec<RadiationForcing> = (0..n)
            .map(|i| RadiationForcing {
                day_of_year: doy[i],
                hour: hour[i],
                air_temp: air_temp[i],
                vapor_pressure: vapor_pressure[i],
                shortwave: measured(sw, i),
                longwave: measured(lw, i),
                cloud_fraction: measured(cf, i),
            })
            .collect();

        let series = self.inner.estimate_series(&forcing).map_err(to_py_err)?;
        Ok(RadiationResult::new(py, series.fluxes))
    }
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "radiation")?;
    m.add_function(wrap_pyfunction!(solar_geometry, &m)?)?;
    m.add_class::<PyRadiationEstimator>()?;
    m.add_class::<RadiationResult>()?;
    m.add_class::<RadiationStepFluxes>()?;
    m.add_class::<SolarGeometryResult>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
