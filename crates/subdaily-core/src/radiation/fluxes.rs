/// Radiation estimator outputs.
///
/// `RadiationFluxes` is one step's result; `RadiationFluxesSeries` (derived)
/// collects them column-wise and `RadiationSeries` adds the run's diagnostic
/// counts.
use subdaily_macros::Series;

use crate::traits::SeriesOps;

/// Non-fatal events raised by one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// A negative measured shortwave was replaced by zero.
    pub negative_measurement: bool,
    /// Estimated shortwave came out negative and was clamped to zero.
    pub shortwave_clamped: bool,
    /// Measured shortwave exceeded the clear-sky estimate; the carried cloud
    /// fraction was used instead of a derived one.
    pub exceeded_clear_sky: bool,
}

impl Diagnostics {
    pub fn any(&self) -> bool {
        self.negative_measurement || self.shortwave_clamped || self.exceeded_clear_sky
    }
}

/// Result of one radiation step.
#[derive(Debug, Clone, Copy, Series)]
pub struct RadiationFluxes {
    /// Incoming shortwave [W/m2].
    pub shortwave: f64,
    /// Incoming longwave [W/m2].
    pub longwave: f64,
    /// Cloud fraction used for this step [-].
    pub cloud_fraction: f64,
    /// Extraterrestrial irradiance on a horizontal plane [W/m2].
    pub extraterrestrial: f64,
    /// Clear-sky reference irradiance; zero at night [W/m2].
    pub clear_sky: f64,
    /// Sine of the solar altitude [-].
    pub sin_alpha: f64,
    #[series(skip)]
    pub diagnostics: Diagnostics,
}

/// Per-run totals of step diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiagnosticCounts {
    pub negative_measurement: usize,
    pub shortwave_clamped: usize,
    pub exceeded_clear_sky: usize,
}

impl DiagnosticCounts {
    pub fn record(&mut self, d: &Diagnostics) {
        self.negative_measurement += d.negative_measurement as usize;
        self.shortwave_clamped += d.shortwave_clamped as usize;
        self.exceeded_clear_sky += d.exceeded_clear_sky as usize;
    }

    /// Emit one warning per non-zero counter.
    pub fn log_summary(&self, n_steps: usize) {
        if self.exceeded_clear_sky > 0 {
            log::warn!(
                "measured shortwave exceeded clear-sky estimate {} out of {} times",
                self.exceeded_clear_sky,
                n_steps
            );
        }
        if self.shortwave_clamped > 0 {
            log::warn!(
                "estimated shortwave clamped to zero {} out of {} times",
                self.shortwave_clamped,
                n_steps
            );
        }
        if self.negative_measurement > 0 {
            log::warn!(
                "negative measured shortwave set to zero {} out of {} times",
                self.negative_measurement,
                n_steps
            );
        }
    }
}

/// Collected fluxes of a run plus their diagnostic counts.
#[derive(Debug, Clone, Default)]
pub struct RadiationSeries {
    pub fluxes: RadiationFluxesSeries,
    pub counts: DiagnosticCounts,
}

impl SeriesOps<RadiationFluxes> for RadiationSeries {
    fn with_capacity(n: usize) -> Self {
        Self {
            fluxes: RadiationFluxesSeries::with_capacity(n),
            counts: DiagnosticCounts::default(),
        }
    }

    fn push(&mut self, record: &RadiationFluxes) {
        self.fluxes.push(record);
        self.counts.record(&record.diagnostics);
    }

    fn len(&self) -> usize {
        self.fluxes.len()
    }

    fn is_empty(&self) -> bool {
        self.fluxes.is_empty()
    }
}
