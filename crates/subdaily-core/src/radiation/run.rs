/// Radiation estimator orchestration.
///
/// - `step()`: one hour, returning the new carried state
/// - `RadiationEstimator`: per-cell object owning site, config and state
/// - `run()`: a forcing series, with a diagnostic summary
use super::fluxes::{Diagnostics, RadiationFluxes, RadiationSeries};
use super::geometry::{SolarGeometry, Site};
use super::processes;
use super::state::CloudState;
use crate::config::ForcingConfig;
use crate::error::{ForcingError, Result};
use crate::traits::{SeriesOps, StepEstimator};

/// Inputs for one hour. `None` marks a quantity to be estimated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiationForcing {
    pub day_of_year: f64,
    /// Nominal hour of the step [h].
    pub hour: f64,
    /// Air temperature [C].
    pub air_temp: f64,
    /// Vapor pressure [kPa].
    pub vapor_pressure: f64,
    /// Measured incoming shortwave [W/m2].
    pub shortwave: Option<f64>,
    /// Measured incoming longwave [W/m2].
    pub longwave: Option<f64>,
    /// Observed cloud fraction [-].
    pub cloud_fraction: Option<f64>,
}

impl RadiationForcing {
    /// Forcing with nothing measured; chain the `with_*` setters.
    pub fn new(day_of_year: f64, hour: f64, air_temp: f64, vapor_pressure: f64) -> Self {
        Self {
            day_of_year,
            hour,
            air_temp,
            vapor_pressure,
            shortwave: None,
            longwave: None,
            cloud_fraction: None,
        }
    }

    pub fn with_shortwave(mut self, shortwave: f64) -> Self {
        self.shortwave = Some(shortwave);
        self
    }

    pub fn with_longwave(mut self, longwave: f64) -> Self {
        self.longwave = Some(longwave);
        self
    }

    pub fn with_cloud_fraction(mut self, cloud_fraction: f64) -> Self {
        self.cloud_fraction = Some(cloud_fraction);
        self
    }
}

/// Which quantities a step derives, resolved once from the available inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Shortwave from cloud cover; longwave too if not measured.
    CloudCover { cloud_fraction: f64 },
    /// Cloud cover and longwave from measured shortwave. A supplied cloud
    /// fraction is only used at night.
    MeasuredShortwave {
        shortwave: f64,
        cloud_fraction: Option<f64>,
    },
    /// Shortwave and longwave both measured.
    MeasuredRadiation {
        shortwave: f64,
        cloud_fraction: Option<f64>,
    },
    /// Only longwave measured. Valid at night only, when shortwave is zero
    /// and the carried cloud fraction is reported.
    MeasuredLongwave,
}

fn missing_sources(forcing: &RadiationForcing) -> ForcingError {
    ForcingError::Configuration(format!(
        "to compute long and shortwave radiation, need cloud cover fraction or measured shortwave (day {}, hour {})",
        forcing.day_of_year, forcing.hour
    ))
}

impl Mode {
    /// Fails when none of shortwave, longwave and cloud fraction is
    /// supplied. A longwave-only forcing resolves, but `step` rejects it
    /// while the sun is up.
    pub fn resolve(forcing: &RadiationForcing) -> Result<Self> {
        match (forcing.shortwave, forcing.longwave, forcing.cloud_fraction) {
            (None, _, Some(cloud_fraction)) => Ok(Mode::CloudCover { cloud_fraction }),
            (Some(shortwave), None, cloud_fraction) => Ok(Mode::MeasuredShortwave {
                shortwave,
                cloud_fraction,
            }),
            (Some(shortwave), Some(_), cloud_fraction) => Ok(Mode::MeasuredRadiation {
                shortwave,
                cloud_fraction,
            }),
            (None, Some(_), None) => Ok(Mode::MeasuredLongwave),
            (None, None, None) => Err(missing_sources(forcing)),
        }
    }
}

/// Estimate one hour of radiation.
///
/// Returns the new carried state and the step's fluxes. The state changes
/// only when a cloud fraction is derived from measured shortwave.
pub fn step(
    state: &CloudState,
    forcing: &RadiationForcing,
    site: &Site,
    config: &ForcingConfig,
) -> Result<(CloudState, RadiationFluxes)> {
    let mode = Mode::resolve(forcing)?;
    let mut diagnostics = Diagnostics::default();
    let mut new_state = *state;
    let carried = state.last_cloud_fraction;

    // Measurements are attributed to the previous hour.
    let geometry = SolarGeometry::compute(
        site,
        forcing.day_of_year,
        forcing.hour - config.solar_time_offset,
        config.solar_constant,
    );

    let mode = match mode {
        Mode::MeasuredShortwave { shortwave, cloud_fraction } if shortwave < 0.0 => {
            diagnostics.negative_measurement = true;
            Mode::MeasuredShortwave { shortwave: 0.0, cloud_fraction }
        }
        Mode::MeasuredRadiation { shortwave, cloud_fraction } if shortwave < 0.0 => {
            diagnostics.negative_measurement = true;
            Mode::MeasuredRadiation { shortwave: 0.0, cloud_fraction }
        }
        other => other,
    };

    let (shortwave, cloud_fraction, clear_sky) = if geometry.is_daytime() {
        let i0 = geometry.extraterrestrial;
        let measured = matches!(
            mode,
            Mode::MeasuredShortwave { .. } | Mode::MeasuredRadiation { .. }
        );
        let clear_sky = if measured && config.measured_shortwave_uses_extraterrestrial {
            i0
        } else {
            processes::clear_sky_irradiance(i0, geometry.sin_alpha)
        };

        match mode {
            Mode::CloudCover { cloud_fraction } => {
                let mut sw = processes::shortwave_from_cloud(
                    clear_sky,
                    cloud_fraction,
                    config.shortwave_cloud_divisor,
                );
                if sw < 0.0 {
                    diagnostics.shortwave_clamped = true;
                    sw = 0.0;
                }
                (sw, cloud_fraction, clear_sky)
            }
            Mode::MeasuredShortwave { shortwave, .. } => {
                if shortwave <= clear_sky {
                    let f = processes::cloud_from_shortwave(clear_sky, shortwave);
                    new_state.last_cloud_fraction = f;
                    (shortwave, f, clear_sky)
                } else {
                    diagnostics.exceeded_clear_sky = true;
                    log::debug!(
                        "measured shortwave {:.1} exceeds clear-sky {:.1} on day {} hour {}; using carried cloud fraction {:.3}",
                        shortwave,
                        clear_sky,
                        forcing.day_of_year,
                        forcing.hour,
                        carried
                    );
                    (shortwave, carried, clear_sky)
                }
            }
            Mode::MeasuredRadiation { shortwave, cloud_fraction } => {
                (shortwave, cloud_fraction.unwrap_or(carried), clear_sky)
            }
            Mode::MeasuredLongwave => return Err(missing_sources(forcing)),
        }
    } else {
        match mode {
            Mode::CloudCover { cloud_fraction } => (0.0, cloud_fraction, 0.0),
            Mode::MeasuredShortwave { shortwave, cloud_fraction }
            | Mode::MeasuredRadiation { shortwave, cloud_fraction } => {
                (shortwave, cloud_fraction.unwrap_or(carried), 0.0)
            }
            Mode::MeasuredLongwave => (0.0, carried, 0.0),
        }
    };

    let longwave = match forcing.longwave {
        Some(lw) => lw,
        None => processes::longwave(cloud_fraction, forcing.vapor_pressure, forcing.air_temp, config),
    };

    let fluxes = RadiationFluxes {
        shortwave,
        longwave,
        cloud_fraction,
        extraterrestrial: geometry.extraterrestrial,
        clear_sky,
        sin_alpha: geometry.sin_alpha,
        diagnostics,
    };
    Ok((new_state, fluxes))
}

/// Run-constant data for one grid cell.
#[derive(Debug, Clone)]
pub struct RadiationContext {
    pub site: Site,
    pub config: ForcingConfig,
}

/// Marker type for the radiation `StepEstimator` implementation.
pub struct HourlyRadiation;

impl StepEstimator for HourlyRadiation {
    const NAME: &'static str = "HourlyRadiation";
    type State = CloudState;
    type Forcing = RadiationForcing;
    type Output = RadiationFluxes;
    type Series = RadiationSeries;
    type Context = RadiationContext;

    fn initialize_state(_context: &Self::Context) -> Self::State {
        CloudState::default()
    }

    fn step(
        state: &Self::State,
        forcing: &Self::Forcing,
        context: &Self::Context,
    ) -> Result<(Self::State, Self::Output)> {
        step(state, forcing, &context.site, &context.config)
    }
}

/// Run the estimator over a forcing series, logging a summary of any
/// diagnostic events. Returns the series and the final carried state.
pub fn run(
    forcing: &[RadiationForcing],
    initial_state: Option<&CloudState>,
    context: &RadiationContext,
) -> Result<(RadiationSeries, CloudState)> {
    let (series, state) = HourlyRadiation::run(forcing, initial_state, context)?;
    series.counts.log_summary(series.len());
    Ok((series, state))
}

/// Per-cell radiation estimator.
///
/// Owns the carried cloud fraction, so each grid cell needs its own
/// instance; instances share nothing.
#[derive(Debug, Clone)]
pub struct RadiationEstimator {
    context: RadiationContext,
    state: CloudState,
}

impl RadiationEstimator {
    pub fn new(site: Site, config: ForcingConfig) -> Self {
        Self::with_state(site, config, CloudState::default())
    }

    pub fn with_state(site: Site, config: ForcingConfig, state: CloudState) -> Self {
        Self {
            context: RadiationContext { site, config },
            state,
        }
    }

    pub fn site(&self) -> &Site {
        &self.context.site
    }

    pub fn config(&self) -> &ForcingConfig {
        &self.context.config
    }

    pub fn state(&self) -> &CloudState {
        &self.state
    }

    /// Estimate one hour and advance the carried state. On error the state
    /// is left untouched.
    pub fn estimate(&mut self, forcing: &RadiationForcing) -> Result<RadiationFluxes> {
        let (state, fluxes) = step(&self.state, forcing, &self.context.site, &self.context.config)?;
        self.state = state;
        Ok(fluxes)
    }

    /// Estimate a series of hours, continuing from the current state.
    pub fn estimate_series(&mut self, forcing: &[RadiationForcing]) -> Result<RadiationSeries> {
        let (series, state) = run(forcing, Some(&self.state), &self.context)?;
        self.state = state;
        Ok(series)
    }
}
