/// Air temperature disaggregation.
///
/// - `disaggregate_day()`: sub-daily series for the middle of three days
/// - `hourly_temperature()`: same, with the step taken from a `Resolution`
/// - `run()`: every day of a multi-day record
use super::constants::{N_DAYS, N_KNOTS, TARGET_DAY};
use super::params::DailyExtremes;
use crate::config::ForcingConfig;
use crate::error::{ForcingError, Result};
use crate::forcing::{DailyTemperatureForcing, Resolution};
use crate::spline::{self, Knot};

/// Periods where the interpolant left the target day's [tmin, tmax] range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeCheck {
    pub below_min: usize,
    pub above_max: usize,
}

impl RangeCheck {
    pub fn is_clean(&self) -> bool {
        self.below_min == 0 && self.above_max == 0
    }

    fn tally(values: &[f64], day: &DailyExtremes) -> Self {
        Self {
            below_min: values.iter().filter(|&&t| t < day.tmin).count(),
            above_max: values.iter().filter(|&&t| t > day.tmax).count(),
        }
    }

    fn add(&mut self, other: RangeCheck) {
        self.below_min += other.below_min;
        self.above_max += other.above_max;
    }
}

/// Disaggregated temperatures for one day.
#[derive(Debug, Clone)]
pub struct DayTemperature {
    /// One value per sub-daily period [C].
    pub values: Vec<f64>,
    pub range: RangeCheck,
}

/// Disaggregated temperatures for a multi-day record.
#[derive(Debug, Clone)]
pub struct TemperatureSeries {
    /// `days * steps_per_day` values, day-major [C].
    pub values: Vec<f64>,
    pub steps_per_day: usize,
    pub range: RangeCheck,
}

impl TemperatureSeries {
    /// The sub-daily values of day `d`.
    pub fn day(&self, d: usize) -> &[f64] {
        &self.values[d * self.steps_per_day..(d + 1) * self.steps_per_day]
    }

    pub fn n_days(&self) -> usize {
        self.values.len() / self.steps_per_day
    }
}

/// Lay out the six extrema of the window on one time axis.
///
/// Day `d` is shifted by `d * hours_per_day + step / 2`.
pub fn build_knots(days: &[DailyExtremes; N_DAYS], step_hours: u32, hours_per_day: u32) -> [Knot; N_KNOTS] {
    let half_step = 0.5 * step_hours as f64;
    let mut knots = [Knot::extremum(0.0, 0.0); N_KNOTS];
    for (d, day) in days.iter().enumerate() {
        let offset = (d as u32 * hours_per_day) as f64 + half_step;
        let pair = day.knots(offset);
        knots[2 * d] = pair[0];
        knots[2 * d + 1] = pair[1];
    }
    knots
}

/// Temperatures for each of `periods` sub-daily steps of the middle day.
///
/// The interpolant passes through every daily extremum with zero slope, so
/// the extrema are reproduced exactly and are local extrema of the series.
pub fn disaggregate_day(
    days: &[DailyExtremes; N_DAYS],
    step_hours: u32,
    periods: usize,
    hours_per_day: u32,
) -> Result<DayTemperature> {
    if step_hours == 0 || periods == 0 {
        return Err(ForcingError::invalid(
            "step_hours",
            step_hours,
            format!("step and period count must be positive (periods = {})", periods),
        ));
    }
    for day in days {
        day.validate(hours_per_day)?;
    }

    let knots = build_knots(days, step_hours, hours_per_day);
    let segments = spline::hermite(&knots)?;

    let start = 0.5 * step_hours as f64 + hours_per_day as f64;
    let values: Vec<f64> = (0..periods)
        .map(|i| spline::hermint(start + (i as u32 * step_hours) as f64, &knots, &segments))
        .collect();

    let range = RangeCheck::tally(&values, &days[TARGET_DAY]);
    if !range.is_clean() {
        log::debug!(
            "interpolated temperature outside [{}, {}]: {} below, {} above",
            days[TARGET_DAY].tmin,
            days[TARGET_DAY].tmax,
            range.below_min,
            range.above_max
        );
    }
    Ok(DayTemperature { values, range })
}

/// Disaggregate the middle day at the given resolution.
pub fn hourly_temperature(
    days: &[DailyExtremes; N_DAYS],
    resolution: Resolution,
    config: &ForcingConfig,
) -> Result<DayTemperature> {
    let periods = resolution.steps_per_day(config.hours_per_day)?;
    disaggregate_day(days, resolution.step_hours(), periods, config.hours_per_day)
}

/// Disaggregate every day of a record.
///
/// The first and last days stand in for their own missing neighbour.
pub fn run(
    forcing: &DailyTemperatureForcing,
    resolution: Resolution,
    config: &ForcingConfig,
) -> Result<TemperatureSeries> {
    let steps_per_day = resolution.steps_per_day(config.hours_per_day)?;
    let n = forcing.len();
    let day = |i: usize| {
        DailyExtremes::new(
            forcing.tmin_hour[i],
            forcing.tmin[i],
            forcing.tmax_hour[i],
            forcing.tmax[i],
        )
    };

    let mut values = Vec::with_capacity(n * steps_per_day);
    let mut range = RangeCheck::default();
    for d in 0..n {
        let window = [day(d.saturating_sub(1)), day(d), day((d + 1).min(n - 1))];
        let out = hourly_temperature(&window, resolution, config)?;
        range.add(out.range);
        values.extend_from_slice(&out.values);
    }

    if config.warn_out_of_range && !range.is_clean() {
        log::warn!(
            "estimated air temperature below daily minimum {} times and above daily maximum {} times out of {}",
            range.below_min,
            range.above_max,
            values.len()
        );
    }

    Ok(TemperatureSeries {
        values,
        steps_per_day,
        range,
    })
}
