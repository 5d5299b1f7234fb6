/// Air temperature disaggregation constants.
///
/// Fixed sizes of the three-day knot window and the defaults used when the
/// extreme hours cannot be derived from daylight.

/// Days in the knot window: yesterday, today, tomorrow.
pub const N_DAYS: usize = 3;

/// Two extrema per day.
pub const N_KNOTS: usize = 2 * N_DAYS;

/// Index of the day being disaggregated within the window.
pub const TARGET_DAY: usize = 1;

/// Hours per day.
pub const HOURS_PER_DAY: u32 = 24;

/// Fraction of the sunrise-to-sunset span after which Tmax occurs.
pub const TMAX_DAYLIGHT_FRACTION: f64 = 0.67;

/// Hour of Tmin when there is no daylight.
pub const DEFAULT_TMIN_HOUR: u32 = 6;

/// Hour of Tmax when there is no daylight.
pub const DEFAULT_TMAX_HOUR: u32 = 15;
