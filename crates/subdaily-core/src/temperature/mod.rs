/// Sub-daily air temperature from daily extremes.
///
/// A piecewise cubic Hermite curve through the minima and maxima of
/// yesterday, today and tomorrow, sampled over today.
pub mod constants;
pub mod daylight;
pub mod params;
pub mod run;
