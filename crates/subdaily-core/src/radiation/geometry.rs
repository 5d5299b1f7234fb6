//! Solar position and extraterrestrial irradiance.

use std::f64::consts::PI;

use super::constants::{
    APHELION_DAY, DAYS_PER_YEAR, DEG_PER_HOUR, MAX_DECLINATION_DEG, ORBIT_ECCENTRICITY,
    SOLSTICE_DAY,
};

const DEG: f64 = PI / 180.0;

/// Location of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    /// Latitude of the cell [deg].
    pub latitude: f64,
    /// Longitude of the cell [deg].
    pub longitude: f64,
    /// Longitude of the time zone's reference meridian [deg].
    pub time_zone_longitude: f64,
}

impl Site {
    pub fn new(latitude: f64, longitude: f64, time_zone_longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            time_zone_longitude,
        }
    }
}

/// Solar declination [rad].
pub fn declination(day_of_year: f64) -> f64 {
    MAX_DECLINATION_DEG * DEG * (2.0 * PI / DAYS_PER_YEAR * (SOLSTICE_DAY - day_of_year)).cos()
}

/// Relative earth-sun distance [-].
pub fn radius_factor(day_of_year: f64) -> f64 {
    1.0 + ORBIT_ECCENTRICITY * (2.0 * PI / DAYS_PER_YEAR * (APHELION_DAY - day_of_year)).cos()
}

/// Hour angle of the sun [deg].
///
/// The hour is first placed relative to the cell's local noon, shifted by
/// the longitude difference to the time-zone meridian. Hours strictly after
/// local noon and before the next local midnight, or strictly before local
/// midnight, use the `hour - 12` form; all others, including the exact
/// boundaries, use `hour + 12`. The two forms differ by 360 degrees.
pub fn hour_angle(hour: f64, site: &Site) -> f64 {
    let theta_l = site.time_zone_longitude;
    let theta_s = site.longitude;
    let hemisphere = if theta_l >= 0.0 { 1.0 } else { -1.0 };
    let shift = (theta_l - theta_s) * 24.0 / 360.0;
    let correction = hemisphere / DEG_PER_HOUR * (theta_s.abs() - theta_l.abs());

    let past_noon = hour > 12.0 + shift && hour < 24.0 + shift;
    if past_noon || hour < shift {
        (hour - 12.0 - correction) * DEG_PER_HOUR
    } else {
        (hour + 12.0 - correction) * DEG_PER_HOUR
    }
}

/// Per-call solar state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarGeometry {
    /// [rad]
    pub declination: f64,
    /// [deg]
    pub hour_angle: f64,
    /// Sine of the solar altitude [-].
    pub sin_alpha: f64,
    /// Relative earth-sun distance [-].
    pub radius: f64,
    /// Extraterrestrial irradiance on a horizontal plane [W/m2]. Not
    /// positive while the sun is below the horizon.
    pub extraterrestrial: f64,
}

impl SolarGeometry {
    /// Solar state at `hour` (already corrected for any solar-time offset)
    /// of `day_of_year`.
    pub fn compute(site: &Site, day_of_year: f64, hour: f64, solar_constant: f64) -> Self {
        let declination = declination(day_of_year);
        let tau = hour_angle(hour, site);
        let phi = site.latitude * DEG;
        let sin_alpha =
            declination.sin() * phi.sin() + declination.cos() * phi.cos() * (tau * DEG).cos();
        let radius = radius_factor(day_of_year);
        let extraterrestrial = solar_constant * sin_alpha / radius / radius;
        Self {
            declination,
            hour_angle: tau,
            sin_alpha,
            radius,
            extraterrestrial,
        }
    }

    pub fn is_daytime(&self) -> bool {
        self.extraterrestrial > 0.0
    }
}
