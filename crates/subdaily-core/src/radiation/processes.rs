/// Radiation process functions.
///
/// Pure functions for the empirical formulas combined by the estimator.
use super::constants::{
    AIR_MASS_COEF, AIR_MASS_EXPONENT, AIR_MASS_OFFSET, CLOUD_LONGWAVE_ENHANCEMENT,
    CLOUD_SHORTWAVE_ATTENUATION, EMISSIVITY_BASE, EMISSIVITY_VAPOR_COEF, KPA_TO_MB,
    TRANSMISSION_BASE, TRANSMISSION_LOG_COEF,
};
use crate::config::ForcingConfig;

/// Optical air mass for the given sine of solar altitude.
///
/// Only meaningful for a sun above the horizon.
pub fn optical_air_mass(sin_alpha: f64) -> f64 {
    1.0 / (sin_alpha + AIR_MASS_COEF * (sin_alpha.asin() + AIR_MASS_OFFSET).powf(AIR_MASS_EXPONENT))
}

/// Clear-sky irradiance at the surface [W/m2].
pub fn clear_sky_irradiance(extraterrestrial: f64, sin_alpha: f64) -> f64 {
    let m = optical_air_mass(sin_alpha);
    extraterrestrial * (-2.0 * (TRANSMISSION_BASE - TRANSMISSION_LOG_COEF * m.log10()) * m).exp()
}

/// Shortwave attenuated by cloud cover [W/m2]. May be negative for large
/// cloud fractions with a small divisor; the caller clamps.
pub fn shortwave_from_cloud(clear_sky: f64, cloud_fraction: f64, divisor: f64) -> f64 {
    (1.0 - CLOUD_SHORTWAVE_ATTENUATION * cloud_fraction * cloud_fraction / divisor) * clear_sky
}

/// Cloud fraction implied by a measured shortwave not above `clear_sky`.
pub fn cloud_from_shortwave(clear_sky: f64, shortwave: f64) -> f64 {
    ((1.0 - shortwave / clear_sky) / CLOUD_SHORTWAVE_ATTENUATION).sqrt()
}

/// Incoming longwave radiation [W/m2].
///
/// Clear-sky emissivity from vapor pressure [kPa], enhanced by cloud cover,
/// applied to the air temperature [C].
pub fn longwave(cloud_fraction: f64, vapor_pressure: f64, air_temp: f64, config: &ForcingConfig) -> f64 {
    let cloud = 1.0 + CLOUD_LONGWAVE_ENHANCEMENT * cloud_fraction * cloud_fraction;
    let emissivity = EMISSIVITY_BASE + EMISSIVITY_VAPOR_COEF * vapor_pressure * KPA_TO_MB;
    cloud * emissivity * config.stefan_boltzmann * (air_temp + config.kelvin).powi(4)
        / config.longwave_correction
}
