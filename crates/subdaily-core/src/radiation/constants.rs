//! Radiation numerical constants.
//!
//! Physical constants default the matching `ForcingConfig` fields; the
//! empirical coefficients are fixed parts of the formulas (Bras, 1990,
//! eqs. 2-21 to 2-47).

/// Solar constant [W/m2].
pub const SOLAR_CONSTANT: f64 = 1353.0;

/// Stefan-Boltzmann constant [W/m2/K4].
pub const STEFAN_BOLTZMANN: f64 = 5.6696e-8;

/// Divisor applied to estimated longwave radiation [-].
pub const LONGWAVE_CORRECTION: f64 = 1.0;

/// Offset from Celsius to Kelvin.
pub const KELVIN: f64 = 273.15;

/// Shift of the nominal hour so a measurement is attributed to the
/// previous hour [h].
pub const SOLAR_TIME_OFFSET: f64 = 0.5;

// -- Solar geometry --

/// Maximum solar declination [deg].
pub const MAX_DECLINATION_DEG: f64 = 23.45;

/// Day of year of the northern summer solstice.
pub const SOLSTICE_DAY: f64 = 172.0;

/// Day of year of the earth-sun distance maximum.
pub const APHELION_DAY: f64 = 186.0;

/// Amplitude of the earth-sun radius correction [-].
pub const ORBIT_ECCENTRICITY: f64 = 0.017;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Degrees of hour angle per hour.
pub const DEG_PER_HOUR: f64 = 15.0;

// -- Clear-sky transmission --

pub const AIR_MASS_COEF: f64 = 0.15;
pub const AIR_MASS_OFFSET: f64 = 3.885;
pub const AIR_MASS_EXPONENT: f64 = -1.253;
pub const TRANSMISSION_BASE: f64 = 0.128;
pub const TRANSMISSION_LOG_COEF: f64 = 0.054;

// -- Cloud effects --

/// Shortwave attenuation per squared cloud fraction [-].
pub const CLOUD_SHORTWAVE_ATTENUATION: f64 = 0.65;

/// Longwave enhancement per squared cloud fraction [-].
pub const CLOUD_LONGWAVE_ENHANCEMENT: f64 = 0.17;

/// Default divisor on the squared cloud fraction in the shortwave formula.
pub const SHORTWAVE_CLOUD_DIVISOR: f64 = 100.0;

// -- Clear-sky emissivity --

pub const EMISSIVITY_BASE: f64 = 0.740;

/// Emissivity gain per mb of vapor pressure.
pub const EMISSIVITY_VAPOR_COEF: f64 = 0.0049;

/// Conversion from kPa to mb.
pub const KPA_TO_MB: f64 = 10.0;
