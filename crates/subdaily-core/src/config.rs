//! Run configuration.
//!
//! Every constant the disaggregation routines consume from their environment
//! lives here, so a driver can override it from a JSON file instead of
//! recompiling. Missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ForcingError, Result};
use crate::radiation::constants as rad;
use crate::temperature::constants as temp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForcingConfig {
    /// Hours per day [h].
    pub hours_per_day: u32,
    /// Subtracted from the nominal hour before solar geometry [h].
    pub solar_time_offset: f64,
    /// Solar constant [W/m2].
    pub solar_constant: f64,
    /// Stefan-Boltzmann constant [W/m2/K4].
    pub stefan_boltzmann: f64,
    /// Divisor applied to estimated longwave [-].
    pub longwave_correction: f64,
    /// Celsius to Kelvin offset.
    pub kelvin: f64,
    /// Divisor on the squared cloud fraction when estimating shortwave.
    /// 100 reproduces the historical scaling; 1 is the textbook form.
    pub shortwave_cloud_divisor: f64,
    /// Use extraterrestrial irradiance as the clear-sky reference whenever
    /// shortwave is measured.
    pub measured_shortwave_uses_extraterrestrial: bool,
    /// Log a warning when interpolated temperatures leave the day's range.
    pub warn_out_of_range: bool,
    /// Tmin hour used when a day has no daylight.
    pub default_tmin_hour: u32,
    /// Tmax hour used when a day has no daylight.
    pub default_tmax_hour: u32,
}

impl Default for ForcingConfig {
    fn default() -> Self {
        Self {
            hours_per_day: temp::HOURS_PER_DAY,
            solar_time_offset: rad::SOLAR_TIME_OFFSET,
            solar_constant: rad::SOLAR_CONSTANT,
            stefan_boltzmann: rad::STEFAN_BOLTZMANN,
            longwave_correction: rad::LONGWAVE_CORRECTION,
            kelvin: rad::KELVIN,
            shortwave_cloud_divisor: rad::SHORTWAVE_CLOUD_DIVISOR,
            measured_shortwave_uses_extraterrestrial: true,
            warn_out_of_range: true,
            default_tmin_hour: temp::DEFAULT_TMIN_HOUR,
            default_tmax_hour: temp::DEFAULT_TMAX_HOUR,
        }
    }
}

impl ForcingConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.hours_per_day == 0 {
            return Err(ForcingError::invalid("hours_per_day", 0, "must be positive"));
        }
        let positive = [
            ("solar_constant", self.solar_constant),
            ("stefan_boltzmann", self.stefan_boltzmann),
            ("longwave_correction", self.longwave_correction),
            ("shortwave_cloud_divisor", self.shortwave_cloud_divisor),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ForcingError::invalid(name, value, "must be positive and finite"));
            }
        }
        if !self.solar_time_offset.is_finite() {
            return Err(ForcingError::invalid(
                "solar_time_offset",
                self.solar_time_offset,
                "must be finite",
            ));
        }
        for (name, hour) in [
            ("default_tmin_hour", self.default_tmin_hour),
            ("default_tmax_hour", self.default_tmax_hour),
        ] {
            if hour >= self.hours_per_day {
                return Err(ForcingError::invalid(
                    name,
                    hour,
                    format!("must be below hours_per_day ({})", self.hours_per_day),
                ));
            }
        }
        if self.default_tmin_hour == self.default_tmax_hour {
            return Err(ForcingError::invalid(
                "default_tmax_hour",
                self.default_tmax_hour,
                "must differ from default_tmin_hour",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = ForcingConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.hours_per_day, 24);
        assert_eq!(c.solar_constant, 1353.0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c = ForcingConfig::from_json(r#"{ "shortwave_cloud_divisor": 1.0 }"#).unwrap();
        assert_eq!(c.shortwave_cloud_divisor, 1.0);
        assert_eq!(c.kelvin, 273.15);
        assert!(c.measured_shortwave_uses_extraterrestrial);
    }

    #[test]
    fn rejects_zero_hours_per_day() {
        let err = ForcingConfig::from_json(r#"{ "hours_per_day": 0 }"#).unwrap_err();
        assert!(matches!(err, ForcingError::InvalidParameter { name: "hours_per_day", .. }));
    }

    #[test]
    fn rejects_negative_solar_constant() {
        let c = ForcingConfig {
            solar_constant: -1.0,
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_equal_default_hours() {
        let c = ForcingConfig {
            default_tmin_hour: 9,
            default_tmax_hour: 9,
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ForcingConfig::from_json("{ hours_per_day: ").unwrap_err();
        assert!(matches!(err, ForcingError::Parse(_)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = ForcingConfig::load("/nonexistent/subdaily.json").unwrap_err();
        assert!(matches!(err, ForcingError::Io(_)));
    }

    #[test]
    fn serde_roundtrip_preserves_overrides() {
        let c = ForcingConfig {
            solar_time_offset: 0.0,
            warn_out_of_range: false,
            ..Default::default()
        };
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(ForcingConfig::from_json(&json).unwrap(), c);
    }
}
