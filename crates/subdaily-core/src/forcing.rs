use crate::error::{ForcingError, Result};

/// Sub-daily step length of the disaggregated output.
///
/// Ordered from finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Resolution {
    Hourly,
    ThreeHourly,
    SixHourly,
    Daily,
}

impl Resolution {
    /// Step length in hours.
    pub fn step_hours(self) -> u32 {
        match self {
            Resolution::Hourly => 1,
            Resolution::ThreeHourly => 3,
            Resolution::SixHourly => 6,
            Resolution::Daily => 24,
        }
    }

    pub fn from_step_hours(step: u32) -> Result<Self> {
        match step {
            1 => Ok(Resolution::Hourly),
            3 => Ok(Resolution::ThreeHourly),
            6 => Ok(Resolution::SixHourly),
            24 => Ok(Resolution::Daily),
            _ => Err(ForcingError::invalid(
                "step_hours",
                step,
                "supported steps are 1, 3, 6 and 24 hours",
            )),
        }
    }

    /// Number of steps in a day of `hours_per_day` hours.
    ///
    /// Errors if the step does not divide the day evenly.
    pub fn steps_per_day(self, hours_per_day: u32) -> Result<usize> {
        let step = self.step_hours();
        if hours_per_day == 0 || hours_per_day % step != 0 {
            return Err(ForcingError::invalid(
                "hours_per_day",
                hours_per_day,
                format!("not a positive multiple of the {} h step", step),
            ));
        }
        Ok((hours_per_day / step) as usize)
    }
}

/// Validated daily temperature record for one grid cell.
///
/// All arrays must have the same length. NaN values are rejected.
#[derive(Debug, Clone)]
pub struct DailyTemperatureForcing {
    pub tmin: Vec<f64>,
    pub tmax: Vec<f64>,
    pub tmin_hour: Vec<u32>,
    pub tmax_hour: Vec<u32>,
}

impl DailyTemperatureForcing {
    /// Create a new record with validation.
    ///
    /// Validates:
    /// - all arrays have the same, non-zero length
    /// - no NaN temperatures
    /// - tmax is not below tmin on any day
    pub fn new(
        tmin: Vec<f64>,
        tmax: Vec<f64>,
        tmin_hour: Vec<u32>,
        tmax_hour: Vec<u32>,
    ) -> Result<Self> {
        if tmin.is_empty() {
            return Err(ForcingError::invalid("tmin", "[]", "array is empty"));
        }
        let n = tmin.len();
        for (name, len) in [
            ("tmax", tmax.len()),
            ("tmin_hour", tmin_hour.len()),
            ("tmax_hour", tmax_hour.len()),
        ] {
            if len != n {
                return Err(ForcingError::invalid(
                    name,
                    format!("length {}", len),
                    format!("does not match tmin length {}", n),
                ));
            }
        }
        if let Some(i) = tmin.iter().position(|v| v.is_nan()) {
            return Err(ForcingError::invalid("tmin", "NaN", format!("NaN value on day {}", i)));
        }
        if let Some(i) = tmax.iter().position(|v| v.is_nan()) {
            return Err(ForcingError::invalid("tmax", "NaN", format!("NaN value on day {}", i)));
        }
        if let Some(i) = tmin.iter().zip(&tmax).position(|(lo, hi)| hi < lo) {
            return Err(ForcingError::invalid(
                "tmax",
                tmax[i],
                format!("below tmin {} on day {}", tmin[i], i),
            ));
        }
        Ok(Self {
            tmin,
            tmax,
            tmin_hour,
            tmax_hour,
        })
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.tmin.len()
    }

    /// Returns `true` if there are no days.
    pub fn is_empty(&self) -> bool {
        self.tmin.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Resolution --

    #[test]
    fn resolution_ordering() {
        assert!(Resolution::Hourly < Resolution::ThreeHourly);
        assert!(Resolution::SixHourly < Resolution::Daily);
    }

    #[test]
    fn steps_per_day() {
        assert_eq!(Resolution::Hourly.steps_per_day(24).unwrap(), 24);
        assert_eq!(Resolution::ThreeHourly.steps_per_day(24).unwrap(), 8);
        assert_eq!(Resolution::Daily.steps_per_day(24).unwrap(), 1);
    }

    #[test]
    fn uneven_step_rejected() {
        assert!(Resolution::SixHourly.steps_per_day(21).is_err());
        assert!(Resolution::Hourly.steps_per_day(0).is_err());
    }

    #[test]
    fn from_step_hours() {
        assert_eq!(Resolution::from_step_hours(3).unwrap(), Resolution::ThreeHourly);
        assert!(Resolution::from_step_hours(5).is_err());
    }

    // -- DailyTemperatureForcing --

    #[test]
    fn valid_record() {
        let f = DailyTemperatureForcing::new(
            vec![1.0, 2.0],
            vec![10.0, 12.0],
            vec![6, 6],
            vec![15, 15],
        )
        .unwrap();
        assert_eq!(f.len(), 2);
        assert!(!f.is_empty());
    }

    #[test]
    fn rejects_empty() {
        let err = DailyTemperatureForcing::new(vec![], vec![], vec![], vec![]).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = DailyTemperatureForcing::new(vec![1.0, 2.0], vec![10.0], vec![6, 6], vec![15, 15])
            .unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn rejects_nan() {
        let err =
            DailyTemperatureForcing::new(vec![1.0, f64::NAN], vec![10.0, 12.0], vec![6, 6], vec![15, 15])
                .unwrap_err();
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn rejects_inverted_extremes() {
        let err = DailyTemperatureForcing::new(vec![5.0], vec![4.0], vec![6], vec![15]).unwrap_err();
        assert!(err.to_string().contains("below tmin"));
    }
}
