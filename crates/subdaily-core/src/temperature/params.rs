/// Daily temperature extremes and their nominal hours.
use crate::error::{ForcingError, Result};
use crate::spline::Knot;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyExtremes {
    /// Hour of day at which the minimum occurs [h].
    pub tmin_hour: u32,
    /// Daily minimum temperature [C].
    pub tmin: f64,
    /// Hour of day at which the maximum occurs [h].
    pub tmax_hour: u32,
    /// Daily maximum temperature [C].
    pub tmax: f64,
}

impl DailyExtremes {
    pub fn new(tmin_hour: u32, tmin: f64, tmax_hour: u32, tmax: f64) -> Self {
        Self {
            tmin_hour,
            tmin,
            tmax_hour,
            tmax,
        }
    }

    /// Check the hours fall inside a day of `hours_per_day` hours and are
    /// distinct, and the temperatures are finite.
    pub fn validate(&self, hours_per_day: u32) -> Result<()> {
        for (name, hour) in [("tmin_hour", self.tmin_hour), ("tmax_hour", self.tmax_hour)] {
            if hour >= hours_per_day {
                return Err(ForcingError::invalid(
                    name,
                    hour,
                    format!("must be in [0, {})", hours_per_day),
                ));
            }
        }
        if self.tmin_hour == self.tmax_hour {
            return Err(ForcingError::invalid(
                "tmax_hour",
                self.tmax_hour,
                "coincides with tmin_hour",
            ));
        }
        for (name, value) in [("tmin", self.tmin), ("tmax", self.tmax)] {
            if !value.is_finite() {
                return Err(ForcingError::invalid(name, value, "must be finite"));
            }
        }
        Ok(())
    }

    /// The day's two extrema as zero-slope knots, earliest first.
    ///
    /// `offset` is added to both hours, placing the day on the window's
    /// time axis.
    pub fn knots(&self, offset: f64) -> [Knot; 2] {
        let min = Knot::extremum(self.tmin_hour as f64 + offset, self.tmin);
        let max = Knot::extremum(self.tmax_hour as f64 + offset, self.tmax);
        if self.tmin_hour < self.tmax_hour {
            [min, max]
        } else {
            [max, min]
        }
    }
}
