/// Timing of the daily extremes from the length of the day.
///
/// Tmin is placed just before sunrise and Tmax two thirds of the way
/// from sunrise to sunset.
use super::constants::TMAX_DAYLIGHT_FRACTION;
use crate::config::ForcingConfig;
use crate::error::Result;
use crate::forcing::DailyTemperatureForcing;
use crate::radiation::constants::DAYS_PER_YEAR;
use crate::radiation::geometry::{SolarGeometry, Site};

/// Extraterrestrial irradiance at the midpoint of each hour of a day,
/// zero while the sun is down [W/m2].
pub fn daylight_profile(site: &Site, day_of_year: f64, config: &ForcingConfig) -> Vec<f64> {
    (0..config.hours_per_day)
        .map(|h| {
            let g = SolarGeometry::compute(site, day_of_year, h as f64 + 0.5, config.solar_constant);
            g.extraterrestrial.max(0.0)
        })
        .collect()
}

/// `(tmin_hour, tmax_hour)` for a day with the given hourly radiation.
///
/// Falls back to the configured defaults when no hour has sunlight.
pub fn extreme_hours(hourly_radiation: &[f64], config: &ForcingConfig) -> (u32, u32) {
    let sunrise = hourly_radiation.iter().position(|&r| r > 0.0);
    let sunset = hourly_radiation.iter().rposition(|&r| r > 0.0);
    let (sunrise, sunset) = match (sunrise, sunset) {
        (Some(rise), Some(set)) => (rise as u32, set as u32),
        _ => return (config.default_tmin_hour, config.default_tmax_hour),
    };

    let tmin_hour = sunrise.saturating_sub(1);
    let mut tmax_hour = sunrise + (TMAX_DAYLIGHT_FRACTION * (sunset - sunrise) as f64) as u32;
    if tmax_hour == tmin_hour {
        tmax_hour = tmin_hour + 1;
    }
    (tmin_hour, tmax_hour)
}

/// Build a temperature record whose extreme hours follow the daylight at
/// `site`, starting on `first_day_of_year` and wrapping at year end.
pub fn forcing_from_daylight(
    tmin: Vec<f64>,
    tmax: Vec<f64>,
    site: &Site,
    first_day_of_year: u32,
    config: &ForcingConfig,
) -> Result<DailyTemperatureForcing> {
    let days_per_year = DAYS_PER_YEAR as u32;
    let (tmin_hour, tmax_hour): (Vec<u32>, Vec<u32>) = (0..tmin.len() as u32)
        .map(|i| {
            let doy = (first_day_of_year + i).saturating_sub(1) % days_per_year + 1;
            let profile = daylight_profile(site, doy as f64, config);
            extreme_hours(&profile, config)
        })
        .unzip();
    DailyTemperatureForcing::new(tmin, tmax, tmin_hour, tmax_hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(lit: std::ops::RangeInclusive<usize>) -> Vec<f64> {
        (0..24).map(|h| if lit.contains(&h) { 500.0 } else { 0.0 }).collect()
    }

    // -- extreme_hours --

    #[test]
    fn hours_from_sunrise_and_sunset() {
        let c = ForcingConfig::default();
        assert_eq!(extreme_hours(&profile(5..=19), &c), (4, 14));
    }

    #[test]
    fn polar_night_uses_defaults() {
        let c = ForcingConfig::default();
        assert_eq!(extreme_hours(&[0.0; 24], &c), (6, 15));
    }

    #[test]
    fn sunrise_at_midnight_keeps_hours_apart() {
        let c = ForcingConfig::default();
        let (lo, hi) = extreme_hours(&profile(0..=0), &c);
        assert_eq!(lo, 0);
        assert_eq!(hi, 1);
    }

    // -- daylight_profile --

    #[test]
    fn equinox_on_equator_has_twelve_lit_hours() {
        let c = ForcingConfig::default();
        let p = daylight_profile(&Site::new(0.0, 0.0, 0.0), 80.0, &c);
        assert_eq!(p.len(), 24);
        assert_eq!(p.iter().filter(|&&r| r > 0.0).count(), 12);
        assert_eq!(extreme_hours(&p, &c), (5, 13));
    }

    #[test]
    fn profile_is_never_negative() {
        let c = ForcingConfig::default();
        let p = daylight_profile(&Site::new(60.0, 10.0, 15.0), 20.0, &c);
        assert!(p.iter().all(|&r| r >= 0.0));
    }

    // -- forcing_from_daylight --

    #[test]
    fn record_wraps_year_end() {
        let c = ForcingConfig::default();
        let site = Site::new(47.5, -120.5, -120.0);
        let f = forcing_from_daylight(vec![0.0; 3], vec![8.0; 3], &site, 365, &c).unwrap();
        assert_eq!(f.len(), 3);
        // Days 365, 1 and 2 are nearly identical in day length.
        assert!((f.tmin_hour[0] as i32 - f.tmin_hour[1] as i32).abs() <= 1);
        assert!(f.tmax_hour.iter().zip(&f.tmin_hour).all(|(hi, lo)| hi > lo));
    }

    #[test]
    fn summer_days_start_earlier() {
        let c = ForcingConfig::default();
        let site = Site::new(47.5, -120.5, -120.0);
        let f = forcing_from_daylight(vec![0.0, 10.0], vec![5.0, 25.0], &site, 355, &c).unwrap();
        let summer = forcing_from_daylight(vec![10.0], vec![25.0], &site, 172, &c).unwrap();
        assert!(summer.tmin_hour[0] < f.tmin_hour[0]);
    }
}
