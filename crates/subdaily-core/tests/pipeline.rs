//! End-to-end disaggregation of a few days for independent grid cells.

use std::thread;

use subdaily_core::config::ForcingConfig;
use subdaily_core::forcing::{DailyTemperatureForcing, Resolution};
use subdaily_core::radiation::geometry::Site;
use subdaily_core::radiation::run::{HourlyRadiation, RadiationContext, RadiationEstimator, RadiationForcing};
use subdaily_core::radiation::state::CloudState;
use subdaily_core::temperature::{daylight, run as temperature_run};
use subdaily_core::traits::{EstimatorState, StepEstimator};
use subdaily_core::ForcingError;

fn record(site: &Site, config: &ForcingConfig) -> DailyTemperatureForcing {
    daylight::forcing_from_daylight(
        vec![8.0, 10.0, 7.5, 9.0],
        vec![22.0, 26.0, 19.0, 24.0],
        site,
        170,
        config,
    )
    .unwrap()
}

/// Hourly radiation forcing built from disaggregated temperature, with
/// measured shortwave on the even days and cloud cover on the odd ones.
fn hourly_forcing(temperature: &[f64], steps_per_day: usize, first_day: u32) -> Vec<RadiationForcing> {
    temperature
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            let day = i / steps_per_day;
            let hour = (i % steps_per_day) as f64 + 1.0;
            let f = RadiationForcing::new((first_day as usize + day) as f64, hour, t, 1.1);
            if day % 2 == 0 {
                let bell = (-(hour - 13.0).powi(2) / 18.0).exp();
                f.with_shortwave(650.0 * bell)
            } else {
                f.with_cloud_fraction(0.4)
            }
        })
        .collect()
}

fn run_cell(site: Site, config: ForcingConfig) -> (Vec<f64>, Vec<f64>, Vec<f64>, CloudState) {
    let rec = record(&site, &config);
    let temperature = temperature_run::run(&rec, Resolution::Hourly, &config).unwrap();
    let forcing = hourly_forcing(&temperature.values, temperature.steps_per_day, 170);
    let mut estimator = RadiationEstimator::new(site, config);
    let series = estimator.estimate_series(&forcing).unwrap();
    (
        temperature.values,
        series.fluxes.shortwave,
        series.fluxes.longwave,
        *estimator.state(),
    )
}

#[test]
fn full_record_has_one_value_per_hour() {
    let config = ForcingConfig::default();
    let (temperature, shortwave, longwave, _) = run_cell(Site::new(47.5, -120.5, -120.0), config);
    assert_eq!(temperature.len(), 4 * 24);
    assert_eq!(shortwave.len(), 4 * 24);
    assert!(shortwave.iter().all(|&sw| sw >= 0.0));
    assert!(longwave.iter().all(|&lw| lw > 200.0 && lw < 500.0));
}

#[test]
fn cells_in_parallel_match_sequential() {
    let sites = [
        Site::new(47.5, -120.5, -120.0),
        Site::new(46.0, -118.2, -120.0),
        Site::new(62.0, 25.0, 30.0),
    ];
    let sequential: Vec<_> = sites
        .iter()
        .map(|&s| run_cell(s, ForcingConfig::default()))
        .collect();

    let handles: Vec<_> = sites
        .iter()
        .map(|&s| thread::spawn(move || run_cell(s, ForcingConfig::default())))
        .collect();
    let parallel: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(sequential, parallel);
}

#[test]
fn trait_run_matches_estimator() {
    let config = ForcingConfig::default();
    let site = Site::new(47.5, -120.5, -120.0);
    let rec = record(&site, &config);
    let temperature = temperature_run::run(&rec, Resolution::Hourly, &config).unwrap();
    let forcing = hourly_forcing(&temperature.values, 24, 170);

    let context = RadiationContext {
        site,
        config: config.clone(),
    };
    let (series, state) = HourlyRadiation::run(&forcing, None, &context).unwrap();

    let mut estimator = RadiationEstimator::new(site, config);
    let via_estimator = estimator.estimate_series(&forcing).unwrap();

    assert_eq!(series.fluxes.shortwave, via_estimator.fluxes.shortwave);
    assert_eq!(series.fluxes.cloud_fraction, via_estimator.fluxes.cloud_fraction);
    assert_eq!(state, *estimator.state());
}

#[test]
fn state_restart_continues_run() {
    let config = ForcingConfig::default();
    let site = Site::new(47.5, -120.5, -120.0);
    let rec = record(&site, &config);
    let temperature = temperature_run::run(&rec, Resolution::Hourly, &config).unwrap();
    let forcing = hourly_forcing(&temperature.values, 24, 170);
    let (first, second) = forcing.split_at(30);

    let mut whole = RadiationEstimator::new(site, config.clone());
    let all = whole.estimate_series(&forcing).unwrap();

    let mut head = RadiationEstimator::new(site, config.clone());
    head.estimate_series(first).unwrap();
    let saved = head.state().to_vec();

    let mut tail = RadiationEstimator::with_state(site, config, CloudState::from_slice(&saved).unwrap());
    let rest = tail.estimate_series(second).unwrap();

    assert_eq!(&all.fluxes.cloud_fraction[30..], &rest.fluxes.cloud_fraction[..]);
}

#[test]
fn missing_cloud_source_surfaces_as_configuration_error() {
    let mut estimator = RadiationEstimator::new(Site::new(47.5, -120.5, -120.0), ForcingConfig::default());
    let forcing = vec![
        RadiationForcing::new(172.0, 12.0, 20.0, 1.0).with_cloud_fraction(0.1),
        RadiationForcing::new(172.0, 13.0, 20.0, 1.0).with_longwave(320.0),
    ];
    let err = estimator.estimate_series(&forcing).unwrap_err();
    assert!(matches!(err, ForcingError::Configuration(_)));
}

#[test]
fn config_file_drives_three_hourly_run() {
    let path = std::env::temp_dir().join(format!("subdaily-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "shortwave_cloud_divisor": 1.0, "warn_out_of_range": false }"#).unwrap();
    let config = ForcingConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.shortwave_cloud_divisor, 1.0);
    let site = Site::new(47.5, -120.5, -120.0);
    let rec = record(&site, &config);
    let temperature = temperature_run::run(&rec, Resolution::ThreeHourly, &config).unwrap();
    assert_eq!(temperature.steps_per_day, 8);
    assert_eq!(temperature.n_days(), 4);
}
