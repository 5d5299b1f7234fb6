/// Disaggregate one summer day for a single grid cell and print the hourly
/// table. Set `RUST_LOG=debug` to see per-step fallbacks.
///
/// Usage: demo [config.json]
use subdaily_core::config::ForcingConfig;
use subdaily_core::forcing::Resolution;
use subdaily_core::radiation::geometry::Site;
use subdaily_core::radiation::run::{RadiationEstimator, RadiationForcing};
use subdaily_core::temperature::{daylight, run as temperature_run};
use subdaily_core::Result;

/// Saturation vapor pressure [kPa] at `t` [C].
fn saturation_vapor_pressure(t: f64) -> f64 {
    0.6108 * (17.27 * t / (t + 237.3)).exp()
}

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => ForcingConfig::load(path)?,
        None => ForcingConfig::default(),
    };
    let site = Site::new(47.5, -120.5, -120.0);
    let first_day = 171;

    let record = daylight::forcing_from_daylight(
        vec![9.0, 11.0, 10.0],
        vec![24.0, 27.0, 22.0],
        &site,
        first_day,
        &config,
    )?;
    let temperature = temperature_run::run(&record, Resolution::Hourly, &config)?;
    let today = temperature.day(1);
    log::info!(
        "tmin at hour {}, tmax at hour {}",
        record.tmin_hour[1],
        record.tmax_hour[1]
    );

    let vapor_pressure = saturation_vapor_pressure(record.tmin[1]);
    let day_of_year = (first_day + 1) as f64;
    let forcing: Vec<RadiationForcing> = today
        .iter()
        .enumerate()
        .map(|(h, &t)| {
            RadiationForcing::new(day_of_year, h as f64 + 1.0, t, vapor_pressure).with_cloud_fraction(0.3)
        })
        .collect();

    let mut estimator = RadiationEstimator::new(site, config);
    let radiation = estimator.estimate_series(&forcing)?;

    println!("{:>4} {:>8} {:>10} {:>10}", "hour", "temp", "shortwave", "longwave");
    for (h, t) in today.iter().enumerate() {
        println!(
            "{:>4} {:>8.2} {:>10.1} {:>10.1}",
            h, t, radiation.fluxes.shortwave[h], radiation.fluxes.longwave[h]
        );
    }
    Ok(())
}
