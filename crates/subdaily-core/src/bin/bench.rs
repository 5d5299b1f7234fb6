/// Core benchmarks for the temperature and radiation routines.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for data
/// generation, and std::hint::black_box to keep results alive.
use std::hint::black_box;
use std::time::{Duration, Instant};

use subdaily_core::config::ForcingConfig;
use subdaily_core::forcing::{DailyTemperatureForcing, Resolution};
use subdaily_core::radiation::geometry::Site;
use subdaily_core::radiation::run::{RadiationEstimator, RadiationForcing};
use subdaily_core::temperature::run as temperature_run;

const REPEATS: usize = 7;

struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as f64 / (1u64 << 31) as f64
    }
}

fn make_temperature(n_days: usize, seed: u64) -> DailyTemperatureForcing {
    let mut rng = Lcg(seed);
    let tmin: Vec<f64> = (0..n_days).map(|_| -10.0 + rng.next_f64() * 20.0).collect();
    let tmax: Vec<f64> = tmin.iter().map(|lo| lo + 2.0 + rng.next_f64() * 15.0).collect();
    DailyTemperatureForcing::new(tmin, tmax, vec![6; n_days], vec![15; n_days])
        .expect("generated record is valid")
}

fn make_radiation(n_hours: usize, seed: u64) -> Vec<RadiationForcing> {
    let mut rng = Lcg(seed);
    (0..n_hours)
        .map(|i| {
            let day = (i / 24 % 365 + 1) as f64;
            let hour = (i % 24) as f64 + 0.5;
            let f = RadiationForcing::new(day, hour, -5.0 + rng.next_f64() * 25.0, 0.3 + rng.next_f64());
            if i % 2 == 0 {
                f.with_shortwave(rng.next_f64() * 900.0)
            } else {
                f.with_cloud_fraction(rng.next_f64())
            }
        })
        .collect()
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_temperature(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let config = ForcingConfig::default();
    let mut results = Vec::new();

    for &n in sizes {
        let forcing = make_temperature(n, 42);

        // Warmup
        black_box(temperature_run::run(&forcing, Resolution::Hourly, &config).ok());

        let dur = median_time(|| {
            black_box(temperature_run::run(&forcing, Resolution::Hourly, &config).ok());
        });
        results.push(("temperature", n, dur));
    }
    results
}

fn bench_radiation(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let site = Site::new(47.5, -120.5, -120.0);
    let mut results = Vec::new();

    for &n in sizes {
        let forcing = make_radiation(n, 42);

        let dur = median_time(|| {
            let mut estimator = RadiationEstimator::new(site, ForcingConfig::default());
            black_box(estimator.estimate_series(&forcing).ok());
        });
        results.push(("radiation", n, dur));
    }
    results
}

fn main() {
    println!("Core Benchmarks");
    println!("============================================================");
    println!("{:<18} {:>6}   {:>12}", "Routine", "N", "Median (ms)");
    println!("--------------------------------------------");

    let mut all_results: Vec<(&str, usize, Duration)> = Vec::new();

    all_results.extend(bench_temperature(&[365, 3650, 36500]));
    all_results.extend(bench_radiation(&[8760, 87600]));

    for (routine, n, dur) in &all_results {
        let ms = dur.as_secs_f64() * 1000.0;
        println!("{:<18} {:>6}      {:>8.2}", routine, n, ms);
    }

    println!("============================================================");
}
