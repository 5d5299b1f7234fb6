/// subdaily: disaggregation of daily meteorological forcing.
///
/// Turns daily temperature extremes into a sub-daily curve and estimates
/// hourly incoming shortwave and longwave radiation from whatever
/// combination of radiation and cloud observations is available.
pub mod config;
pub mod error;
pub mod forcing;
pub mod radiation;
pub mod spline;
pub mod temperature;
pub mod traits;

pub use config::ForcingConfig;
pub use error::{ForcingError, Result};
