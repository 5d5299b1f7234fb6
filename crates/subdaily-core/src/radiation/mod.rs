/// Hourly radiation estimation.
///
/// Solar geometry, a clear-sky model and empirical cloud relations combined
/// into a per-cell estimator that fills in whichever of shortwave, longwave
/// and cloud fraction are not measured. The last derived cloud fraction is
/// carried between calls.
pub mod constants;
pub mod fluxes;
pub mod geometry;
pub mod processes;
pub mod run;
pub mod state;
