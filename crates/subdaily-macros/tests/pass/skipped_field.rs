use subdaily_macros::Series;

#[derive(Debug, Clone, Copy, Default)]
pub struct Flags {
    pub clamped: bool,
}

#[derive(Debug, Clone, Copy, Series)]
pub struct Estimate {
    pub shortwave: f64,
    #[series(skip)]
    pub flags: Flags,
    pub longwave: f64,
}

fn main() {
    let e = Estimate { shortwave: 0.0, flags: Flags { clamped: true }, longwave: 300.0 };
    let mut series = EstimateSeries::default();
    series.push(&e);
    assert!(e.flags.clamped);
    assert_eq!(Estimate::column_names(), &["shortwave", "longwave"]);
    assert_eq!(series.longwave, vec![300.0]);
}
