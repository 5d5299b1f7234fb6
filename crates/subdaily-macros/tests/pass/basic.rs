use subdaily_macros::Series;

#[derive(Debug, Clone, Copy, Series)]
pub struct HourRecord {
    pub shortwave: f64,
    pub longwave: f64,
    pub cloud_fraction: f64,
}

fn main() {
    let r = HourRecord { shortwave: 410.0, longwave: 290.0, cloud_fraction: 0.3 };
    let mut series = HourRecordSeries::with_capacity(24);
    assert!(series.is_empty());
    series.push(&r);
    series.push(&r);
    assert_eq!(series.len(), 2);
    assert_eq!(series.column("longwave"), Some(&[290.0, 290.0][..]));
    assert_eq!(series.column("missing"), None);
    assert_eq!(HourRecord::column_names(), &["shortwave", "longwave", "cloud_fraction"]);
}
