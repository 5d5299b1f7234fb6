use subdaily_macros::Series;

#[derive(Debug, Clone, Copy, Series)]
#[series(name = "AirTemperature")]
pub struct AirTemperatureStep {
    pub temp: f64,
}

fn main() {
    let mut series = AirTemperature::with_capacity(3);
    series.push(&AirTemperatureStep { temp: -2.5 });
    assert_eq!(series.len(), 1);
    assert_eq!(series.temp, vec![-2.5]);
}
