use hover_chart::core::{DataPoint, PriceSeries, utc_midnight};

fn point(day: u32, price: f64) -> DataPoint {
    DataPoint::on_day(2012, 5, day, price).expect("valid point")
}

#[test]
fn series_is_sorted_ascending_by_date() {
    let series = PriceSeries::new(vec![point(3, 3.0), point(1, 1.0), point(2, 2.0)]);
    let prices: Vec<f64> = series.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![1.0, 2.0, 3.0]);
}

#[test]
fn duplicate_dates_keep_the_last_sample() {
    let series = PriceSeries::new(vec![point(1, 1.0), point(2, 2.0), point(1, 9.0)]);
    assert_eq!(series.len(), 2);
    assert_eq!(series.first().expect("first").price, 9.0);
}

#[test]
fn non_finite_prices_are_dropped() {
    let series = PriceSeries::new(vec![
        point(1, f64::NAN),
        point(2, 2.0),
        point(3, f64::INFINITY),
    ]);
    assert_eq!(series.len(), 1);
    assert_eq!(
        series.first().expect("first").date,
        utc_midnight(2012, 5, 2).expect("date")
    );
}

#[test]
fn serde_round_trip_canonicalizes_input() {
    let series = PriceSeries::new(vec![point(1, 1.0), point(2, 2.0)]);
    let json = serde_json::to_string(&series).expect("serialize");
    let restored: PriceSeries = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, series);

    let reversed = serde_json::to_string(&vec![point(2, 2.0), point(1, 1.0)]).expect("serialize");
    let restored: PriceSeries = serde_json::from_str(&reversed).expect("deserialize");
    assert_eq!(restored, series);
}

#[test]
fn invalid_calendar_day_is_rejected() {
    assert!(DataPoint::on_day(2012, 2, 30, 1.0).is_err());
}
