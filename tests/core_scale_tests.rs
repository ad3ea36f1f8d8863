use approx::assert_abs_diff_eq;
use hover_chart::core::{
    DataPoint, Dimensions, LinearScale, Margins, PRICE_DOMAIN_PADDING_FACTOR, PriceScale,
    PriceSeries, ScalePair, TimeScale, utc_midnight,
};
use hover_chart::error::ChartError;

fn sample_series() -> PriceSeries {
    PriceSeries::new(vec![
        DataPoint::on_day(2012, 5, 1, 100.0).expect("valid point"),
        DataPoint::on_day(2012, 5, 2, 110.0).expect("valid point"),
        DataPoint::on_day(2012, 5, 3, 90.0).expect("valid point"),
    ])
}

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new((10.0, 110.0), (0.0, 1000.0)).expect("valid scale");

    let original = 42.5;
    let px = scale.domain_to_pixel(original).expect("to pixel");
    let recovered = scale.pixel_to_domain(px).expect("from pixel");

    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn non_finite_domain_is_rejected() {
    let err = LinearScale::new((f64::NAN, 1.0), (0.0, 10.0)).expect_err("nan domain");
    assert!(matches!(err, ChartError::Domain(_)));

    let scale = LinearScale::new((0.0, 1.0), (0.0, 10.0)).expect("valid scale");
    assert!(scale.domain_to_pixel(f64::INFINITY).is_err());
    assert!(scale.pixel_to_domain(f64::NAN).is_err());
}

#[test]
fn collapsed_domain_maps_to_range_middle() {
    let scale = LinearScale::new((5.0, 5.0), (0.0, 200.0)).expect("valid scale");
    assert_eq!(scale.domain_to_pixel(5.0).expect("to pixel"), 100.0);
    assert_eq!(scale.domain_to_pixel(42.0).expect("to pixel"), 100.0);
}

#[test]
fn default_dimensions_give_plot_area_890_by_450() {
    let dimensions = Dimensions::default();
    assert_eq!(dimensions.width, 960);
    assert_eq!(dimensions.height, 500);
    assert_eq!(
        dimensions.margins,
        Margins {
            top: 20,
            right: 20,
            bottom: 30,
            left: 50
        }
    );
    assert_eq!(dimensions.plot_width(), 890.0);
    assert_eq!(dimensions.plot_height(), 450.0);
    assert!(!dimensions.is_degenerate());
    assert!(Dimensions::new(60, 500).is_degenerate());
}

#[test]
fn time_scale_spans_exact_date_extent() {
    let scales = ScalePair::from_series(&sample_series(), Dimensions::default()).expect("scales");
    let (start, end) = scales.x.domain().expect("domain");
    assert_eq!(start, utc_midnight(2012, 5, 1).expect("date"));
    assert_eq!(end, utc_midnight(2012, 5, 3).expect("date"));

    assert_eq!(scales.x.date_to_pixel(start).expect("start px"), 0.0);
    assert_eq!(scales.x.date_to_pixel(end).expect("end px"), 890.0);
    let middle = utc_midnight(2012, 5, 2).expect("date");
    assert_abs_diff_eq!(scales.x.date_to_pixel(middle).expect("mid px"), 445.0, epsilon = 1e-9);
}

#[test]
fn price_scale_pads_domain_and_inverts_range() {
    let scales = ScalePair::from_series(&sample_series(), Dimensions::default()).expect("scales");
    let (lo, hi) = scales.y.domain();
    assert_eq!(lo, 90.0 / PRICE_DOMAIN_PADDING_FACTOR);
    assert_eq!(hi, 110.0 * PRICE_DOMAIN_PADDING_FACTOR);
    assert_eq!(scales.y.range(), (450.0, 0.0));

    assert_eq!(scales.y.price_to_pixel(lo).expect("lo px"), 450.0);
    assert_eq!(scales.y.price_to_pixel(hi).expect("hi px"), 0.0);

    // Higher prices sit higher on screen.
    let y100 = scales.y.price_to_pixel(100.0).expect("px");
    let y110 = scales.y.price_to_pixel(110.0).expect("px");
    assert!(y110 < y100);
}

#[test]
fn empty_data_fails_with_domain_error() {
    let err = ScalePair::from_series(&PriceSeries::default(), Dimensions::default())
        .expect_err("empty data");
    assert!(matches!(err, ChartError::Domain(_)));

    assert!(matches!(
        TimeScale::from_data(&[], 100.0),
        Err(ChartError::Domain(_))
    ));
    assert!(matches!(
        PriceScale::from_data(&[], 100.0),
        Err(ChartError::Domain(_))
    ));
}

#[test]
fn negative_plot_extent_clamps_range_to_zero() {
    let scales = ScalePair::from_series(&sample_series(), Dimensions::new(40, 30)).expect("scales");
    assert_eq!(scales.x.range(), (0.0, 0.0));
    assert_eq!(scales.y.range(), (0.0, 0.0));
}

#[test]
fn invert_x_recovers_dates() {
    let scales = ScalePair::from_series(&sample_series(), Dimensions::default()).expect("scales");
    let date = scales.invert_x(445.0).expect("invert");
    assert_eq!(date, utc_midnight(2012, 5, 2).expect("date"));
}
