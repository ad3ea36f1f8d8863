use approx::assert_relative_eq;
use chrono::{TimeZone, Utc};
use hover_chart::api::{
    TimeUnit, format_price_tick, format_time_tick, linear_ticks, price_tick_precision_for_domain,
    select_time_interval, tick_increment, time_ticks,
};
use hover_chart::core::datetime_to_unix_millis;

fn millis(y: i32, mo: u32, d: u32, h: u32) -> f64 {
    datetime_to_unix_millis(Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap())
}

#[test]
fn linear_ticks_use_nice_steps() {
    let ticks = linear_ticks(0.0, 1.0, 5);
    assert_eq!(ticks.len(), 6);
    for (tick, expected) in ticks.iter().zip([0.0, 0.2, 0.4, 0.6, 0.8, 1.0]) {
        assert_relative_eq!(*tick, expected);
    }

    assert_eq!(
        linear_ticks(90.0 / 1.05, 110.0 * 1.05, 5),
        vec![90.0, 95.0, 100.0, 105.0, 110.0, 115.0]
    );
    assert_eq!(linear_ticks(0.0, 1_000.0, 5), vec![0.0, 200.0, 400.0, 600.0, 800.0, 1_000.0]);
}

#[test]
fn linear_ticks_handle_degenerate_input() {
    assert_eq!(linear_ticks(3.0, 3.0, 5), vec![3.0]);
    assert!(linear_ticks(0.0, 1.0, 0).is_empty());
    assert!(linear_ticks(f64::NAN, 1.0, 5).is_empty());
    assert_eq!(linear_ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
}

#[test]
fn tick_increment_encodes_fractional_steps_as_negative_inverse() {
    assert_eq!(tick_increment(0.0, 10.0, 5), 2.0);
    assert_eq!(tick_increment(0.0, 1.0, 5), -5.0);
}

#[test]
fn interval_selection_picks_the_closest_table_entry() {
    let two_days = (millis(2012, 5, 1, 0), millis(2012, 5, 3, 0));
    assert_eq!(select_time_interval(two_days.0, two_days.1, 5), (TimeUnit::Hour, 12));

    let five_weeks = (millis(2012, 3, 26, 0), millis(2012, 5, 1, 0));
    assert_eq!(select_time_interval(five_weeks.0, five_weeks.1, 5), (TimeUnit::Week, 1));

    let decades = (millis(1990, 1, 1, 0), millis(2020, 1, 1, 0));
    assert_eq!(select_time_interval(decades.0, decades.1, 5), (TimeUnit::Year, 5));
}

#[test]
fn time_ticks_align_to_calendar_boundaries() {
    let ticks = time_ticks(millis(2012, 5, 1, 0), millis(2012, 5, 3, 0), 5).expect("ticks");
    let expected: Vec<_> = [(1, 0), (1, 12), (2, 0), (2, 12), (3, 0)]
        .into_iter()
        .map(|(d, h)| Utc.with_ymd_and_hms(2012, 5, d, h, 0, 0).unwrap())
        .collect();
    assert_eq!(ticks, expected);
}

#[test]
fn weekly_ticks_fall_on_sundays() {
    let ticks = time_ticks(millis(2012, 3, 26, 0), millis(2012, 5, 1, 0), 5).expect("ticks");
    assert!(!ticks.is_empty());
    for tick in &ticks {
        assert_eq!(tick.format("%a").to_string(), "Sun");
    }
    let labels: Vec<String> = ticks.iter().map(|tick| format_time_tick(*tick)).collect();
    // April 1st is both a week start and a month start; the month wins.
    assert_eq!(labels, vec!["April", "Apr 08", "Apr 15", "Apr 22", "Apr 29"]);
}

#[test]
fn multi_year_ticks_land_on_year_starts() {
    let ticks = time_ticks(millis(1990, 6, 1, 0), millis(2020, 6, 1, 0), 5).expect("ticks");
    let labels: Vec<String> = ticks.iter().map(|tick| format_time_tick(*tick)).collect();
    assert_eq!(labels, vec!["1995", "2000", "2005", "2010", "2015", "2020"]);
}

#[test]
fn price_labels_use_step_precision_and_grouping() {
    let precision = price_tick_precision_for_domain((0.0, 1.0), 5);
    assert_eq!(precision, 1);
    assert_eq!(format_price_tick(0.4, precision), "0.4");

    let precision = price_tick_precision_for_domain((0.0, 20_000.0), 5);
    assert_eq!(precision, 0);
    assert_eq!(format_price_tick(12_000.0, precision), "12,000");
}
