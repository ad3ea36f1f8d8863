use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};

use crate::core::primitives::{datetime_to_unix_millis, unix_millis_to_datetime};
use crate::error::ChartResult;

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

const MAX_TICKS: usize = 10_000;

const MILLIS_SECOND: f64 = 1_000.0;
const MILLIS_MINUTE: f64 = MILLIS_SECOND * 60.0;
const MILLIS_HOUR: f64 = MILLIS_MINUTE * 60.0;
const MILLIS_DAY: f64 = MILLIS_HOUR * 24.0;
const MILLIS_WEEK: f64 = MILLIS_DAY * 7.0;
const MILLIS_MONTH: f64 = MILLIS_DAY * 30.0;
const MILLIS_YEAR: f64 = MILLIS_DAY * 365.0;

/// Calendar unit used to align time ticks (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// Candidate tick intervals as `(unit, step, approximate span in ms)`.
pub const TIME_TICK_INTERVALS: [(TimeUnit, u32, f64); 18] = [
    (TimeUnit::Second, 1, MILLIS_SECOND),
    (TimeUnit::Second, 5, 5.0 * MILLIS_SECOND),
    (TimeUnit::Second, 15, 15.0 * MILLIS_SECOND),
    (TimeUnit::Second, 30, 30.0 * MILLIS_SECOND),
    (TimeUnit::Minute, 1, MILLIS_MINUTE),
    (TimeUnit::Minute, 5, 5.0 * MILLIS_MINUTE),
    (TimeUnit::Minute, 15, 15.0 * MILLIS_MINUTE),
    (TimeUnit::Minute, 30, 30.0 * MILLIS_MINUTE),
    (TimeUnit::Hour, 1, MILLIS_HOUR),
    (TimeUnit::Hour, 3, 3.0 * MILLIS_HOUR),
    (TimeUnit::Hour, 6, 6.0 * MILLIS_HOUR),
    (TimeUnit::Hour, 12, 12.0 * MILLIS_HOUR),
    (TimeUnit::Day, 1, MILLIS_DAY),
    (TimeUnit::Day, 2, 2.0 * MILLIS_DAY),
    (TimeUnit::Week, 1, MILLIS_WEEK),
    (TimeUnit::Month, 1, MILLIS_MONTH),
    (TimeUnit::Month, 3, 3.0 * MILLIS_MONTH),
    (TimeUnit::Year, 1, MILLIS_YEAR),
];

/// Nice 1-2-5 step increment for `count` ticks across `[start, stop]`.
///
/// Positive results are the step itself; negative results encode a
/// fractional step as `-1 / step`, which keeps tick values exact.
#[must_use]
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = nice_factor(error);
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Absolute nice step between ticks, signed like `stop - start`.
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let step0 = (stop - start).abs() / count.max(1) as f64;
    let mut step1 = 10f64.powf(step0.log10().floor());
    step1 *= nice_factor(step0 / step1);
    if stop < start { -step1 } else { step1 }
}

fn nice_factor(error: f64) -> f64 {
    if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    }
}

/// Roughly `count` evenly spaced round values inside `[start, stop]`.
#[must_use]
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let step = tick_increment(lo, hi, count);
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }

    let mut ticks = if step > 0.0 {
        let first = (lo / step).ceil();
        let last = (hi / step).floor();
        let n = ((last - first + 1.0).ceil().max(0.0) as usize).min(MAX_TICKS);
        (0..n).map(|i| (first + i as f64) * step).collect::<Vec<_>>()
    } else {
        let inverse = -step;
        let first = (lo * inverse).ceil();
        let last = (hi * inverse).floor();
        let n = ((last - first + 1.0).ceil().max(0.0) as usize).min(MAX_TICKS);
        (0..n).map(|i| (first + i as f64) / inverse).collect::<Vec<_>>()
    };

    if reverse {
        ticks.reverse();
    }
    ticks
}

/// Calendar-aligned ticks for the millisecond domain `[start, stop]`.
///
/// The interval is the table entry closest to `span / count`. Spans beyond
/// the table use whole years on a nice step; spans shorter than a second use
/// milliseconds.
pub fn time_ticks(start: f64, stop: f64, count: usize) -> ChartResult<Vec<DateTime<Utc>>> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Ok(Vec::new());
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (unit, step) = select_time_interval(lo, hi, count);

    let lo_date = unix_millis_to_datetime(lo)?;
    // Inclusive stop.
    let hi_date = unix_millis_to_datetime(hi + 1.0)?;
    let mut ticks = time_range(unit, step, lo_date, hi_date);
    if reverse {
        ticks.reverse();
    }
    Ok(ticks)
}

/// Picks the tick unit and step for a millisecond span.
#[must_use]
pub fn select_time_interval(start: f64, stop: f64, count: usize) -> (TimeUnit, u32) {
    let target = (stop - start).abs() / count.max(1) as f64;
    let i = TIME_TICK_INTERVALS.partition_point(|interval| interval.2 <= target);

    if i == TIME_TICK_INTERVALS.len() {
        let step = tick_step(start / MILLIS_YEAR, stop / MILLIS_YEAR, count)
            .abs()
            .max(1.0);
        return (TimeUnit::Year, step as u32);
    }
    if i == 0 {
        let step = tick_step(start, stop, count).abs().max(1.0);
        return (TimeUnit::Millisecond, step as u32);
    }

    let below = TIME_TICK_INTERVALS[i - 1];
    let above = TIME_TICK_INTERVALS[i];
    let chosen = if target / below.2 < above.2 / target {
        below
    } else {
        above
    };
    (chosen.0, chosen.1)
}

fn time_range(
    unit: TimeUnit,
    step: u32,
    start: DateTime<Utc>,
    stop: DateTime<Utc>,
) -> Vec<DateTime<Utc>> {
    let step = step.max(1);
    if unit == TimeUnit::Millisecond {
        let step = f64::from(step);
        let first = (datetime_to_unix_millis(start) / step).ceil() * step;
        let stop_ms = datetime_to_unix_millis(stop);
        return (0..MAX_TICKS)
            .map(|i| first + i as f64 * step)
            .take_while(|millis| *millis < stop_ms)
            .filter_map(|millis| unix_millis_to_datetime(millis).ok())
            .collect();
    }

    let mut ticks = Vec::new();
    let mut current = ceil_to_unit(unit, start);
    while current < stop && ticks.len() < MAX_TICKS {
        if unit_field(unit, current) % i64::from(step) == 0 {
            ticks.push(current);
        }
        match offset_by_unit(unit, current) {
            Some(next) => current = floor_to_unit(unit, next),
            None => break,
        }
    }
    ticks
}

/// Start of the unit containing `date`.
#[must_use]
pub fn floor_to_unit(unit: TimeUnit, date: DateTime<Utc>) -> DateTime<Utc> {
    let floored = match unit {
        TimeUnit::Millisecond => Some(date),
        TimeUnit::Second => date.with_nanosecond(0),
        TimeUnit::Minute => date.with_nanosecond(0).and_then(|d| d.with_second(0)),
        TimeUnit::Hour => date
            .with_nanosecond(0)
            .and_then(|d| d.with_second(0))
            .and_then(|d| d.with_minute(0)),
        TimeUnit::Day => start_of_day(date.year(), date.month(), date.day()),
        TimeUnit::Week => {
            let back = i64::from(date.weekday().num_days_from_sunday());
            let day = date - Duration::days(back);
            start_of_day(day.year(), day.month(), day.day())
        }
        TimeUnit::Month => start_of_day(date.year(), date.month(), 1),
        TimeUnit::Year => start_of_day(date.year(), 1, 1),
    };
    floored.unwrap_or(date)
}

fn ceil_to_unit(unit: TimeUnit, date: DateTime<Utc>) -> DateTime<Utc> {
    let floored = floor_to_unit(unit, date - Duration::milliseconds(1));
    offset_by_unit(unit, floored)
        .map(|next| floor_to_unit(unit, next))
        .unwrap_or(date)
}

fn offset_by_unit(unit: TimeUnit, date: DateTime<Utc>) -> Option<DateTime<Utc>> {
    match unit {
        TimeUnit::Millisecond => date.checked_add_signed(Duration::milliseconds(1)),
        TimeUnit::Second => date.checked_add_signed(Duration::seconds(1)),
        TimeUnit::Minute => date.checked_add_signed(Duration::minutes(1)),
        TimeUnit::Hour => date.checked_add_signed(Duration::hours(1)),
        TimeUnit::Day => date.checked_add_signed(Duration::days(1)),
        TimeUnit::Week => date.checked_add_signed(Duration::weeks(1)),
        TimeUnit::Month => date.checked_add_months(chrono::Months::new(1)),
        TimeUnit::Year => date.checked_add_months(chrono::Months::new(12)),
    }
}

fn unit_field(unit: TimeUnit, date: DateTime<Utc>) -> i64 {
    match unit {
        TimeUnit::Millisecond => date.timestamp_millis(),
        TimeUnit::Second => i64::from(date.second()),
        TimeUnit::Minute => i64::from(date.minute()),
        TimeUnit::Hour => i64::from(date.hour()),
        TimeUnit::Day => i64::from(date.day0()),
        // Weeks are never stepped by more than one.
        TimeUnit::Week => 0,
        TimeUnit::Month => i64::from(date.month0()),
        TimeUnit::Year => i64::from(date.year()),
    }
}

fn start_of_day(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()
}

