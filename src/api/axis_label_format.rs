use chrono::{DateTime, Timelike, Utc};

use super::axis_ticks::{TimeUnit, floor_to_unit, tick_step};

/// Multi-scale time tick label.
///
/// The coarsest calendar boundary the tick sits on decides the format:
/// years print `%Y`, months `%B`, week starts `%b %d`, days `%a %d`, hours
/// `%I %p`, minutes `%I:%M`, seconds `:%S` and anything finer `.%L`.
#[must_use]
pub fn format_time_tick(date: DateTime<Utc>) -> String {
    let starts = |unit| floor_to_unit(unit, date) == date;

    if !starts(TimeUnit::Second) {
        format!(".{:03}", date.nanosecond() / 1_000_000)
    } else if !starts(TimeUnit::Minute) {
        date.format(":%S").to_string()
    } else if !starts(TimeUnit::Hour) {
        date.format("%I:%M").to_string()
    } else if !starts(TimeUnit::Day) {
        date.format("%I %p").to_string()
    } else if !starts(TimeUnit::Month) {
        if starts(TimeUnit::Week) {
            date.format("%b %d").to_string()
        } else {
            date.format("%a %d").to_string()
        }
    } else if !starts(TimeUnit::Year) {
        date.format("%B").to_string()
    } else {
        date.format("%Y").to_string()
    }
}

/// Decimal places needed to tell ticks `step` apart.
#[must_use]
pub fn price_tick_precision(step: f64) -> usize {
    let step = step.abs();
    if !step.is_finite() || step == 0.0 {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

/// Precision for the ticks generated across `domain` with `count` ticks.
#[must_use]
pub fn price_tick_precision_for_domain(domain: (f64, f64), count: usize) -> usize {
    price_tick_precision(tick_step(domain.0, domain.1, count))
}

/// Fixed-precision price label with `,` thousands separators.
#[must_use]
pub fn format_price_tick(value: f64, precision: usize) -> String {
    let fixed = format!("{value:.precision$}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (idx, digit) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // A tick that rounds to zero carries no sign.
    let sign = if grouped.chars().all(|c| c == '0')
        && fraction.is_none_or(|f| f.chars().all(|c| c == '0'))
    {
        ""
    } else {
        sign
    };

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}
