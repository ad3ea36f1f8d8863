use chrono::{DateTime, Utc};

/// `Www Mmm DD YYYY`, e.g. `Tue May 01 2012`.
#[must_use]
pub fn format_tooltip_date(date: DateTime<Utc>) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Shortest round-trip form, so `100.0` prints as `100`.
///
/// Magnitudes outside `[1e-6, 1e21)` use a signed exponent (`1e+21`,
/// `2.5e-7`), matching how browsers stringify numbers.
#[must_use]
pub fn format_tooltip_price(price: f64) -> String {
    if price.is_nan() {
        return "NaN".to_owned();
    }
    if price.is_infinite() {
        return if price > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if price == 0.0 {
        return "0".to_owned();
    }

    let magnitude = price.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{price}");
    }
    let exp = format!("{price:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp,
    }
}

#[must_use]
pub fn tooltip_date_line(date: DateTime<Utc>) -> String {
    format!("Date: {}", format_tooltip_date(date))
}

#[must_use]
pub fn tooltip_price_line(price: f64) -> String {
    format!("Price: {}", format_tooltip_price(price))
}
