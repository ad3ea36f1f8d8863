use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{ChartError, ChartResult};

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}

/// Converts fractional epoch milliseconds back to a timestamp.
///
/// Sub-millisecond remainders are truncated toward zero, the same way a
/// browser `Date` clips its time value.
pub fn unix_millis_to_datetime(millis: f64) -> ChartResult<DateTime<Utc>> {
    if !millis.is_finite() {
        return Err(ChartError::InvalidData(
            "timestamp milliseconds must be finite".to_owned(),
        ));
    }
    let truncated = millis.trunc();
    if truncated < i64::MIN as f64 || truncated > i64::MAX as f64 {
        return Err(ChartError::InvalidData(format!(
            "timestamp {millis}ms is outside the representable range"
        )));
    }
    DateTime::from_timestamp_millis(truncated as i64).ok_or_else(|| {
        ChartError::InvalidData(format!(
            "timestamp {millis}ms is outside the representable range"
        ))
    })
}

/// Midnight UTC of a calendar day.
pub fn utc_midnight(year: i32, month: u32, day: u32) -> ChartResult<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ChartError::InvalidData(format!("invalid date {year}-{month}-{day}")))
}
