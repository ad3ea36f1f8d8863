use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_millis, unix_millis_to_datetime};
use crate::core::{DataPoint, LinearScale};
use crate::error::{ChartError, ChartResult};

/// Date axis mapped onto `[0, plot_width]`.
///
/// Internally the domain is stored as epoch milliseconds so the mapping stays
/// a plain linear interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, plot_width: f64) -> ChartResult<Self> {
        let linear = LinearScale::new(
            (datetime_to_unix_millis(start), datetime_to_unix_millis(end)),
            (0.0, plot_width.max(0.0)),
        )?;
        Ok(Self { linear })
    }

    /// Fits the domain to exactly `[min(date), max(date)]`.
    pub fn from_data(points: &[DataPoint], plot_width: f64) -> ChartResult<Self> {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return Err(ChartError::Domain(
                "time scale cannot be built from empty data".to_owned(),
            ));
        };

        let (start, end) = points
            .iter()
            .fold((first.date, last.date), |(min, max), point| {
                (min.min(point.date), max.max(point.date))
            });
        Self::new(start, end, plot_width)
    }

    /// Domain bounds as epoch milliseconds.
    #[must_use]
    pub fn domain_millis(self) -> (f64, f64) {
        self.linear.domain()
    }

    pub fn domain(self) -> ChartResult<(DateTime<Utc>, DateTime<Utc>)> {
        let (start, end) = self.linear.domain();
        Ok((unix_millis_to_datetime(start)?, unix_millis_to_datetime(end)?))
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    pub fn date_to_pixel(self, date: DateTime<Utc>) -> ChartResult<f64> {
        self.millis_to_pixel(datetime_to_unix_millis(date))
    }

    pub fn millis_to_pixel(self, millis: f64) -> ChartResult<f64> {
        self.linear.domain_to_pixel(millis)
    }

    pub fn pixel_to_date(self, pixel: f64) -> ChartResult<DateTime<Utc>> {
        unix_millis_to_datetime(self.linear.pixel_to_domain(pixel)?)
    }
}
