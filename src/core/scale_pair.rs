use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DataPoint, Dimensions, PriceScale, PriceSeries, TimeScale};
use crate::error::ChartResult;

/// Screen position of a data point inside the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// The x/y scales for one set of dimensions and one data domain.
///
/// A pair is never adjusted in place; any change of dimensions or data
/// produces a new pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalePair {
    pub x: TimeScale,
    pub y: PriceScale,
}

impl ScalePair {
    /// Fits both scales to the series and maps them onto the plot area of
    /// `dimensions`. Fails with a domain error for an empty series.
    pub fn from_series(series: &PriceSeries, dimensions: Dimensions) -> ChartResult<Self> {
        Self::from_points(series.points(), dimensions)
    }

    pub fn from_points(points: &[DataPoint], dimensions: Dimensions) -> ChartResult<Self> {
        let x = TimeScale::from_data(points, dimensions.plot_width())?;
        let y = PriceScale::from_data(points, dimensions.plot_height())?;
        debug!(
            points = points.len(),
            plot_width = dimensions.plot_width(),
            plot_height = dimensions.plot_height(),
            price_domain = ?y.domain(),
            "computed scale pair"
        );
        Ok(Self { x, y })
    }

    pub fn project(self, point: DataPoint) -> ChartResult<PlotPoint> {
        Ok(PlotPoint {
            x: self.x.date_to_pixel(point.date)?,
            y: self.y.price_to_pixel(point.price)?,
        })
    }

    pub fn invert_x(self, pixel_x: f64) -> ChartResult<DateTime<Utc>> {
        self.x.pixel_to_date(pixel_x)
    }
}
