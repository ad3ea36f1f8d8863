use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::primitives::{datetime_to_unix_millis, utc_midnight};
use crate::error::ChartResult;

/// One closing-price sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: DateTime<Utc>,
    pub price: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(date: DateTime<Utc>, price: f64) -> Self {
        Self { date, price }
    }

    /// Builds a point dated at midnight UTC of the given calendar day.
    pub fn on_day(year: i32, month: u32, day: u32, price: f64) -> ChartResult<Self> {
        Ok(Self {
            date: utc_midnight(year, month, day)?,
            price,
        })
    }

    #[must_use]
    pub fn unix_millis(self) -> f64 {
        datetime_to_unix_millis(self.date)
    }
}

/// Space reserved around the plot area for axes and titles, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    #[must_use]
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(20, 20, 30, 50)
    }
}

/// Outer canvas size plus margins.
///
/// The plot area is what remains after subtracting the margins. Its extents
/// may be zero or negative, which is the degenerate-chart boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub margins: Margins,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(960, 500)
    }
}

impl Dimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            margins: Margins::default(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn plot_width(self) -> f64 {
        f64::from(self.width) - f64::from(self.margins.left) - f64::from(self.margins.right)
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        f64::from(self.height) - f64::from(self.margins.top) - f64::from(self.margins.bottom)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.plot_width() <= 0.0 || self.plot_height() <= 0.0
    }
}

/// Date-ascending closing-price sequence.
///
/// Construction canonicalizes the input: non-finite prices are dropped,
/// points are stably sorted by date and the last sample wins for a repeated
/// date. Every consumer can therefore rely on strictly increasing dates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<DataPoint>", into = "Vec<DataPoint>")]
pub struct PriceSeries {
    points: Vec<DataPoint>,
}

impl PriceSeries {
    #[must_use]
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self {
            points: canonicalize_points(points),
        }
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<DataPoint> {
        self.points.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<DataPoint> {
        self.points.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataPoint> {
        self.points.iter()
    }

    #[must_use]
    pub fn into_points(self) -> Vec<DataPoint> {
        self.points
    }
}

impl From<Vec<DataPoint>> for PriceSeries {
    fn from(points: Vec<DataPoint>) -> Self {
        Self::new(points)
    }
}

impl From<PriceSeries> for Vec<DataPoint> {
    fn from(series: PriceSeries) -> Self {
        series.points
    }
}

fn canonicalize_points(mut points: Vec<DataPoint>) -> Vec<DataPoint> {
    let original_len = points.len();
    points.retain(|point| point.price.is_finite());
    points.sort_by(|a, b| a.date.cmp(&b.date));

    let mut deduped: Vec<DataPoint> = Vec::with_capacity(points.len());
    let mut duplicate_count = 0_usize;
    for point in points {
        if let Some(last) = deduped.last_mut() {
            if point.date.cmp(&last.date) == Ordering::Equal {
                *last = point;
                duplicate_count += 1;
                continue;
            }
        }
        deduped.push(point);
    }

    let filtered_count = original_len.saturating_sub(deduped.len() + duplicate_count);
    if filtered_count > 0 || duplicate_count > 0 {
        warn!(
            filtered_count,
            duplicate_count,
            canonical_count = deduped.len(),
            "canonicalized price series"
        );
    }
    deduped
}
