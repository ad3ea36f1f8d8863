use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, LinearScale};
use crate::error::{ChartError, ChartResult};

/// Multiplicative headroom applied below the lowest and above the highest price.
pub const PRICE_DOMAIN_PADDING_FACTOR: f64 = 1.05;

/// Price axis mapped onto the inverted pixel range `[plot_height, 0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScale {
    linear: LinearScale,
}

impl PriceScale {
    pub fn new(price_min: f64, price_max: f64, plot_height: f64) -> ChartResult<Self> {
        let linear = LinearScale::new((price_min, price_max), (plot_height.max(0.0), 0.0))?;
        Ok(Self { linear })
    }

    /// Fits the domain to `[min(price) / 1.05, max(price) * 1.05]`.
    pub fn from_data(points: &[DataPoint], plot_height: f64) -> ChartResult<Self> {
        let min = points.iter().map(|point| OrderedFloat(point.price)).min();
        let max = points.iter().map(|point| OrderedFloat(point.price)).max();
        let (Some(min), Some(max)) = (min, max) else {
            return Err(ChartError::Domain(
                "price scale cannot be built from empty data".to_owned(),
            ));
        };

        Self::new(
            min.0 / PRICE_DOMAIN_PADDING_FACTOR,
            max.0 * PRICE_DOMAIN_PADDING_FACTOR,
            plot_height,
        )
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    pub fn price_to_pixel(self, price: f64) -> ChartResult<f64> {
        self.linear.domain_to_pixel(price)
    }

    pub fn pixel_to_price(self, pixel: f64) -> ChartResult<f64> {
        self.linear.pixel_to_domain(pixel)
    }
}
