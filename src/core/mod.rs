pub mod area_series;
pub mod line_series;
pub mod locator;
pub mod price_scale;
pub mod primitives;
pub mod scale;
pub mod scale_pair;
pub mod time_scale;
pub mod types;

pub use area_series::{AreaGeometry, project_area_geometry};
pub use line_series::project_line_points;
pub use locator::{bisect_date_descending, bisect_left_by, descending, nearest_point};
pub use price_scale::{PRICE_DOMAIN_PADDING_FACTOR, PriceScale};
pub use primitives::{datetime_to_unix_millis, unix_millis_to_datetime, utc_midnight};
pub use scale::LinearScale;
pub use scale_pair::{PlotPoint, ScalePair};
pub use time_scale::TimeScale;
pub use types::{DataPoint, Dimensions, Margins, PriceSeries};
