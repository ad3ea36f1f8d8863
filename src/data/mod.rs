//! Loader for `date,close` price files.
//!
//! Dates use the `%d-%b-%y` pattern (`1-May-12`) and become midnight UTC.
//! Prices go through plain numeric coercion. Rows that fail either
//! conversion are skipped and reported through `tracing`.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use csv::StringRecord;
use tracing::{debug, warn};

use crate::core::{DataPoint, PriceSeries};
use crate::error::{ChartError, ChartResult};

pub const DATE_FORMAT: &str = "%d-%b-%y";
pub const DATE_COLUMN: &str = "date";
pub const PRICE_COLUMN: &str = "close";

/// Parses a `1-May-12` style date into midnight UTC.
pub fn parse_date(value: &str) -> ChartResult<DateTime<Utc>> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ChartError::InvalidData(format!("unparsable date `{trimmed}`")))
}

/// Numeric coercion of a price cell.
pub fn parse_price(value: &str) -> ChartResult<f64> {
    let trimmed = value.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| ChartError::InvalidData(format!("non-numeric price `{trimmed}`")))
}

pub fn load_price_csv(path: impl AsRef<Path>) -> ChartResult<PriceSeries> {
    let path = path.as_ref();
    let file = File::open(path)?;
    debug!(path = %path.display(), "loading price csv");
    parse_price_csv(file)
}

pub fn parse_price_csv<R: Read>(reader: R) -> ChartResult<PriceSeries> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let header_map = build_header_map(reader.headers()?);
    let date_idx = required_column(&header_map, DATE_COLUMN)?;
    let price_idx = required_column(&header_map, PRICE_COLUMN)?;

    let mut points = Vec::new();
    let mut skipped = 0_usize;
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        match parse_row(&record, date_idx, price_idx) {
            Ok(point) => points.push(point),
            Err(err) => {
                skipped += 1;
                // +2: one for the header, one for 1-based numbering.
                warn!(row = row + 2, error = %err, "skipping price row");
            }
        }
    }

    debug!(parsed = points.len(), skipped, "parsed price csv");
    Ok(PriceSeries::new(points))
}

fn parse_row(record: &StringRecord, date_idx: usize, price_idx: usize) -> ChartResult<DataPoint> {
    let date = record
        .get(date_idx)
        .ok_or_else(|| ChartError::InvalidData("missing date cell".to_owned()))?;
    let price = record
        .get(price_idx)
        .ok_or_else(|| ChartError::InvalidData("missing price cell".to_owned()))?;
    Ok(DataPoint::new(parse_date(date)?, parse_price(price)?))
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim().to_ascii_lowercase(), idx))
        .collect()
}

fn required_column(header_map: &HashMap<String, usize>, name: &str) -> ChartResult<usize> {
    header_map
        .get(name)
        .copied()
        .ok_or_else(|| ChartError::InvalidData(format!("missing required column `{name}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_abbreviated_month_dates() {
        let date = parse_date("1-May-12").expect("valid date");
        assert_eq!(date.to_rfc3339(), "2012-05-01T00:00:00+00:00");
        let date = parse_date(" 26-Mar-12 ").expect("valid padded date");
        assert_eq!(date.to_rfc3339(), "2012-03-26T00:00:00+00:00");
    }

    #[test]
    fn rejects_unparsable_values() {
        assert!(parse_date("2012-05-01").is_err());
        assert!(parse_price("n/a").is_err());
        assert!(parse_price("NaN").is_err());
    }
}
