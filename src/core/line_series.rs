use crate::core::{DataPoint, PlotPoint, ScalePair};
use crate::error::ChartResult;

/// Projects the series into the vertices of the value line.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests can consume the exact same geometry output.
pub fn project_line_points(points: &[DataPoint], scales: ScalePair) -> ChartResult<Vec<PlotPoint>> {
    points.iter().map(|point| scales.project(*point)).collect()
}
