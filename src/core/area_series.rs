use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, PlotPoint, ScalePair};
use crate::error::ChartResult;

/// Deterministic geometry for the area under the value line.
///
/// `line_points` follows the mapped data points.
/// `fill_polygon` is an explicitly closed polygon against the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub line_points: Vec<PlotPoint>,
    pub fill_polygon: Vec<PlotPoint>,
}

impl AreaGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            line_points: Vec::new(),
            fill_polygon: Vec::new(),
        }
    }
}

/// Projects points into area geometry anchored at `baseline_y`, normally the
/// bottom of the plot area.
pub fn project_area_geometry(
    points: &[DataPoint],
    scales: ScalePair,
    baseline_y: f64,
) -> ChartResult<AreaGeometry> {
    if points.is_empty() {
        return Ok(AreaGeometry::empty());
    }

    let line_points = points
        .iter()
        .map(|point| scales.project(*point))
        .collect::<ChartResult<Vec<_>>>()?;

    let first_x = line_points[0].x;
    let last_x = line_points[line_points.len() - 1].x;

    let mut fill_polygon = Vec::with_capacity(line_points.len() + 3);
    fill_polygon.push(PlotPoint {
        x: first_x,
        y: baseline_y,
    });
    fill_polygon.extend(line_points.iter().copied());
    fill_polygon.push(PlotPoint {
        x: last_x,
        y: baseline_y,
    });
    // Repeat the first baseline vertex so consumers can render this as a
    // closed polygon without implicit closure rules.
    fill_polygon.push(PlotPoint {
        x: first_x,
        y: baseline_y,
    });

    Ok(AreaGeometry {
        line_points,
        fill_polygon,
    })
}
