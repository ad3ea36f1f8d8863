use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{DataPoint, Dimensions, PriceSeries, ScalePair, nearest_point};
use crate::error::ChartResult;

use super::tooltip::{tooltip_date_line, tooltip_price_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FocusPhase {
    #[default]
    Hidden,
    Visible,
}

/// Public focus state exposed to host applications.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct FocusState {
    pub visible: bool,
    pub current_point: Option<DataPoint>,
}

/// Pointer input over the plot overlay, in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Enter,
    Leave,
    Move { x: f64, y: f64 },
}

/// Geometry and text of the hover group.
///
/// `translate_*` places the group at the focused point. The guide endpoints
/// are offsets inside that translated frame: the vertical guide runs from
/// `(0, 0)` to `(0, x_hover_line_y2)` and the horizontal guide from `(0, 0)`
/// to `(y_hover_line_x2, 0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusLayout {
    pub translate_x: f64,
    pub translate_y: f64,
    pub x_hover_line_y2: f64,
    pub y_hover_line_x2: f64,
    pub date_text: String,
    pub price_text: String,
}

impl FocusLayout {
    /// Layout before the first pointer move: group at the plot origin, guides
    /// spanning the full plot.
    #[must_use]
    pub fn initial(plot_width: f64, plot_height: f64) -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            x_hover_line_y2: plot_height,
            y_hover_line_x2: plot_width,
            date_text: String::new(),
            price_text: String::new(),
        }
    }
}

/// Hidden/Visible state machine driving the hover group.
///
/// The controller reads scales and data but never mutates them. It is only
/// installed over a non-empty series, so a failed lookup can only come from
/// a caller handing it a different series; such a move is swallowed and the
/// group stays hidden.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusController {
    scales: ScalePair,
    plot_width: f64,
    plot_height: f64,
    phase: FocusPhase,
    current_point: Option<DataPoint>,
    cursor: Option<(f64, f64)>,
    layout: FocusLayout,
}

impl FocusController {
    #[must_use]
    pub fn install(scales: ScalePair, dimensions: Dimensions) -> Self {
        let plot_width = dimensions.plot_width();
        let plot_height = dimensions.plot_height();
        Self {
            scales,
            plot_width,
            plot_height,
            phase: FocusPhase::Hidden,
            current_point: None,
            cursor: None,
            layout: FocusLayout::initial(plot_width, plot_height),
        }
    }

    #[must_use]
    pub fn phase(&self) -> FocusPhase {
        self.phase
    }

    #[must_use]
    pub fn state(&self) -> FocusState {
        FocusState {
            visible: self.phase == FocusPhase::Visible,
            current_point: self.current_point,
        }
    }

    #[must_use]
    pub fn layout(&self) -> &FocusLayout {
        &self.layout
    }

    /// Last pointer position seen by `pointer_move`, in plot coordinates.
    #[must_use]
    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    #[must_use]
    pub fn scales(&self) -> ScalePair {
        self.scales
    }

    pub fn handle(&mut self, series: &PriceSeries, event: PointerEvent) {
        match event {
            PointerEvent::Enter => self.pointer_enter(),
            PointerEvent::Leave => self.pointer_leave(),
            PointerEvent::Move { x, y } => self.pointer_move(series, x, y),
        }
    }

    pub fn pointer_enter(&mut self) {
        self.phase = FocusPhase::Visible;
    }

    pub fn pointer_leave(&mut self) {
        self.phase = FocusPhase::Hidden;
        self.current_point = None;
        self.cursor = None;
    }

    /// Focuses the point nearest to pointer `x`. Pointer `y` is recorded but
    /// plays no part in the lookup.
    pub fn pointer_move(&mut self, series: &PriceSeries, x: f64, y: f64) {
        self.cursor = Some((x, y));
        match self.focus_at(series.points(), x) {
            Ok(point) => {
                self.phase = FocusPhase::Visible;
                self.current_point = Some(point);
                trace!(
                    x,
                    date = %point.date,
                    price = point.price,
                    "focus moved"
                );
            }
            Err(err) => {
                debug!(error = %err, x, "suppressing focus for pointer move");
                self.phase = FocusPhase::Hidden;
                self.current_point = None;
            }
        }
    }

    fn focus_at(&mut self, points: &[DataPoint], x: f64) -> ChartResult<DataPoint> {
        let target = self.scales.invert_x(x)?;
        let point = nearest_point(points, target)?;
        let position = self.scales.project(point)?;

        self.layout = FocusLayout {
            translate_x: position.x,
            translate_y: position.y,
            x_hover_line_y2: self.plot_height - position.y,
            y_hover_line_x2: -position.x,
            date_text: tooltip_date_line(point.date),
            price_text: tooltip_price_line(point.price),
        };
        Ok(point)
    }

    #[must_use]
    pub fn plot_size(&self) -> (f64, f64) {
        (self.plot_width, self.plot_height)
    }
}
