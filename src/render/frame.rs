use serde::{Deserialize, Serialize};

use crate::core::Dimensions;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, LinePrimitive, PolygonPrimitive, PolylinePrimitive, RectPrimitive,
    TextPrimitive,
};

/// Hover group drawn relative to its own translation.
///
/// Every primitive inside is expressed in the group's local frame; a backend
/// offsets them by `(translate_x, translate_y)` on top of the plot origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusGroupFrame {
    pub visible: bool,
    pub translate_x: f64,
    pub translate_y: f64,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl FocusGroupFrame {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.translate_x.is_finite() || !self.translate_y.is_finite() {
            return Err(ChartError::InvalidData(
                "focus translation must be finite".to_owned(),
            ));
        }
        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Static elements live in plot coordinates; `plot_origin_*` is the margin
/// translation a backend applies before drawing them. Backends draw
/// polygons, lines, polylines, rects, circles and texts in that order, then
/// the focus group when it is visible. `overlay` is the transparent pointer
/// hit region and is never painted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub plot_origin_x: f64,
    pub plot_origin_y: f64,
    pub polygons: Vec<PolygonPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub focus: Option<FocusGroupFrame>,
    pub overlay: Option<RectPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            canvas_width: f64::from(dimensions.width),
            canvas_height: f64::from(dimensions.height),
            plot_origin_x: f64::from(dimensions.margins.left),
            plot_origin_y: f64::from(dimensions.margins.top),
            polygons: Vec::new(),
            lines: Vec::new(),
            polylines: Vec::new(),
            rects: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
            focus: None,
            overlay: None,
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.canvas_width.is_finite()
            || !self.canvas_height.is_finite()
            || self.canvas_width < 0.0
            || self.canvas_height < 0.0
        {
            return Err(ChartError::InvalidDimensions(format!(
                "canvas size must be finite and >= 0, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }

        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        if let Some(focus) = &self.focus {
            focus.validate()?;
        }
        if let Some(overlay) = self.overlay {
            overlay.validate()?;
        }

        Ok(())
    }

    /// `true` when nothing would be painted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
            && self.lines.is_empty()
            && self.polylines.is_empty()
            && self.rects.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
            && self.focus.as_ref().is_none_or(|focus| !focus.visible)
    }
}
