use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle};

/// Visual settings for every element the scene builder emits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub axis_color: Color,
    pub axis_line_width: f64,
    pub axis_font_size_px: f64,
    pub axis_tick_size_px: f64,
    pub axis_tick_padding_px: f64,
    pub axis_title_font_size_px: f64,
    pub line_color: Color,
    pub line_width: f64,
    pub area_fill_color: Color,
    pub guide_line_color: Color,
    pub guide_line_width: f64,
    pub guide_line_style: LineStrokeStyle,
    pub marker_radius_px: f64,
    pub marker_fill_color: Color,
    pub marker_stroke_color: Color,
    pub marker_stroke_width: f64,
    pub tooltip_box_x_px: f64,
    pub tooltip_box_width_px: f64,
    pub tooltip_box_height_px: f64,
    pub tooltip_box_corner_radius_px: f64,
    pub tooltip_box_color: Color,
    pub tooltip_box_border_color: Color,
    pub tooltip_box_border_width: f64,
    pub tooltip_text_x_px: f64,
    pub tooltip_font_size_px: f64,
    pub tooltip_text_color: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            grid_line_color: Color::rgba(0.827, 0.827, 0.827, 0.7),
            grid_line_width: 1.0,
            axis_color: Color::rgb(0.0, 0.0, 0.0),
            axis_line_width: 1.0,
            axis_font_size_px: 10.0,
            axis_tick_size_px: 6.0,
            axis_tick_padding_px: 3.0,
            axis_title_font_size_px: 12.0,
            line_color: Color::rgb(0.275, 0.510, 0.706),
            line_width: 2.0,
            area_fill_color: Color::rgba(0.690, 0.769, 0.871, 0.4),
            guide_line_color: Color::rgba(0.2, 0.2, 0.2, 0.8),
            guide_line_width: 1.0,
            guide_line_style: LineStrokeStyle::Dashed,
            marker_radius_px: 6.0,
            marker_fill_color: Color::rgb(1.0, 1.0, 1.0),
            marker_stroke_color: Color::rgb(0.275, 0.510, 0.706),
            marker_stroke_width: 2.0,
            tooltip_box_x_px: 20.0,
            tooltip_box_width_px: 200.0,
            tooltip_box_height_px: 60.0,
            tooltip_box_corner_radius_px: 5.0,
            tooltip_box_color: Color::rgba(1.0, 1.0, 1.0, 0.9),
            tooltip_box_border_color: Color::rgb(0.6, 0.6, 0.6),
            tooltip_box_border_width: 1.0,
            tooltip_text_x_px: 25.0,
            tooltip_font_size_px: 16.0,
            tooltip_text_color: Color::rgb(0.1, 0.1, 0.1),
        }
    }
}

impl RenderStyle {
    /// Vertical offset of the tooltip backdrop: four text lines above the marker.
    #[must_use]
    pub fn tooltip_box_y_px(self) -> f64 {
        -4.0 * self.tooltip_font_size_px
    }

    /// Baseline of the date line, one line above the marker.
    #[must_use]
    pub fn tooltip_date_y_px(self) -> f64 {
        -self.tooltip_font_size_px
    }

    /// Baseline of the price line, drawn 1.2 lines above the date line.
    #[must_use]
    pub fn tooltip_price_y_px(self) -> f64 {
        self.tooltip_date_y_px() - 1.2 * self.tooltip_font_size_px
    }

    pub fn validate(self) -> ChartResult<()> {
        for color in [
            self.grid_line_color,
            self.axis_color,
            self.line_color,
            self.area_fill_color,
            self.guide_line_color,
            self.marker_fill_color,
            self.marker_stroke_color,
            self.tooltip_box_color,
            self.tooltip_box_border_color,
            self.tooltip_text_color,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("grid_line_width", self.grid_line_width),
            ("axis_line_width", self.axis_line_width),
            ("axis_font_size_px", self.axis_font_size_px),
            ("axis_title_font_size_px", self.axis_title_font_size_px),
            ("line_width", self.line_width),
            ("guide_line_width", self.guide_line_width),
            ("marker_radius_px", self.marker_radius_px),
            ("tooltip_font_size_px", self.tooltip_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("axis_tick_size_px", self.axis_tick_size_px),
            ("axis_tick_padding_px", self.axis_tick_padding_px),
            ("marker_stroke_width", self.marker_stroke_width),
            ("tooltip_box_width_px", self.tooltip_box_width_px),
            ("tooltip_box_height_px", self.tooltip_box_height_px),
            ("tooltip_box_corner_radius_px", self.tooltip_box_corner_radius_px),
            ("tooltip_box_border_width", self.tooltip_box_border_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and >= 0"
                )));
            }
        }

        if !self.tooltip_box_x_px.is_finite() || !self.tooltip_text_x_px.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip offsets must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
