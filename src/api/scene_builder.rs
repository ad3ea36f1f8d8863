use crate::core::{Dimensions, PriceSeries, ScalePair, project_area_geometry, project_line_points};
use crate::error::ChartResult;
use crate::interaction::{FocusLayout, FocusPhase};
use crate::render::{
    CirclePrimitive, Color, FocusGroupFrame, LinePrimitive, PolygonPrimitive, PolylinePrimitive,
    RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::RenderStyle;
use super::axis_label_format::{format_price_tick, format_time_tick, price_tick_precision_for_domain};
use super::axis_ticks::{linear_ticks, time_ticks};

pub const X_AXIS_TITLE: &str = "Date";
pub const Y_AXIS_TITLE: &str = "Price";

// Baseline shifts applied to labels, as fractions of the font size.
const BELOW_ANCHOR_EM: f64 = 0.71;
const CENTERED_ON_ANCHOR_EM: f64 = 0.32;

/// Inputs that shape the static scene independently of the data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneOptions {
    pub x_tick_count: usize,
    pub y_tick_count: usize,
    pub show_area: bool,
    pub style: RenderStyle,
}

/// Builds every element that does not depend on the pointer: gridlines,
/// axis titles, the area fill, the value line, both axes and the overlay.
///
/// With no scales (empty data) only the titles are emitted. A degenerate plot
/// area yields a frame with nothing inside the plot and no overlay.
pub fn build_static_frame(
    series: &PriceSeries,
    scales: Option<ScalePair>,
    dimensions: Dimensions,
    options: SceneOptions,
) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(dimensions);
    if dimensions.is_degenerate() {
        return Ok(frame);
    }

    let plot_width = dimensions.plot_width();
    let plot_height = dimensions.plot_height();
    let style = options.style;

    let Some(scales) = scales else {
        push_axis_titles(&mut frame, plot_width, plot_height, style);
        return Ok(frame);
    };

    let (x_start, x_end) = scales.x.domain_millis();
    let x_ticks = time_ticks(x_start, x_end, options.x_tick_count)?;
    let y_domain = scales.y.domain();
    let y_ticks = linear_ticks(y_domain.0, y_domain.1, options.y_tick_count);

    let mut x_tick_pixels = Vec::with_capacity(x_ticks.len());
    for tick in &x_ticks {
        x_tick_pixels.push(scales.x.date_to_pixel(*tick)?);
    }
    let mut y_tick_pixels = Vec::with_capacity(y_ticks.len());
    for tick in &y_ticks {
        y_tick_pixels.push(scales.y.price_to_pixel(*tick)?);
    }

    for x in &x_tick_pixels {
        frame.lines.push(LinePrimitive::new(
            *x,
            plot_height,
            *x,
            0.0,
            style.grid_line_width,
            style.grid_line_color,
        ));
    }
    for y in &y_tick_pixels {
        frame.lines.push(LinePrimitive::new(
            0.0,
            *y,
            plot_width,
            *y,
            style.grid_line_width,
            style.grid_line_color,
        ));
    }
    push_axis_titles(&mut frame, plot_width, plot_height, style);

    let points = series.points();
    if options.show_area {
        let area = project_area_geometry(points, scales, plot_height)?;
        if !area.fill_polygon.is_empty() {
            frame
                .polygons
                .push(PolygonPrimitive::new(area.fill_polygon, style.area_fill_color));
        }
    }
    let line_points = project_line_points(points, scales)?;
    if !line_points.is_empty() {
        frame.polylines.push(PolylinePrimitive::new(
            line_points,
            style.line_width,
            style.line_color,
        ));
    }

    push_bottom_axis(&mut frame, &x_ticks, &x_tick_pixels, plot_width, plot_height, style);
    let precision = price_tick_precision_for_domain(y_domain, options.y_tick_count);
    push_left_axis(&mut frame, &y_ticks, &y_tick_pixels, precision, plot_height, style);

    if !series.is_empty() {
        frame.overlay = Some(overlay_rect(dimensions));
    }

    frame.validate()?;
    Ok(frame)
}

/// Transparent hit region covering the whole plot area.
#[must_use]
pub fn overlay_rect(dimensions: Dimensions) -> RectPrimitive {
    RectPrimitive::new(
        0.0,
        0.0,
        dimensions.plot_width().max(0.0),
        dimensions.plot_height().max(0.0),
        Color::transparent(),
    )
}

/// Converts the focus layout into drawable primitives in the group's local
/// frame.
#[must_use]
pub fn build_focus_group(
    layout: &FocusLayout,
    phase: FocusPhase,
    style: RenderStyle,
) -> FocusGroupFrame {
    let guide = |x2: f64, y2: f64| {
        LinePrimitive::new(0.0, 0.0, x2, y2, style.guide_line_width, style.guide_line_color)
            .with_stroke_style(style.guide_line_style)
    };
    let lines = vec![
        guide(0.0, layout.x_hover_line_y2),
        guide(layout.y_hover_line_x2, 0.0),
    ];

    let circles = vec![
        CirclePrimitive::new(0.0, 0.0, style.marker_radius_px, style.marker_fill_color)
            .with_stroke(style.marker_stroke_width, style.marker_stroke_color),
    ];

    let rects = vec![
        RectPrimitive::new(
            style.tooltip_box_x_px,
            style.tooltip_box_y_px(),
            style.tooltip_box_width_px,
            style.tooltip_box_height_px,
            style.tooltip_box_color,
        )
        .with_border(style.tooltip_box_border_width, style.tooltip_box_border_color)
        .with_corner_radius(style.tooltip_box_corner_radius_px),
    ];

    let mut texts = Vec::with_capacity(2);
    for (text, y) in [
        (&layout.date_text, style.tooltip_date_y_px()),
        (&layout.price_text, style.tooltip_price_y_px()),
    ] {
        if text.is_empty() {
            continue;
        }
        texts.push(TextPrimitive::new(
            text.clone(),
            style.tooltip_text_x_px,
            y,
            style.tooltip_font_size_px,
            style.tooltip_text_color,
            TextHAlign::Left,
        ));
    }

    FocusGroupFrame {
        visible: phase == FocusPhase::Visible,
        translate_x: layout.translate_x,
        translate_y: layout.translate_y,
        lines,
        circles,
        rects,
        texts,
    }
}

fn push_axis_titles(frame: &mut RenderFrame, plot_width: f64, plot_height: f64, style: RenderStyle) {
    let font = style.axis_title_font_size_px;
    frame.texts.push(TextPrimitive::new(
        X_AXIS_TITLE,
        plot_width - 30.0,
        plot_height - 20.0 + BELOW_ANCHOR_EM * font,
        font,
        style.axis_color,
        TextHAlign::Center,
    ));
    frame.texts.push(
        TextPrimitive::new(
            Y_AXIS_TITLE,
            -10.0,
            10.0 + BELOW_ANCHOR_EM * font,
            font,
            style.axis_color,
            TextHAlign::Right,
        )
        .with_rotation(-90.0),
    );
}

fn push_bottom_axis(
    frame: &mut RenderFrame,
    ticks: &[chrono::DateTime<chrono::Utc>],
    pixels: &[f64],
    plot_width: f64,
    plot_height: f64,
    style: RenderStyle,
) {
    let tick_size = style.axis_tick_size_px;
    let axis_line = |x1: f64, y1: f64, x2: f64, y2: f64| {
        LinePrimitive::new(x1, y1, x2, y2, style.axis_line_width, style.axis_color)
    };

    frame.lines.push(axis_line(0.0, plot_height, plot_width, plot_height));
    frame.lines.push(axis_line(0.0, plot_height, 0.0, plot_height + tick_size));
    frame
        .lines
        .push(axis_line(plot_width, plot_height, plot_width, plot_height + tick_size));

    let label_y = plot_height
        + tick_size.max(0.0)
        + style.axis_tick_padding_px
        + BELOW_ANCHOR_EM * style.axis_font_size_px;
    for (tick, x) in ticks.iter().zip(pixels) {
        frame.lines.push(axis_line(*x, plot_height, *x, plot_height + tick_size));
        frame.texts.push(TextPrimitive::new(
            format_time_tick(*tick),
            *x,
            label_y,
            style.axis_font_size_px,
            style.axis_color,
            TextHAlign::Center,
        ));
    }
}

fn push_left_axis(
    frame: &mut RenderFrame,
    ticks: &[f64],
    pixels: &[f64],
    precision: usize,
    plot_height: f64,
    style: RenderStyle,
) {
    let tick_size = style.axis_tick_size_px;
    let axis_line = |x1: f64, y1: f64, x2: f64, y2: f64| {
        LinePrimitive::new(x1, y1, x2, y2, style.axis_line_width, style.axis_color)
    };

    frame.lines.push(axis_line(0.0, 0.0, 0.0, plot_height));
    frame.lines.push(axis_line(-tick_size, 0.0, 0.0, 0.0));
    frame
        .lines
        .push(axis_line(-tick_size, plot_height, 0.0, plot_height));

    let label_x = -(tick_size.max(0.0) + style.axis_tick_padding_px);
    let baseline_shift = CENTERED_ON_ANCHOR_EM * style.axis_font_size_px;
    for (tick, y) in ticks.iter().zip(pixels) {
        frame.lines.push(axis_line(-tick_size, *y, 0.0, *y));
        frame.texts.push(TextPrimitive::new(
            format_price_tick(*tick, precision),
            label_x,
            *y + baseline_shift,
            style.axis_font_size_px,
            style.axis_color,
            TextHAlign::Right,
        ));
    }
}
