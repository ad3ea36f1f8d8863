use tracing::trace;

use crate::core::{Dimensions, Margins, PriceSeries, ScalePair};
use crate::error::ChartResult;
use crate::interaction::{FocusLayout, FocusPhase, FocusState, PointerEvent};
use crate::render::{RenderFrame, Renderer};

use super::scene_builder::SceneOptions;
use super::{ChartEngineConfig, EngineSnapshot, LayoutController, RenderStyle};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the price series, the layout (scales, static scene and
/// focus) and the renderer. Host toolkits feed it size changes and pointer
/// events in canvas coordinates and ask it to render.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    layout: LayoutController,
    pointer_inside: bool,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig, series: PriceSeries) -> ChartResult<Self> {
        let config = config.validate()?;
        let layout = LayoutController::new(series, config.dimensions, scene_options(config));
        Ok(Self {
            renderer,
            config,
            layout,
            pointer_inside: false,
        })
    }

    /// Config reflecting the current dimensions.
    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        ChartEngineConfig {
            dimensions: self.layout.dimensions(),
            ..self.config
        }
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.layout.dimensions()
    }

    #[must_use]
    pub fn series(&self) -> &PriceSeries {
        self.layout.series()
    }

    #[must_use]
    pub fn scales(&self) -> Option<ScalePair> {
        self.layout.scales()
    }

    #[must_use]
    pub fn layout(&self) -> &LayoutController {
        &self.layout
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.config.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        style.validate()?;
        self.config.style = style;
        self.layout.set_options(scene_options(self.config))
    }

    pub fn set_data(&mut self, series: PriceSeries) {
        self.layout.set_series(series);
    }

    pub fn set_width(&mut self, width: f64) -> ChartResult<()> {
        self.layout.set_width(width)
    }

    pub fn set_height(&mut self, height: f64) -> ChartResult<()> {
        self.layout.set_height(height)
    }

    pub fn apply_width_input(&mut self, input: &str) -> ChartResult<()> {
        self.layout.apply_width_input(input)
    }

    pub fn apply_height_input(&mut self, input: &str) -> ChartResult<()> {
        self.layout.apply_height_input(input)
    }

    pub fn set_margins(&mut self, margins: Margins) {
        self.layout.set_margins(margins);
    }

    pub fn rebuild(&mut self, dimensions: Dimensions) {
        self.layout.rebuild(dimensions);
    }

    /// Converts a canvas position into plot coordinates.
    #[must_use]
    pub fn canvas_to_plot(&self, canvas_x: f64, canvas_y: f64) -> (f64, f64) {
        let margins = self.layout.dimensions().margins;
        (
            canvas_x - f64::from(margins.left),
            canvas_y - f64::from(margins.top),
        )
    }

    /// `true` when the plot-space point lies on the installed overlay.
    #[must_use]
    pub fn overlay_contains(&self, x: f64, y: f64) -> bool {
        self.layout
            .scene()
            .frame
            .overlay
            .is_some_and(|overlay| overlay.contains(x, y))
    }

    pub fn pointer_enter(&mut self) {
        self.layout.dispatch_pointer(PointerEvent::Enter);
    }

    pub fn pointer_leave(&mut self) {
        self.layout.dispatch_pointer(PointerEvent::Leave);
    }

    /// Pointer move in plot coordinates.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.layout.dispatch_pointer(PointerEvent::Move { x, y });
    }

    /// Pointer position in canvas coordinates, as delivered by host toolkits.
    ///
    /// Only positions over the overlay reach the focus controller. Crossing
    /// the overlay border is reported as enter/leave.
    pub fn pointer_move_canvas(&mut self, canvas_x: f64, canvas_y: f64) {
        let (x, y) = self.canvas_to_plot(canvas_x, canvas_y);
        let inside = self.overlay_contains(x, y);
        trace!(canvas_x, canvas_y, x, y, inside, "pointer moved over canvas");

        match (self.pointer_inside, inside) {
            (false, true) => self.pointer_enter(),
            (true, false) => self.pointer_leave(),
            _ => {}
        }
        self.pointer_inside = inside;
        if inside {
            self.pointer_move(x, y);
        }
    }

    /// Pointer left the canvas entirely.
    pub fn pointer_leave_canvas(&mut self) {
        if self.pointer_inside {
            self.pointer_inside = false;
            self.pointer_leave();
        }
    }

    #[must_use]
    pub fn focus_state(&self) -> FocusState {
        self.layout.focus_state()
    }

    #[must_use]
    pub fn focus_layout(&self) -> Option<(&FocusLayout, FocusPhase)> {
        self.layout.focus_layout()
    }

    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        self.layout.frame()
    }

    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let scales = self.layout.scales();
        EngineSnapshot {
            dimensions: self.layout.dimensions(),
            time_domain: scales.map(|scales| scales.x.domain_millis()),
            price_domain: scales.map(|scales| scales.y.domain()),
            points: self.layout.series().points().to_vec(),
            focus: self.layout.focus_state(),
            focus_layout: self.layout.focus().map(|focus| focus.layout().clone()),
            overlay_installed: self.layout.focus().is_some(),
            frame: self.layout.frame(),
        }
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.layout.frame();
        frame.validate()?;
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.layout.frame();
        frame.validate()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

fn scene_options(config: ChartEngineConfig) -> SceneOptions {
    SceneOptions {
        x_tick_count: config.x_tick_count,
        y_tick_count: config.y_tick_count,
        show_area: config.show_area,
        style: config.style,
    }
}
