use tracing::{debug, warn};

use crate::core::{Dimensions, Margins, PriceSeries, ScalePair};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{FocusController, FocusLayout, FocusPhase, FocusState, PointerEvent};
use crate::render::RenderFrame;

use super::scene_builder::{SceneOptions, build_focus_group, build_static_frame};

/// Everything produced by one rebuild.
///
/// A scene is replaced as a whole; nothing from the previous scene survives a
/// rebuild, which keeps repeated rebuilds from stacking elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub dimensions: Dimensions,
    pub scales: Option<ScalePair>,
    pub frame: RenderFrame,
    pub focus: Option<FocusController>,
}

/// Owns the data, the current dimensions and the scene built from them.
///
/// Every dimension change funnels through [`LayoutController::rebuild`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutController {
    series: PriceSeries,
    options: SceneOptions,
    scene: Scene,
}

impl LayoutController {
    #[must_use]
    pub fn new(series: PriceSeries, dimensions: Dimensions, options: SceneOptions) -> Self {
        let scene = build_scene(&series, dimensions, options);
        Self {
            series,
            options,
            scene,
        }
    }

    #[must_use]
    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.scene.dimensions
    }

    #[must_use]
    pub fn options(&self) -> SceneOptions {
        self.options
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn scales(&self) -> Option<ScalePair> {
        self.scene.scales
    }

    #[must_use]
    pub fn focus(&self) -> Option<&FocusController> {
        self.scene.focus.as_ref()
    }

    #[must_use]
    pub fn focus_state(&self) -> FocusState {
        self.scene
            .focus
            .as_ref()
            .map(FocusController::state)
            .unwrap_or_default()
    }

    /// Tears down the current scene and builds a new one for `dimensions`.
    ///
    /// Scales are recomputed from the data, every static element is redrawn,
    /// the overlay is reinstalled and focus starts over hidden. An empty
    /// series still produces a (visibly empty) scene.
    pub fn rebuild(&mut self, dimensions: Dimensions) {
        self.scene = build_scene(&self.series, dimensions, self.options);
    }

    /// Replaces the data and rebuilds at the current dimensions.
    pub fn set_series(&mut self, series: PriceSeries) {
        self.series = series;
        self.rebuild(self.scene.dimensions);
    }

    pub fn set_options(&mut self, options: SceneOptions) -> ChartResult<()> {
        options.style.validate()?;
        self.options = options;
        self.rebuild(self.scene.dimensions);
        Ok(())
    }

    pub fn set_width(&mut self, width: f64) -> ChartResult<()> {
        let width = validate_extent(width, "width")
            .inspect_err(|err| warn!(error = %err, "width change rejected"))?;
        self.rebuild(self.scene.dimensions.with_width(width));
        Ok(())
    }

    pub fn set_height(&mut self, height: f64) -> ChartResult<()> {
        let height = validate_extent(height, "height")
            .inspect_err(|err| warn!(error = %err, "height change rejected"))?;
        self.rebuild(self.scene.dimensions.with_height(height));
        Ok(())
    }

    /// Applies a width typed into a host text control.
    pub fn apply_width_input(&mut self, input: &str) -> ChartResult<()> {
        self.set_width(parse_extent(input, "width")?)
    }

    /// Applies a height typed into a host text control.
    pub fn apply_height_input(&mut self, input: &str) -> ChartResult<()> {
        self.set_height(parse_extent(input, "height")?)
    }

    pub fn set_margins(&mut self, margins: Margins) {
        self.rebuild(self.scene.dimensions.with_margins(margins));
    }

    /// Routes a pointer event to the focus controller, if one is installed.
    ///
    /// Without an overlay (no data or a degenerate plot) events are ignored.
    pub fn dispatch_pointer(&mut self, event: PointerEvent) {
        let Self { series, scene, .. } = self;
        match scene.focus.as_mut() {
            Some(focus) => focus.handle(series, event),
            None => debug!(?event, "pointer event without overlay ignored"),
        }
    }

    /// Static scene plus the focus group in its current state.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        let mut frame = self.scene.frame.clone();
        frame.focus = self.scene.focus.as_ref().map(|focus| {
            build_focus_group(focus.layout(), focus.phase(), self.options.style)
        });
        frame
    }

    /// Focus layout for hosts that draw the hover group themselves.
    #[must_use]
    pub fn focus_layout(&self) -> Option<(&FocusLayout, FocusPhase)> {
        self.scene
            .focus
            .as_ref()
            .map(|focus| (focus.layout(), focus.phase()))
    }
}

fn build_scene(series: &PriceSeries, dimensions: Dimensions, options: SceneOptions) -> Scene {
    let scales = match ScalePair::from_series(series, dimensions) {
        Ok(scales) => Some(scales),
        Err(err) => {
            warn!(error = %err, "rendering chart without scales");
            None
        }
    };

    let frame = match build_static_frame(series, scales, dimensions, options) {
        Ok(frame) => frame,
        Err(err) => {
            warn!(error = %err, "static scene rejected, rendering empty frame");
            RenderFrame::new(dimensions)
        }
    };

    let focus = match (scales, frame.overlay) {
        (Some(scales), Some(_)) => Some(FocusController::install(scales, dimensions)),
        _ => None,
    };

    if dimensions.is_degenerate() {
        warn!(
            width = dimensions.width,
            height = dimensions.height,
            "plot area is empty, overlay not installed"
        );
    }
    debug!(
        width = dimensions.width,
        height = dimensions.height,
        points = series.len(),
        overlay = focus.is_some(),
        "chart rebuilt"
    );

    Scene {
        dimensions,
        scales,
        frame,
        focus,
    }
}

/// Checks a requested canvas extent and rounds it to whole pixels.
pub fn validate_extent(value: f64, axis: &str) -> ChartResult<u32> {
    if !value.is_finite() {
        return Err(ChartError::InvalidDimensions(format!(
            "{axis} must be a finite number, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(ChartError::InvalidDimensions(format!(
            "{axis} must be >= 0, got {value}"
        )));
    }
    let rounded = value.round();
    if rounded > f64::from(u32::MAX) {
        return Err(ChartError::InvalidDimensions(format!(
            "{axis} does not fit a pixel count, got {value}"
        )));
    }
    // Range checked above, the cast cannot truncate.
    Ok(rounded as u32)
}

fn parse_extent(input: &str, axis: &str) -> ChartResult<f64> {
    let trimmed = input.trim();
    trimmed.parse::<f64>().map_err(|_| {
        warn!(axis, input = trimmed, "non-numeric size input rejected");
        ChartError::InvalidDimensions(format!("{axis} input `{trimmed}` is not a number"))
    })
}
