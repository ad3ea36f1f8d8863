use serde::{Deserialize, Serialize};

use crate::core::{Dimensions, Margins};
use crate::error::{ChartError, ChartResult};

use super::RenderStyle;

pub const DEFAULT_TICK_COUNT: usize = 5;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub dimensions: Dimensions,
    #[serde(default = "default_tick_count")]
    pub x_tick_count: usize,
    #[serde(default = "default_tick_count")]
    pub y_tick_count: usize,
    #[serde(default = "default_show_area")]
    pub show_area: bool,
    #[serde(default)]
    pub style: RenderStyle,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            x_tick_count: DEFAULT_TICK_COUNT,
            y_tick_count: DEFAULT_TICK_COUNT,
            show_area: default_show_area(),
            style: RenderStyle::default(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.dimensions.margins = margins;
        self
    }

    #[must_use]
    pub fn with_tick_counts(mut self, x_tick_count: usize, y_tick_count: usize) -> Self {
        self.x_tick_count = x_tick_count;
        self.y_tick_count = y_tick_count;
        self
    }

    #[must_use]
    pub fn with_show_area(mut self, show_area: bool) -> Self {
        self.show_area = show_area;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.style.validate()?;
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()
    }
}

fn default_tick_count() -> usize {
    DEFAULT_TICK_COUNT
}

fn default_show_area() -> bool {
    true
}
