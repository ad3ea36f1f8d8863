use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, Dimensions};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{FocusLayout, FocusState};
use crate::render::RenderFrame;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub dimensions: Dimensions,
    pub time_domain: Option<(f64, f64)>,
    pub price_domain: Option<(f64, f64)>,
    pub points: Vec<DataPoint>,
    pub focus: FocusState,
    pub focus_layout: Option<FocusLayout>,
    pub overlay_installed: bool,
    pub frame: RenderFrame,
}

impl EngineSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse snapshot json: {e}")))
    }
}
