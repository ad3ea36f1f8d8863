//! hover-chart: closing-price chart with an interactive hover tooltip.
//!
//! Geometry (scales, nearest-point lookup, focus layout) is computed in
//! `core` and `interaction` without any drawing surface. `api` assembles the
//! results into a backend-agnostic `render::RenderFrame` and owns the
//! resize/rebuild lifecycle.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartEngine, ChartEngineConfig, LayoutController};
pub use error::{ChartError, ChartResult};
