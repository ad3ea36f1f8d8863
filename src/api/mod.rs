mod axis_label_format;
mod axis_ticks;
mod engine;
mod engine_config;
mod engine_snapshot;
mod layout_controller;
mod render_style;
mod scene_builder;

pub use axis_label_format::{
    format_price_tick, format_time_tick, price_tick_precision, price_tick_precision_for_domain,
};
pub use axis_ticks::{
    TIME_TICK_INTERVALS, TimeUnit, floor_to_unit, linear_ticks, select_time_interval,
    tick_increment, tick_step, time_ticks,
};
pub use engine::ChartEngine;
pub use engine_config::{ChartEngineConfig, DEFAULT_TICK_COUNT};
pub use engine_snapshot::EngineSnapshot;
pub use layout_controller::{LayoutController, Scene, validate_extent};
pub use render_style::RenderStyle;
pub use scene_builder::{
    SceneOptions, X_AXIS_TITLE, Y_AXIS_TITLE, build_focus_group, build_static_frame, overlay_rect,
};
