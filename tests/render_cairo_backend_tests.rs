#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use hover_chart::ChartError;
use hover_chart::api::{ChartEngine, ChartEngineConfig};
use hover_chart::core::{DataPoint, Dimensions, PriceSeries};
use hover_chart::render::CairoRenderer;

fn three_days() -> PriceSeries {
    PriceSeries::new(vec![
        DataPoint::on_day(2012, 5, 1, 100.0).expect("valid point"),
        DataPoint::on_day(2012, 5, 2, 110.0).expect("valid point"),
        DataPoint::on_day(2012, 5, 3, 90.0).expect("valid point"),
    ])
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidDimensions(_)));
}

#[test]
fn cairo_renderer_draws_static_scene_and_focus() {
    let renderer = CairoRenderer::new(960, 500).expect("renderer");
    let mut engine = ChartEngine::new(renderer, ChartEngineConfig::default(), three_days())
        .expect("engine init");

    engine.render().expect("render");
    let expected_texts = engine.frame().texts.len();
    engine.pointer_move(445.0, 100.0);
    engine.render().expect("render with focus");

    let stats = engine.into_renderer().last_stats();
    assert_eq!(stats.polygons_drawn, 1);
    assert_eq!(stats.polylines_drawn, 1);
    assert!(stats.lines_drawn >= 11);
    assert_eq!(stats.texts_drawn, expected_texts);
    assert!(stats.focus_drawn);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(600, 320).expect("renderer");
    let config = ChartEngineConfig::new(Dimensions::new(600, 320));
    let mut engine = ChartEngine::new(renderer, config, three_days()).expect("engine init");

    let surface = ImageSurface::create(Format::ARgb32, 600, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .render_on_cairo_context(&context)
        .expect("render on context");

    let stats = engine.into_renderer().last_stats();
    assert!(stats.lines_drawn >= 11);
    assert!(!stats.focus_drawn);
}
