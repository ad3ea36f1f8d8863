use chrono::Duration;
use criterion::{Criterion, criterion_group, criterion_main};
use hover_chart::api::{ChartEngine, ChartEngineConfig, LayoutController, SceneOptions};
use hover_chart::core::{
    DataPoint, Dimensions, LinearScale, PriceSeries, ScalePair, nearest_point, utc_midnight,
};
use hover_chart::render::NullRenderer;
use std::hint::black_box;

fn daily_series(len: usize) -> PriceSeries {
    let start = utc_midnight(2000, 1, 1).expect("valid start date");
    let points = (0..len)
        .map(|i| {
            let t = i as f64;
            DataPoint::new(
                start + Duration::days(i as i64),
                100.0 + (t * 0.07).sin() * 25.0 + t * 0.01,
            )
        })
        .collect::<Vec<_>>();
    PriceSeries::new(points)
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 10_000.0), (0.0, 1_920.0)).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.domain_to_pixel(black_box(4_321.123)).expect("to pixel");
            let _ = scale.pixel_to_domain(px).expect("from pixel");
        })
    });
}

fn bench_nearest_point_10k(c: &mut Criterion) {
    let series = daily_series(10_000);
    let scales = ScalePair::from_series(&series, Dimensions::default()).expect("scales");

    c.bench_function("nearest_point_10k", |b| {
        let mut x = 0.0;
        b.iter(|| {
            x = (x + 7.3) % 890.0;
            let target = scales.invert_x(black_box(x)).expect("invert");
            let _ = nearest_point(black_box(series.points()), target).expect("lookup");
        })
    });
}

fn bench_rebuild_2k(c: &mut Criterion) {
    let config = ChartEngineConfig::default();
    let options = SceneOptions {
        x_tick_count: config.x_tick_count,
        y_tick_count: config.y_tick_count,
        show_area: config.show_area,
        style: config.style,
    };
    let mut layout = LayoutController::new(daily_series(2_000), config.dimensions, options);

    c.bench_function("layout_rebuild_2k", |b| {
        let mut width = 960_u32;
        b.iter(|| {
            width = if width >= 1_600 { 640 } else { width + 10 };
            layout.rebuild(black_box(config.dimensions.with_width(width)));
        })
    });
}

fn bench_engine_snapshot_json_2k(c: &mut Criterion) {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Dimensions::new(1600, 900)),
        daily_series(2_000),
    )
    .expect("engine init");
    engine.pointer_enter();
    engine.pointer_move(400.0, 200.0);

    c.bench_function("engine_snapshot_json_2k", |b| {
        b.iter(|| {
            let _ = engine
                .snapshot()
                .to_json_pretty()
                .expect("snapshot serialization");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_nearest_point_10k,
    bench_rebuild_2k,
    bench_engine_snapshot_json_2k
);
criterion_main!(benches);
