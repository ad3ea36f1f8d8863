#[cfg(feature = "gtk4-adapter")]
fn main() {
    use gtk4 as gtk;
    use gtk4::prelude::*;

    use hover_chart::api::{ChartEngine, ChartEngineConfig};
    use hover_chart::data::load_price_csv;
    use hover_chart::platform_gtk::GtkChartAdapter;
    use hover_chart::render::CairoRenderer;

    if !hover_chart::telemetry::init_default_tracing() {
        tracing::debug!("tracing subscriber not installed by gtk_price_chart");
    }

    let data_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/demos/data.csv").to_owned());

    // GTK parses argv itself; the csv path must not reach it.
    let app = gtk::Application::builder()
        .application_id("rs.hover_chart.demos.gtk_price_chart")
        .build();

    app.connect_activate(move |app| {
        let series = match load_price_csv(&data_path) {
            Ok(series) => series,
            Err(err) => {
                eprintln!("failed to load {data_path}: {err}");
                return;
            }
        };

        let config = ChartEngineConfig::default();
        let canvas = config.dimensions;
        let renderer = match CairoRenderer::new(canvas.width as i32, canvas.height as i32) {
            Ok(renderer) => renderer,
            Err(err) => {
                eprintln!("failed to create renderer: {err}");
                return;
            }
        };
        let engine = match ChartEngine::new(renderer, config, series) {
            Ok(engine) => engine,
            Err(err) => {
                eprintln!("failed to initialize engine: {err}");
                return;
            }
        };

        let adapter = GtkChartAdapter::new(engine);
        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title("hover-chart | closing prices")
            .default_width(canvas.width as i32 + 40)
            .default_height(canvas.height as i32 + 80)
            .build();
        window.set_child(Some(adapter.widget()));
        window.present();
    });

    let _ = app.run_with_args::<&str>(&[]);
}

#[cfg(not(feature = "gtk4-adapter"))]
fn main() {
    println!("run with: cargo run --features desktop --example gtk_price_chart [data.csv]");
}
