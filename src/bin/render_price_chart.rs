//! Headless driver: loads a price csv, applies a canvas size, optionally
//! hovers a plot x position, and prints the engine snapshot as JSON.
//! With `cairo-backend` it can also write the frame to a PNG.

use std::path::PathBuf;

use hover_chart::api::{ChartEngine, ChartEngineConfig};
use hover_chart::data::load_price_csv;
use hover_chart::render::NullRenderer;

const DEFAULT_DATA_PATH: &str = "demos/data.csv";

#[derive(Debug)]
struct CliArgs {
    data_path: PathBuf,
    width: Option<String>,
    height: Option<String>,
    hover_x: Option<f64>,
    png_path: Option<PathBuf>,
}

fn main() {
    if !hover_chart::telemetry::init_tracing_with_default_filter("warn") {
        tracing::debug!("tracing subscriber not installed by render_price_chart");
    }
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let series = load_price_csv(&args.data_path).map_err(|err| {
        format!(
            "failed to load price data `{}`: {err}",
            args.data_path.display()
        )
    })?;

    let config = ChartEngineConfig::default();
    let mut engine = ChartEngine::new(NullRenderer::default(), config, series)
        .map_err(|err| format!("failed to initialize engine: {err}"))?;

    if let Some(width) = &args.width {
        engine
            .apply_width_input(width)
            .map_err(|err| format!("rejected width: {err}"))?;
    }
    if let Some(height) = &args.height {
        engine
            .apply_height_input(height)
            .map_err(|err| format!("rejected height: {err}"))?;
    }
    if let Some(x) = args.hover_x {
        engine.pointer_enter();
        engine.pointer_move(x, 0.0);
    }

    engine
        .render()
        .map_err(|err| format!("failed to render frame: {err}"))?;

    if let Some(png_path) = &args.png_path {
        write_png(&engine, png_path)?;
    }

    let json = engine
        .snapshot()
        .to_json_pretty()
        .map_err(|err| format!("failed to serialize snapshot: {err}"))?;
    println!("{json}");
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn write_png(
    engine: &ChartEngine<NullRenderer>,
    path: &std::path::Path,
) -> Result<(), String> {
    use hover_chart::render::{CairoRenderer, Renderer};

    let dimensions = engine.dimensions();
    let mut renderer = CairoRenderer::new(dimensions.width as i32, dimensions.height as i32)
        .map_err(|err| format!("failed to create cairo renderer: {err}"))?;
    renderer
        .render(&engine.frame())
        .map_err(|err| format!("failed to draw frame: {err}"))?;
    renderer
        .write_png(path)
        .map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

#[cfg(not(feature = "cairo-backend"))]
fn write_png(
    _engine: &ChartEngine<NullRenderer>,
    _path: &std::path::Path,
) -> Result<(), String> {
    Err("--png requires feature `cairo-backend`".to_owned())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut parsed = CliArgs {
        data_path: PathBuf::from(DEFAULT_DATA_PATH),
        width: None,
        height: None,
        hover_x: None,
        png_path: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match arg.as_str() {
            "--data" => parsed.data_path = PathBuf::from(value("--data")?),
            "--width" => parsed.width = Some(value("--width")?),
            "--height" => parsed.height = Some(value("--height")?),
            "--hover-x" => {
                let raw = value("--hover-x")?;
                let x = raw
                    .parse::<f64>()
                    .map_err(|_| format!("invalid --hover-x value `{raw}`"))?;
                parsed.hover_x = Some(x);
            }
            "--png" => parsed.png_path = Some(PathBuf::from(value("--png")?)),
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => return Err(format!("unknown argument `{arg}`")),
        }
    }
    Ok(parsed)
}

fn print_usage() {
    println!(
        "usage: render_price_chart [--data <csv>] [--width <px>] [--height <px>] \
         [--hover-x <plot px>] [--png <path>]"
    );
}
