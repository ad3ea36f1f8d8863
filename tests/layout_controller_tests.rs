use hover_chart::api::{ChartEngineConfig, LayoutController, SceneOptions, X_AXIS_TITLE, Y_AXIS_TITLE};
use hover_chart::core::{DataPoint, Dimensions, Margins, PriceSeries};
use hover_chart::error::ChartError;
use hover_chart::interaction::{FocusPhase, PointerEvent};

fn options() -> SceneOptions {
    let config = ChartEngineConfig::default();
    SceneOptions {
        x_tick_count: config.x_tick_count,
        y_tick_count: config.y_tick_count,
        show_area: config.show_area,
        style: config.style,
    }
}

fn three_days() -> PriceSeries {
    PriceSeries::new(vec![
        DataPoint::on_day(2012, 5, 1, 100.0).expect("valid point"),
        DataPoint::on_day(2012, 5, 2, 110.0).expect("valid point"),
        DataPoint::on_day(2012, 5, 3, 90.0).expect("valid point"),
    ])
}

fn controller() -> LayoutController {
    LayoutController::new(three_days(), Dimensions::default(), options())
}

#[test]
fn initial_build_installs_scales_and_overlay() {
    let layout = controller();
    assert!(layout.scales().is_some());
    assert!(layout.focus().is_some());

    let overlay = layout.scene().frame.overlay.expect("overlay installed");
    assert_eq!((overlay.x, overlay.y), (0.0, 0.0));
    assert_eq!((overlay.width, overlay.height), (890.0, 450.0));
    assert_eq!(overlay.fill_color.alpha, 0.0);
}

#[test]
fn rebuild_is_idempotent() {
    let mut layout = controller();
    let before = layout.clone();

    layout.rebuild(Dimensions::default());
    assert_eq!(layout, before);
    layout.rebuild(Dimensions::default());
    assert_eq!(layout.frame(), before.frame());
}

#[test]
fn repeated_rebuilds_do_not_stack_elements() {
    let mut layout = controller();
    let lines = layout.frame().lines.len();
    let texts = layout.frame().texts.len();

    for width in [800.0, 960.0, 1200.0, 960.0] {
        layout.set_width(width).expect("valid width");
    }
    assert_eq!(layout.frame().lines.len(), lines);
    assert_eq!(layout.frame().texts.len(), texts);
    assert_eq!(layout.frame().polylines.len(), 1);
}

#[test]
fn set_width_rescales_x_axis() {
    let mut layout = controller();
    layout.set_width(1200.0).expect("valid width");

    assert_eq!(layout.dimensions().width, 1200);
    let scales = layout.scales().expect("scales");
    assert_eq!(scales.x.range(), (0.0, 1130.0));
    let overlay = layout.scene().frame.overlay.expect("overlay");
    assert_eq!(overlay.width, 1130.0);
}

#[test]
fn large_sizes_have_no_upper_limit() {
    let mut layout = controller();
    layout.set_width(12_000.0).expect("large width");
    layout.apply_height_input("15000").expect("large height input");

    assert_eq!(layout.dimensions(), Dimensions::new(12_000, 15_000));
    let scales = layout.scales().expect("scales");
    assert_eq!(scales.x.range(), (0.0, 11_930.0));
    assert!(layout.scene().frame.overlay.is_some());
}

#[test]
fn set_height_rescales_y_axis() {
    let mut layout = controller();
    layout.set_height(650.0).expect("valid height");

    assert_eq!(layout.dimensions().height, 650);
    assert_eq!(layout.scales().expect("scales").y.range(), (600.0, 0.0));
}

#[test]
fn fractional_sizes_are_rounded() {
    let mut layout = controller();
    layout.set_width(1000.6).expect("valid width");
    assert_eq!(layout.dimensions().width, 1001);

    layout.apply_height_input(" 480.2 ").expect("valid height input");
    assert_eq!(layout.dimensions().height, 480);
}

#[test]
fn invalid_sizes_are_rejected_and_keep_previous_state() {
    let mut layout = controller();
    let before = layout.clone();

    for bad in [-1.0, f64::NAN, f64::INFINITY, 1.0e12] {
        let err = layout.set_width(bad).expect_err("invalid width");
        assert!(matches!(err, ChartError::InvalidDimensions(_)));
        let err = layout.set_height(bad).expect_err("invalid height");
        assert!(matches!(err, ChartError::InvalidDimensions(_)));
    }
    for bad in ["", "abc", "12px", "-5"] {
        assert!(layout.apply_width_input(bad).is_err());
        assert!(layout.apply_height_input(bad).is_err());
    }

    assert_eq!(layout, before);
}

#[test]
fn rebuild_resets_focus_to_hidden() {
    let mut layout = controller();
    layout.dispatch_pointer(PointerEvent::Enter);
    layout.dispatch_pointer(PointerEvent::Move { x: 445.0, y: 100.0 });
    assert!(layout.focus_state().visible);

    layout.set_width(1000.0).expect("valid width");
    let state = layout.focus_state();
    assert!(!state.visible);
    assert_eq!(state.current_point, None);
    let (focus_layout, phase) = layout.focus_layout().expect("focus installed");
    assert_eq!(phase, FocusPhase::Hidden);
    assert_eq!(focus_layout.translate_x, 0.0);
}

#[test]
fn margins_change_plot_area() {
    let mut layout = controller();
    layout.set_margins(Margins {
        top: 10,
        right: 10,
        bottom: 10,
        left: 10,
    });
    assert_eq!(layout.dimensions().plot_width(), 940.0);
    assert_eq!(layout.dimensions().plot_height(), 480.0);
    assert_eq!(layout.frame().plot_origin_x, 10.0);
}

#[test]
fn empty_series_renders_visibly_empty_chart() {
    let mut layout = LayoutController::new(PriceSeries::default(), Dimensions::default(), options());

    assert!(layout.scales().is_none());
    assert!(layout.focus().is_none());

    let frame = layout.frame();
    assert!(frame.overlay.is_none());
    assert!(frame.focus.is_none());
    assert!(frame.polylines.is_empty());
    assert!(frame.polygons.is_empty());
    assert!(frame.lines.is_empty());
    let titles: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(titles, vec![X_AXIS_TITLE, Y_AXIS_TITLE]);

    // Pointer input is ignored rather than failing.
    layout.dispatch_pointer(PointerEvent::Move { x: 10.0, y: 10.0 });
    assert!(!layout.focus_state().visible);
}

#[test]
fn set_series_rebuilds_with_new_data() {
    let mut layout = LayoutController::new(PriceSeries::default(), Dimensions::default(), options());
    layout.set_series(three_days());

    assert!(layout.focus().is_some());
    assert_eq!(layout.frame().polylines[0].points.len(), 3);
}

#[test]
fn degenerate_plot_has_no_overlay() {
    let mut layout = controller();
    layout.set_width(60.0).expect("width within range");

    assert!(layout.dimensions().is_degenerate());
    assert!(layout.focus().is_none());
    let frame = layout.frame();
    assert!(frame.overlay.is_none());
    assert!(frame.is_empty());

    layout.set_width(960.0).expect("valid width");
    assert!(layout.focus().is_some());
}
