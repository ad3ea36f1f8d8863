use approx::assert_abs_diff_eq;
use hover_chart::core::{DataPoint, Dimensions, PriceSeries, ScalePair, utc_midnight};
use hover_chart::interaction::{
    FocusController, FocusLayout, FocusPhase, PointerEvent, format_tooltip_date,
    format_tooltip_price, tooltip_date_line, tooltip_price_line,
};

fn three_days() -> PriceSeries {
    PriceSeries::new(vec![
        DataPoint::on_day(2012, 5, 1, 100.0).expect("valid point"),
        DataPoint::on_day(2012, 5, 2, 110.0).expect("valid point"),
        DataPoint::on_day(2012, 5, 3, 90.0).expect("valid point"),
    ])
}

fn installed() -> (PriceSeries, FocusController) {
    let series = three_days();
    let dimensions = Dimensions::default();
    let scales = ScalePair::from_series(&series, dimensions).expect("scales");
    (series, FocusController::install(scales, dimensions))
}

#[test]
fn starts_hidden_with_full_span_guides() {
    let (_, focus) = installed();
    assert_eq!(focus.phase(), FocusPhase::Hidden);
    assert!(!focus.state().visible);
    assert_eq!(focus.state().current_point, None);
    assert_eq!(focus.layout(), &FocusLayout::initial(890.0, 450.0));
    assert_eq!(focus.layout().x_hover_line_y2, 450.0);
    assert_eq!(focus.layout().y_hover_line_x2, 890.0);
}

#[test]
fn enter_shows_and_leave_hides() {
    let (series, mut focus) = installed();

    focus.handle(&series, PointerEvent::Enter);
    assert_eq!(focus.phase(), FocusPhase::Visible);
    assert_eq!(focus.state().current_point, None);

    focus.handle(&series, PointerEvent::Move { x: 445.0, y: 10.0 });
    assert!(focus.state().current_point.is_some());
    assert_eq!(focus.cursor(), Some((445.0, 10.0)));

    focus.handle(&series, PointerEvent::Leave);
    assert_eq!(focus.phase(), FocusPhase::Hidden);
    assert_eq!(focus.state().current_point, None);
    assert_eq!(focus.cursor(), None);
}

#[test]
fn move_while_hidden_becomes_visible() {
    let (series, mut focus) = installed();
    focus.pointer_move(&series, 100.0, 100.0);
    assert_eq!(focus.phase(), FocusPhase::Visible);
}

#[test]
fn move_places_group_and_guides_at_nearest_point() {
    let (series, mut focus) = installed();
    let scales = focus.scales();

    focus.pointer_enter();
    focus.pointer_move(&series, 890.0 * 18.0 / 48.0, 200.0);

    let point = focus.state().current_point.expect("focused point");
    assert_eq!(point.date, utc_midnight(2012, 5, 2).expect("date"));
    assert_eq!(point.price, 110.0);

    let (lo, hi) = scales.y.domain();
    let expected_y = 450.0 * (1.0 - (110.0 - lo) / (hi - lo));
    let layout = focus.layout();
    assert_abs_diff_eq!(layout.translate_x, 445.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.translate_y, expected_y, epsilon = 1e-9);

    // Vertical guide: down by `height - y`; horizontal guide: left by `x`.
    assert_abs_diff_eq!(layout.x_hover_line_y2, 450.0 - expected_y, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.y_hover_line_x2, -445.0, epsilon = 1e-9);
}

#[test]
fn tooltip_text_matches_focused_point() {
    let (series, mut focus) = installed();
    focus.pointer_move(&series, 445.0, 0.0);

    assert_eq!(focus.layout().date_text, "Date: Wed May 02 2012");
    assert_eq!(focus.layout().price_text, "Price: 110");
}

#[test]
fn y_coordinate_does_not_affect_lookup() {
    let (series, mut focus) = installed();
    focus.pointer_move(&series, 10.0, 0.0);
    let top = focus.state().current_point;
    focus.pointer_move(&series, 10.0, 449.0);
    assert_eq!(focus.state().current_point, top);
}

#[test]
fn lookup_failure_hides_focus_without_panicking() {
    let (_, mut focus) = installed();
    focus.pointer_enter();
    focus.pointer_move(&PriceSeries::default(), 100.0, 100.0);
    assert_eq!(focus.phase(), FocusPhase::Hidden);
    assert_eq!(focus.state().current_point, None);
}

#[test]
fn tooltip_formatters_follow_display_rules() {
    let date = utc_midnight(2012, 5, 1).expect("date");
    assert_eq!(format_tooltip_date(date), "Tue May 01 2012");
    assert_eq!(tooltip_date_line(date), "Date: Tue May 01 2012");
    assert_eq!(format_tooltip_price(58.13), "58.13");
    assert_eq!(format_tooltip_price(100.0), "100");
    assert_eq!(tooltip_price_line(605.5), "Price: 605.5");
}

#[test]
fn tooltip_price_switches_to_exponent_form_at_the_extremes() {
    assert_eq!(format_tooltip_price(1e21), "1e+21");
    assert_eq!(format_tooltip_price(-2.5e22), "-2.5e+22");
    assert_eq!(format_tooltip_price(1e-7), "1e-7");
    assert_eq!(format_tooltip_price(1.5e-7), "1.5e-7");

    assert_eq!(format_tooltip_price(1e20), "100000000000000000000");
    assert_eq!(format_tooltip_price(1e-6), "0.000001");
    assert_eq!(format_tooltip_price(-0.0), "0");
}
