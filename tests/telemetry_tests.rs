use hover_chart::telemetry::{init_default_tracing, init_tracing_with_default_filter};

#[test]
fn second_initialization_reports_existing_subscriber() {
    let first = init_tracing_with_default_filter("warn");
    assert_eq!(first, cfg!(feature = "telemetry"));

    assert!(!init_default_tracing());
}
