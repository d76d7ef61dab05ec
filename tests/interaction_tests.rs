use radar_rs::api::{RadarChartConfig, RadarChartEngine, RadarChartOptions};
use radar_rs::core::{AxisPoint, RadarDataset, Series, Viewport};
use radar_rs::interaction::InteractionEvent;
use radar_rs::render::NullRenderer;

fn engine() -> RadarChartEngine<NullRenderer> {
    RadarChartEngine::new(NullRenderer::default(), RadarChartConfig::default())
        .expect("engine init")
}

fn series_with_ids(name: &str, id: &str, values: [f64; 3], element_id: u64) -> Series {
    Series::new(
        name,
        id,
        vec![
            AxisPoint::new("Speed", values[0]).with_element_id(element_id),
            AxisPoint::new("Range", values[1]).with_element_id(element_id),
            AxisPoint::new("Cost", values[2]).with_element_id(element_id),
        ],
    )
}

fn rendered_engine(dataset: &RadarDataset) -> RadarChartEngine<NullRenderer> {
    let mut engine = engine();
    engine
        .render("container-1", dataset, &RadarChartOptions::default())
        .expect("render");
    engine
}

// Default 450x450 config: center (250, 225), outer radius 25.

#[test]
fn hovering_a_vertex_yields_its_tooltip() {
    let dataset = RadarDataset::new(vec![series_with_ids("alpha", "alpha-id", [0.2, 0.8, 0.5], 7)]);
    let mut engine = rendered_engine(&dataset);

    // Vertex 0 sits at radius 5 straight up from the center.
    let events = engine.pointer_move(250.0, 220.0);
    assert_eq!(events.len(), 1);
    match &events[0] {
        InteractionEvent::PointHover {
            series_index,
            axis_index,
            text,
            anchor,
        } => {
            assert_eq!(*series_index, 0);
            assert_eq!(*axis_index, 0);
            assert_eq!(text, "alpha : 0.2");
            assert!((anchor.x - (-10.0)).abs() <= 1e-9);
            assert!((anchor.y - (-15.0)).abs() <= 1e-9);
        }
        other => panic!("expected a point hover, got {other:?}"),
    }
}

#[test]
fn repeated_moves_over_the_same_vertex_fire_once() {
    let dataset = RadarDataset::new(vec![series_with_ids("alpha", "alpha-id", [0.2, 0.8, 0.5], 7)]);
    let mut engine = rendered_engine(&dataset);

    assert_eq!(engine.pointer_move(250.0, 220.0).len(), 1);
    assert!(engine.pointer_move(251.0, 220.0).is_empty());
}

#[test]
fn hover_transitions_emit_leave_then_enter() {
    let dataset = RadarDataset::new(vec![series_with_ids("alpha", "alpha-id", [0.8, 0.8, 0.8], 7)]);
    let mut engine = rendered_engine(&dataset);

    // Center of the blob, away from every vertex.
    let events = engine.pointer_move(250.0, 225.0);
    assert_eq!(
        events,
        vec![InteractionEvent::BlobHover { series_index: 0 }]
    );

    // Up to the first vertex (radius 20 straight up).
    let events = engine.pointer_move(250.0, 205.0);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], InteractionEvent::BlobLeave);
    assert!(matches!(
        events[1],
        InteractionEvent::PointHover { series_index: 0, axis_index: 0, .. }
    ));

    let events = engine.pointer_leave();
    assert_eq!(events, vec![InteractionEvent::PointLeave]);
}

#[test]
fn pointer_outside_every_blob_resolves_to_nothing() {
    let dataset = RadarDataset::new(vec![series_with_ids("alpha", "alpha-id", [0.2, 0.2, 0.2], 7)]);
    let mut engine = rendered_engine(&dataset);

    assert!(engine.pointer_move(10.0, 10.0).is_empty());
    assert!(engine.pointer_leave().is_empty());
}

#[test]
fn clicking_a_blob_requests_a_toggled_selection() {
    let dataset = RadarDataset::new(vec![series_with_ids("alpha", "alpha-id", [0.8, 0.8, 0.8], 42)]);
    let mut engine = rendered_engine(&dataset);

    let (events, request) = engine.click(250.0, 225.0);
    assert_eq!(
        events,
        vec![InteractionEvent::BlobSelect { series_index: 0 }]
    );
    let request = request.expect("selectable blob produces a request");
    assert_eq!(request.dimension_index, 0);
    assert_eq!(request.element_ids, vec![42]);
    assert!(request.toggle);
}

#[test]
fn the_topmost_painted_blob_wins_the_click() {
    let dataset = RadarDataset::new(vec![
        series_with_ids("alpha", "alpha-id", [0.8, 0.8, 0.8], 1),
        series_with_ids("beta", "beta-id", [0.5, 0.5, 0.5], 2),
    ]);
    let mut engine = rendered_engine(&dataset);

    let (events, request) = engine.click(250.0, 225.0);
    assert_eq!(
        events,
        vec![InteractionEvent::BlobSelect { series_index: 1 }]
    );
    assert_eq!(request.expect("request").element_ids, vec![2]);
}

#[test]
fn missing_values_make_a_series_unselectable() {
    let mut series = series_with_ids("alpha", "alpha-id", [0.8, 0.8, 0.8], 7);
    let flagged = series.points[1].clone().with_missing(true);
    series.points[1] = flagged;
    let dataset = RadarDataset::new(vec![series]);
    let mut engine = rendered_engine(&dataset);

    let (events, request) = engine.click(250.0, 225.0);
    assert!(events.is_empty());
    assert!(request.is_none());
}

#[test]
fn disabled_interactions_suppress_selection() {
    let dataset = RadarDataset::new(vec![series_with_ids("alpha", "alpha-id", [0.8, 0.8, 0.8], 7)]);
    let mut engine = engine();
    let options = RadarChartOptions {
        interactions_enabled: Some(false),
        ..RadarChartOptions::default()
    };
    engine
        .render("container-1", &dataset, &options)
        .expect("render");

    let (events, request) = engine.click(250.0, 225.0);
    assert!(events.is_empty());
    assert!(request.is_none());
}

#[test]
fn legend_events_mirror_blob_events() {
    let dataset = RadarDataset::new(vec![
        series_with_ids("alpha", "alpha-id", [0.8, 0.8, 0.8], 1),
        series_with_ids("beta", "beta-id", [0.5, 0.5, 0.5], 2),
    ]);
    let mut engine = rendered_engine(&dataset);

    assert_eq!(
        engine.legend_hover(1),
        vec![InteractionEvent::LegendHover { series_index: 1 }]
    );
    assert_eq!(
        engine.legend_leave(),
        vec![InteractionEvent::LegendLeave]
    );

    let (events, request) = engine.legend_select(1);
    assert_eq!(
        events,
        vec![InteractionEvent::LegendSelect { series_index: 1 }]
    );
    assert_eq!(request.expect("request").element_ids, vec![2]);
}

#[test]
fn suppressed_legends_emit_no_events() {
    let dataset = RadarDataset::new(vec![series_with_ids("alpha", "alpha-id", [0.8, 0.8, 0.8], 1)]);
    let mut engine = engine();
    let options = RadarChartOptions {
        size: Some(Viewport::new(300, 300)),
        ..RadarChartOptions::default()
    };
    engine
        .render("container-1", &dataset, &options)
        .expect("render");

    assert!(engine.legend_hover(0).is_empty());
    assert!(engine.legend_leave().is_empty());
    let (events, request) = engine.legend_select(0);
    assert!(events.is_empty());
    assert!(request.is_none());
}

#[test]
fn rendering_replaces_the_mounted_container() {
    let dataset = RadarDataset::new(vec![series_with_ids("alpha", "alpha-id", [0.8, 0.8, 0.8], 1)]);
    let mut engine = rendered_engine(&dataset);
    assert_eq!(engine.mounted_container(), Some("container-1"));

    engine
        .render("container-2", &dataset, &RadarChartOptions::default())
        .expect("render");
    assert_eq!(engine.mounted_container(), Some("container-2"));
}

#[test]
fn invalid_data_leaves_no_live_model() {
    let mut engine = engine();
    let outcome = engine
        .render(
            "container-1",
            &RadarDataset::new(Vec::new()),
            &RadarChartOptions::default(),
        )
        .expect("render call itself succeeds");

    assert!(outcome.is_invalid());
    assert!(engine.model().is_none());
    assert!(engine.pointer_move(250.0, 225.0).is_empty());
    let (events, request) = engine.click(250.0, 225.0);
    assert!(events.is_empty());
    assert!(request.is_none());
}
