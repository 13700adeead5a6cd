use stackbar_rs::api::{
    ChartEngine, ChartEngineConfig, ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot,
    EngineSnapshotJsonContractV1,
};
use stackbar_rs::core::{Color, Column, SeriesPoint, Viewport};
use stackbar_rs::render::NullRenderer;

fn engine_with_data() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(800, 400));
    let mut engine =
        ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_columns(vec![
        Column::new(
            "Jan",
            vec![
                SeriesPoint::new("Rent", 150.0, Color::from_rgb8(0x25, 0x63, 0xeb)),
                SeriesPoint::new("Food", 50.0, Color::from_rgb8(0x16, 0xa3, 0x4a)),
            ],
        ),
        Column::new(
            "Feb",
            vec![
                SeriesPoint::new("Rent", 150.0, Color::from_rgb8(0x25, 0x63, 0xeb)),
                SeriesPoint::new("Travel", 100.0, Color::from_rgb8(0xdc, 0x26, 0x26)),
            ],
        ),
    ]);
    engine
}

#[test]
fn config_json_roundtrip() {
    let config = ChartEngineConfig::new(Viewport::new(1024, 768)).with_max_value(500.0);

    let json = serde_json::to_string_pretty(&config).expect("config serializes");
    let restored: ChartEngineConfig = serde_json::from_str(&json).expect("config deserializes");

    assert_eq!(restored, config);
}

#[test]
fn snapshot_captures_scale_and_column_summaries() {
    let engine = engine_with_data();
    let snapshot = engine.snapshot();

    assert_eq!(snapshot.viewport, Viewport::new(800, 400));
    assert!((snapshot.effective_max_value - 250.0).abs() < 1e-12);
    assert_eq!(snapshot.tick_values.len(), 6);
    assert!((snapshot.tick_values[0] - 250.0).abs() < 1e-12);
    assert_eq!(snapshot.column_months, vec!["Jan", "Feb"]);
    assert_eq!(snapshot.column_totals.len(), 2);
    assert!((snapshot.column_totals[0] - 200.0).abs() < 1e-12);
    assert!((snapshot.column_totals[1] - 250.0).abs() < 1e-12);
    assert!(snapshot.hover.is_none());
}

#[test]
fn snapshot_reports_divergent_legends() {
    let engine = engine_with_data();
    let snapshot = engine.snapshot();

    // Canvas legend mirrors the first column; "Travel" only appears in
    // the flow legend.
    let canvas_labels: Vec<&str> = snapshot
        .canvas_legend
        .iter()
        .map(|entry| entry.label.as_str())
        .collect();
    let flow_labels: Vec<&str> = snapshot
        .flow_legend
        .iter()
        .map(|entry| entry.label.as_str())
        .collect();

    assert_eq!(canvas_labels, vec!["Rent", "Food"]);
    assert_eq!(flow_labels, vec!["Rent", "Food", "Travel"]);
    assert!(snapshot.legends_diverge);
}

#[test]
fn legends_agree_when_the_first_column_covers_every_label() {
    let config = ChartEngineConfig::new(Viewport::new(800, 400));
    let mut engine =
        ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_columns(vec![Column::new(
        "Jan",
        vec![SeriesPoint::new("Rent", 100.0, Color::BLACK)],
    )]);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.canvas_legend, snapshot.flow_legend);
    assert!(!snapshot.legends_diverge);
}

#[test]
fn snapshot_includes_the_active_hover() {
    let mut engine = engine_with_data();
    // Jan's Rent segment fills 150/250 of the 300px plot: y 160..340.
    engine.pointer_move(90.0, 330.0);

    let snapshot = engine.snapshot();
    let hover = snapshot.hover.expect("hover captured");
    assert_eq!(hover.label, "Rent");
    assert_eq!(hover.month, "Jan");
}

#[test]
fn snapshot_frame_viewport_includes_the_flow_band() {
    let engine = engine_with_data();
    let snapshot = engine.snapshot();

    assert_eq!(snapshot.frame_viewport, Viewport::new(800, 436));
    assert_eq!(snapshot.frame_viewport, engine.frame_viewport());
}

#[test]
fn snapshot_json_roundtrip() {
    let engine = engine_with_data();

    let json = engine.snapshot_json_pretty().expect("snapshot serializes");
    let decoded: EngineSnapshot = serde_json::from_str(&json).expect("snapshot deserializes");

    assert_eq!(decoded, engine.snapshot());
}

#[test]
fn versioned_contract_roundtrip() {
    let engine = engine_with_data();
    let snapshot = engine.snapshot();

    let json = engine
        .snapshot_json_contract_v1_pretty()
        .expect("contract serializes");
    let payload: EngineSnapshotJsonContractV1 =
        serde_json::from_str(&json).expect("contract deserializes");
    assert_eq!(payload.schema_version, ENGINE_SNAPSHOT_JSON_SCHEMA_V1);
    assert_eq!(payload.snapshot, snapshot);

    // The compat parser accepts both the wrapped and the bare form.
    assert_eq!(
        EngineSnapshot::from_json_compat_str(&json).expect("wrapped form"),
        snapshot
    );
    let bare = serde_json::to_string(&snapshot).expect("bare form serializes");
    assert_eq!(
        EngineSnapshot::from_json_compat_str(&bare).expect("bare form"),
        snapshot
    );
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let engine = engine_with_data();
    let json = engine
        .snapshot_json_contract_v1_pretty()
        .expect("contract serializes");
    let bumped = json.replacen("\"schema_version\": 1", "\"schema_version\": 99", 1);

    let err = EngineSnapshot::from_json_compat_str(&bumped).expect_err("version mismatch");
    assert!(err.to_string().contains("unsupported"));
}
