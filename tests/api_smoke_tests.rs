use std::cell::RefCell;
use std::rc::Rc;

use stackbar_rs::api::{ChartEngine, ChartEngineConfig};
use stackbar_rs::core::{Color, Column, SeriesPoint, Viewport};
use stackbar_rs::render::NullRenderer;
use stackbar_rs::{ChartError, ChartResult};

#[test]
fn engine_smoke_flow() -> ChartResult<()> {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(800, 400));
    let mut engine = ChartEngine::new(renderer, config)?;

    engine.set_columns(vec![Column::new(
        "Jan",
        vec![
            SeriesPoint::new("Rent", 150.0, Color::from_rgb8(0x25, 0x63, 0xeb)),
            SeriesPoint::new("Food", 90.0, Color::from_rgb8(0x16, 0xa3, 0x4a)),
        ],
    )]);
    engine.append_column(Column::new(
        "Feb",
        vec![SeriesPoint::new(
            "Rent",
            180.0,
            Color::from_rgb8(0x25, 0x63, 0xeb),
        )],
    ));
    assert_eq!(engine.columns().len(), 2);
    assert!((engine.effective_max_value() - 240.0).abs() < 1e-12);

    let clicks = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&clicks);
    engine.set_on_segment_click(move |click| sink.borrow_mut().push(click));

    // Jan's Rent segment spans y 152.5..340 at a 240 maximum.
    engine.pointer_move(90.0, 300.0);
    let hover = engine.hover_entry().expect("hover entry");
    assert_eq!(hover.label, "Rent");
    assert_eq!(hover.month, "Jan");

    engine.pointer_click(90.0, 300.0);
    {
        let seen = clicks.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].label, "Rent");
        assert!((seen[0].value - 150.0).abs() < 1e-12);
    }

    engine.pointer_leave();
    assert!(engine.hover_entry().is_none());

    engine.set_max_value(Some(500.0));
    assert!((engine.effective_max_value() - 500.0).abs() < 1e-12);
    engine.set_max_value(None);

    engine.set_viewport(Viewport::new(1024, 500))?;
    assert_eq!(engine.viewport(), Viewport::new(1024, 500));

    engine.render()?;
    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_line_count, 8);
    assert!(renderer.last_primitive_count() > 8);
    Ok(())
}

#[test]
fn zero_sized_viewports_are_rejected() {
    let config = ChartEngineConfig::new(Viewport::new(0, 400));
    let err = ChartEngine::new(NullRenderer::default(), config).expect_err("degenerate viewport");
    assert!(matches!(
        err,
        ChartError::InvalidViewport {
            width: 0,
            height: 400
        }
    ));

    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(800, 400)),
    )
    .expect("engine init");
    let err = engine
        .set_viewport(Viewport::new(800, 0))
        .expect_err("degenerate viewport");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
    assert_eq!(engine.viewport(), Viewport::new(800, 400));
}
