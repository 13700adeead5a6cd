use std::cell::RefCell;
use std::rc::Rc;

use stackbar_rs::api::{ChartEngine, ChartEngineConfig};
use stackbar_rs::core::{Color, Column, SegmentClick, SeriesPoint, Viewport};
use stackbar_rs::render::NullRenderer;

fn click_engine() -> (ChartEngine<NullRenderer>, Rc<RefCell<Vec<SegmentClick>>>) {
    let config = ChartEngineConfig::new(Viewport::new(800, 400)).with_max_value(300.0);
    let mut engine =
        ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_columns(vec![Column::new(
        "Jan",
        vec![
            SeriesPoint::new("Rent", 150.0, Color::from_rgb8(0x25, 0x63, 0xeb)),
            SeriesPoint::new("Food", 75.0, Color::from_rgb8(0x16, 0xa3, 0x4a)),
        ],
    )]);

    let clicks = Rc::new(RefCell::new(Vec::new()));
    {
        let clicks = Rc::clone(&clicks);
        engine.set_on_segment_click(move |click| clicks.borrow_mut().push(click));
    }
    (engine, clicks)
}

#[test]
fn clicking_a_segment_invokes_the_handler_once() {
    let (mut engine, clicks) = click_engine();

    engine.pointer_click(90.0, 330.0);

    let clicks = clicks.borrow();
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0].label, "Rent");
    assert_eq!(clicks[0].month, "Jan");
    assert!((clicks[0].value - 150.0).abs() < 1e-12);
}

#[test]
fn clicking_empty_canvas_does_nothing() {
    let (mut engine, clicks) = click_engine();

    engine.pointer_click(400.0, 100.0);
    engine.pointer_click(f64::NAN, 330.0);

    assert!(clicks.borrow().is_empty());
}

#[test]
fn click_does_not_disturb_the_hover_state() {
    let (mut engine, _clicks) = click_engine();

    engine.pointer_move(90.0, 120.0);
    let hovered = engine.hover_entry().cloned().expect("hover set");

    // Click a different segment than the hovered one.
    engine.pointer_click(90.0, 330.0);
    assert_eq!(engine.hover_entry().cloned(), Some(hovered));
}

#[test]
fn handler_can_be_replaced_and_cleared() {
    let (mut engine, first_log) = click_engine();

    let second_log: Rc<RefCell<Vec<SegmentClick>>> = Rc::new(RefCell::new(Vec::new()));
    {
        let second_log = Rc::clone(&second_log);
        engine.set_on_segment_click(move |click| second_log.borrow_mut().push(click));
    }

    engine.pointer_click(90.0, 330.0);
    assert!(first_log.borrow().is_empty(), "replaced handler must not fire");
    assert_eq!(second_log.borrow().len(), 1);

    engine.clear_on_segment_click();
    engine.pointer_click(90.0, 330.0);
    assert_eq!(second_log.borrow().len(), 1, "cleared handler must not fire");
}

#[test]
fn clicks_without_a_handler_are_ignored() {
    let config = ChartEngineConfig::new(Viewport::new(800, 400)).with_max_value(300.0);
    let mut engine =
        ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_columns(vec![Column::new(
        "Jan",
        vec![SeriesPoint::new("Rent", 150.0, Color::BLACK)],
    )]);

    // No handler installed; the click resolves but goes nowhere.
    engine.pointer_click(90.0, 330.0);
    assert!(engine.hover_entry().is_none());
}

#[test]
fn handler_sees_stacked_segments_independently() {
    let (mut engine, clicks) = click_engine();

    engine.pointer_click(90.0, 330.0);
    engine.pointer_click(90.0, 120.0);

    let clicks = clicks.borrow();
    assert_eq!(clicks.len(), 2);
    assert_eq!(clicks[0].label, "Rent");
    assert_eq!(clicks[1].label, "Food");
    assert!((clicks[1].value - 75.0).abs() < 1e-12);
}
