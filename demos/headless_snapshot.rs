use stackbar_rs::api::{ChartEngine, ChartEngineConfig};
use stackbar_rs::core::{Color, Column, SeriesPoint, Viewport};
use stackbar_rs::render::NullRenderer;

fn sample_columns() -> Vec<Column> {
    let rent = Color::from_rgb8(0x25, 0x63, 0xeb);
    let food = Color::from_rgb8(0x16, 0xa3, 0x4a);
    let transport = Color::from_rgb8(0xf5, 0x9e, 0x0b);
    let savings = Color::from_rgb8(0xdc, 0x26, 0x26);

    vec![
        Column::new(
            "Jan",
            vec![
                SeriesPoint::new("Rent", 1200.0, rent),
                SeriesPoint::new("Food", 430.0, food),
                SeriesPoint::new("Transport", 160.0, transport),
            ],
        ),
        Column::new(
            "Feb",
            vec![
                SeriesPoint::new("Rent", 1200.0, rent),
                SeriesPoint::new("Food", 395.0, food),
                SeriesPoint::new("Transport", 140.0, transport),
            ],
        ),
        Column::new(
            "Mar",
            vec![
                SeriesPoint::new("Rent", 1250.0, rent),
                SeriesPoint::new("Food", 410.0, food),
                SeriesPoint::new("Transport", 175.0, transport),
                SeriesPoint::new("Savings", 300.0, savings),
            ],
        ),
    ]
}

fn main() {
    let _ = stackbar_rs::telemetry::init_default_tracing();

    let config = ChartEngineConfig::new(Viewport::new(800, 400));
    let mut engine = match ChartEngine::new(NullRenderer::default(), config) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("failed to initialize engine: {err}");
            return;
        }
    };

    engine.set_columns(sample_columns());
    engine.set_on_segment_click(|click| {
        println!("clicked: {} = {} in {}", click.label, click.value, click.month);
    });

    // Hover the middle of the first column's bottom segment, then click it.
    engine.pointer_move(90.0, 330.0);
    engine.pointer_click(90.0, 330.0);

    match engine.snapshot_json_pretty() {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("snapshot failed: {err}");
            return;
        }
    }

    if let Err(err) = engine.render() {
        eprintln!("render failed: {err}");
        return;
    }
    println!(
        "rendered {} primitives",
        engine.into_renderer().last_primitive_count()
    );
}
