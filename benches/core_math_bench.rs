use criterion::{Criterion, criterion_group, criterion_main};
use stackbar_rs::api::{ChartEngine, ChartEngineConfig};
use stackbar_rs::core::{
    ChartLayout, Color, Column, SeriesPoint, ValueScale, Viewport, project_columns,
};
use stackbar_rs::render::NullRenderer;
use std::hint::black_box;

fn generated_columns(count: usize) -> Vec<Column> {
    let palette = [
        Color::from_rgb8(0x25, 0x63, 0xeb),
        Color::from_rgb8(0x16, 0xa3, 0x4a),
        Color::from_rgb8(0xf5, 0x9e, 0x0b),
        Color::from_rgb8(0xdc, 0x26, 0x26),
    ];

    (0..count)
        .map(|i| {
            let values = (0..4)
                .map(|j| {
                    let base = 150.0 + (j as f64) * 90.0;
                    let wobble = ((i as f64) * 0.37 + (j as f64)).sin() * 40.0;
                    SeriesPoint::new(format!("series-{j}"), base + wobble, palette[j])
                })
                .collect();
            Column::new(format!("M{i}"), values)
        })
        .collect()
}

fn bench_stacked_projection_1k(c: &mut Criterion) {
    let columns = generated_columns(1_000);
    let scale = ValueScale::resolve(&columns, None);
    let layout = ChartLayout::new(Viewport::new(1920, 1080), columns.len());

    c.bench_function("stacked_projection_1k", |b| {
        b.iter(|| {
            let _ = project_columns(black_box(&columns), black_box(scale), black_box(layout));
        })
    });
}

fn bench_render_frame_build_24(c: &mut Criterion) {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(1600, 900));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine.set_columns(generated_columns(24));

    c.bench_function("render_frame_build_24", |b| {
        b.iter(|| {
            let frame = engine.build_render_frame();
            let _ = black_box(frame.primitive_count());
        })
    });
}

fn bench_engine_snapshot_json_120(c: &mut Criterion) {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(1600, 900));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine.set_columns(generated_columns(120));

    c.bench_function("engine_snapshot_json_120", |b| {
        b.iter(|| {
            let _ = engine
                .snapshot_json_pretty()
                .expect("snapshot json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_stacked_projection_1k,
    bench_render_frame_build_24,
    bench_engine_snapshot_json_120
);
criterion_main!(benches);
