use proptest::prelude::*;
use stackbar_rs::api::{ChartEngine, ChartEngineConfig};
use stackbar_rs::core::layout::TICK_COUNT;
use stackbar_rs::core::{
    ChartLayout, Color, Column, SeriesPoint, ValueScale, Viewport, project_columns,
};
use stackbar_rs::render::NullRenderer;

const PALETTE: [Color; 4] = [
    Color::from_rgb8(0x25, 0x63, 0xeb),
    Color::from_rgb8(0x16, 0xa3, 0x4a),
    Color::from_rgb8(0xf5, 0x9e, 0x0b),
    Color::from_rgb8(0xdc, 0x26, 0x26),
];

fn columns_from(values: Vec<Vec<f64>>) -> Vec<Column> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, segment_values)| {
            let points = segment_values
                .into_iter()
                .enumerate()
                .map(|(j, value)| {
                    SeriesPoint::new(format!("series-{j}"), value, PALETTE[j % PALETTE.len()])
                })
                .collect();
            Column::new(format!("M{i}"), points)
        })
        .collect()
}

proptest! {
    #[test]
    fn projection_is_finite_and_slotted_for_any_values(
        values in prop::collection::vec(
            prop::collection::vec(-500.0f64..500.0, 1..6),
            1..24,
        )
    ) {
        let columns = columns_from(values);
        let scale = ValueScale::resolve(&columns, None);
        let layout = ChartLayout::new(Viewport::new(800, 400), columns.len());
        let geometries = project_columns(&columns, scale, layout);

        prop_assert_eq!(geometries.len(), columns.len());
        for (index, geometry) in geometries.iter().enumerate() {
            prop_assert_eq!(geometry.segments.len(), columns[index].values.len());
            let expected_x = 70.0 + index as f64 * 70.0;
            prop_assert!((geometry.x - expected_x).abs() <= 1e-9);
            for segment in &geometry.segments {
                prop_assert!(segment.x.is_finite());
                prop_assert!(segment.y.is_finite());
                prop_assert!(segment.height.is_finite());
                prop_assert!(segment.height >= 0.0);
                prop_assert!((segment.width - 40.0).abs() <= 1e-9);
                prop_assert!((segment.anchor_x - (expected_x + 20.0)).abs() <= 1e-9);
                prop_assert!((segment.anchor_y - segment.y).abs() <= 1e-9);
            }
        }
    }

    #[test]
    fn positive_stacks_tile_upward_without_gaps(
        values in prop::collection::vec(
            prop::collection::vec(5.0f64..400.0, 1..6),
            1..16,
        )
    ) {
        let columns = columns_from(values);
        let scale = ValueScale::resolve(&columns, None);
        let layout = ChartLayout::new(Viewport::new(800, 400), columns.len());
        let geometries = project_columns(&columns, scale, layout);

        for (geometry, column) in geometries.iter().zip(&columns) {
            let first = &geometry.segments[0];
            prop_assert!((first.y + first.height - 340.0).abs() <= 1e-9);
            for pair in geometry.segments.windows(2) {
                prop_assert!((pair[1].y + pair[1].height - pair[0].y).abs() <= 1e-9);
            }

            let stacked: f64 = geometry.segments.iter().map(|s| s.height).sum();
            let expected = scale.height_ratio(column.total()) * 300.0;
            prop_assert!((stacked - expected).abs() <= 1e-6);
        }
    }

    #[test]
    fn pointer_at_a_segment_center_hovers_that_segment(
        values in prop::collection::vec(
            prop::collection::vec(5.0f64..200.0, 1..5),
            1..5,
        ),
        column_pick in 0usize..4,
        segment_pick in 0usize..4,
    ) {
        let columns = columns_from(values);
        let column_index = column_pick % columns.len();
        let segment_index = segment_pick % columns[column_index].values.len();

        let scale = ValueScale::resolve(&columns, None);
        let layout = ChartLayout::new(Viewport::new(800, 400), columns.len());
        let geometries = project_columns(&columns, scale, layout);
        let target = geometries[column_index].segments[segment_index];

        let config = ChartEngineConfig::new(Viewport::new(800, 400));
        let mut engine =
            ChartEngine::new(NullRenderer::default(), config).expect("engine init");
        engine.set_columns(columns);
        engine.pointer_move(target.x + target.width / 2.0, target.y + target.height / 2.0);

        let entry = engine.hover_entry().expect("segment under the pointer");
        prop_assert!(entry.targets(column_index, segment_index));
    }

    #[test]
    fn tick_values_descend_to_zero_for_any_data(
        values in prop::collection::vec(
            prop::collection::vec(0.5f64..5_000.0, 1..6),
            1..12,
        )
    ) {
        let columns = columns_from(values);
        let scale = ValueScale::resolve(&columns, None);
        let ticks = scale.tick_values(TICK_COUNT);

        prop_assert_eq!(ticks.len(), TICK_COUNT + 1);
        prop_assert!((ticks[0] - scale.effective_max()).abs() <= 0.5 + 1e-6);
        prop_assert!(ticks[TICK_COUNT].abs() <= 1e-9);
        for pair in ticks.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }
    }
}
