use smallvec::SmallVec;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::layout::{COLUMN_WIDTH, ChartLayout, TOP_PADDING};
use crate::core::scale::ValueScale;
use crate::core::types::Column;

/// Columns at or above this count are projected on the rayon pool when
/// the `parallel-projection` feature is enabled.
#[cfg(feature = "parallel-projection")]
const PARALLEL_PROJECTION_THRESHOLD: usize = 256;

/// Deterministic geometry for one segment of a stacked column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentGeometry {
    pub column_index: usize,
    pub segment_index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal center of the column, the tooltip anchor x.
    pub anchor_x: f64,
    /// Top edge of the segment, the tooltip anchor y.
    pub anchor_y: f64,
}

impl SegmentGeometry {
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Geometry for one whole column, segments in stacking order
/// (bottom of the stack first).
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnGeometry {
    pub column_index: usize,
    pub x: f64,
    pub total: f64,
    pub segments: SmallVec<[SegmentGeometry; 4]>,
}

/// Projects columns into pixel-space segment rectangles.
///
/// Segments stack upward from the plot baseline: each occupies
/// `height_ratio(value) * plot_height` pixels on top of the ones before
/// it. Inverted spans (from negative values) are normalized so the
/// geometry always has a non-negative height.
#[must_use]
pub fn project_columns(
    columns: &[Column],
    scale: ValueScale,
    layout: ChartLayout,
) -> Vec<ColumnGeometry> {
    #[cfg(feature = "parallel-projection")]
    {
        if columns.len() >= PARALLEL_PROJECTION_THRESHOLD {
            return columns
                .par_iter()
                .enumerate()
                .map(|(index, column)| project_single_column(index, column, scale, layout))
                .collect();
        }
    }

    columns
        .iter()
        .enumerate()
        .map(|(index, column)| project_single_column(index, column, scale, layout))
        .collect()
}

fn project_single_column(
    column_index: usize,
    column: &Column,
    scale: ValueScale,
    layout: ChartLayout,
) -> ColumnGeometry {
    let plot_height = layout.plot_height();
    let x = layout.column_x(column_index);
    let anchor_x = layout.column_center_x(column_index);

    let mut segments = SmallVec::with_capacity(column.values.len());
    let mut stacked_height = 0.0_f64;

    for (segment_index, point) in column.values.iter().enumerate() {
        let height = scale.height_ratio(point.value) * plot_height;
        let y = plot_height - stacked_height - height + TOP_PADDING;
        stacked_height += height;

        let top = y.min(y + height);
        segments.push(SegmentGeometry {
            column_index,
            segment_index,
            x,
            y: top,
            width: COLUMN_WIDTH,
            height: height.abs(),
            anchor_x,
            anchor_y: top,
        });
    }

    ColumnGeometry {
        column_index,
        x,
        total: column.total(),
        segments,
    }
}
