use crate::core::layout::TOP_PADDING;
use crate::core::{ChartLayout, ColumnGeometry};
use crate::render::{
    CanvasLayerKind, FontWeight, LayeredRenderFrame, RectPrimitive, Renderer, TextHAlign,
    TextPrimitive,
};

use super::ChartEngine;
use super::label_text_formatter::format_value;
use super::layout_helpers::text_top_for_baseline;

/// Baseline distance of the total label above the plot top.
const TOTAL_LABEL_BASELINE_RISE_PX: f64 = 8.0;
/// Baseline distance of the month label below the plot baseline.
const MONTH_LABEL_BASELINE_DROP_PX: f64 = 24.0;

#[derive(Debug, Clone, Copy)]
pub(super) struct BarSceneContext<'a> {
    pub(super) layout: ChartLayout,
    pub(super) geometry: &'a [ColumnGeometry],
}

impl<R: Renderer> ChartEngine<R> {
    /// Appends segment rectangles plus the per-column total and month
    /// labels.
    ///
    /// Zero-height segments still produce rectangles; they paint
    /// nothing but keep primitive counts stable for a given data shape.
    pub(super) fn append_bar_scene(&self, frame: &mut LayeredRenderFrame, ctx: BarSceneContext<'_>) {
        let style = self.core.presentation.render_style;

        for column_geometry in ctx.geometry {
            let Some(column) = self.core.model.columns.get(column_geometry.column_index) else {
                continue;
            };

            for segment in &column_geometry.segments {
                let Some(point) = column.values.get(segment.segment_index) else {
                    continue;
                };
                frame.push_rect(
                    CanvasLayerKind::Series,
                    RectPrimitive::new(
                        segment.x,
                        segment.y,
                        segment.width,
                        segment.height,
                        point.color,
                    )
                    .with_corner_radius(style.segment_corner_radius)
                    .with_shadow(style.segment_shadow),
                );
            }

            let center_x = ctx.layout.column_center_x(column_geometry.column_index);
            frame.push_text(
                CanvasLayerKind::Labels,
                TextPrimitive::new(
                    format_value(column_geometry.total),
                    center_x,
                    text_top_for_baseline(
                        TOP_PADDING - TOTAL_LABEL_BASELINE_RISE_PX,
                        style.total_label_font_size_px,
                    ),
                    style.total_label_font_size_px,
                    style.total_label_color,
                    TextHAlign::Center,
                )
                .with_weight(FontWeight::Bold),
            );

            if !column.month.is_empty() {
                frame.push_text(
                    CanvasLayerKind::Labels,
                    TextPrimitive::new(
                        column.month.clone(),
                        center_x,
                        text_top_for_baseline(
                            ctx.layout.plot_bottom() + MONTH_LABEL_BASELINE_DROP_PX,
                            style.month_label_font_size_px,
                        ),
                        style.month_label_font_size_px,
                        style.month_label_color,
                        TextHAlign::Center,
                    )
                    .with_weight(FontWeight::Medium),
                );
            }
        }
    }
}
