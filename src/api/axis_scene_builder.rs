use crate::core::layout::TICK_COUNT;
use crate::core::{ChartLayout, ValueScale};
use crate::render::{CanvasLayerKind, LayeredRenderFrame, LinePrimitive, Renderer, TextHAlign, TextPrimitive};

use super::ChartEngine;
use super::label_text_formatter::format_value;
use super::layout_helpers::text_top_for_baseline;

/// Gap between the tick labels' right edge and the plot area.
const TICK_LABEL_GAP_PX: f64 = 10.0;
/// Baseline offset that vertically centers a tick label on its gridline.
const TICK_LABEL_BASELINE_OFFSET_PX: f64 = 4.0;

#[derive(Debug, Clone, Copy)]
pub(super) struct AxisSceneContext {
    pub(super) layout: ChartLayout,
    pub(super) scale: ValueScale,
}

impl<R: Renderer> ChartEngine<R> {
    /// Appends gridlines, tick labels and the two axis lines.
    ///
    /// Gridlines span from the plot's left edge to the grid right edge
    /// anchored at the requested viewport; on an expanded canvas they do
    /// not stretch to the new width.
    pub(super) fn append_axis_scene(&self, frame: &mut LayeredRenderFrame, ctx: AxisSceneContext) {
        let style = self.core.presentation.render_style;
        let layout = ctx.layout;

        for (index, tick_value) in ctx.scale.tick_values(TICK_COUNT).iter().enumerate() {
            let y = layout.tick_y(index);
            frame.push_line(
                CanvasLayerKind::Grid,
                LinePrimitive::new(
                    layout.plot_left(),
                    y,
                    layout.grid_right(),
                    y,
                    style.grid_line_width,
                    style.grid_line_color,
                )
                .with_stroke_style(style.grid_line_style),
            );
            frame.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    format_value(*tick_value),
                    layout.plot_left() - TICK_LABEL_GAP_PX,
                    text_top_for_baseline(
                        y + TICK_LABEL_BASELINE_OFFSET_PX,
                        style.tick_label_font_size_px,
                    ),
                    style.tick_label_font_size_px,
                    style.tick_label_color,
                    TextHAlign::Right,
                ),
            );
        }

        // Vertical value axis.
        frame.push_line(
            CanvasLayerKind::Axis,
            LinePrimitive::new(
                layout.plot_left(),
                layout.plot_top(),
                layout.plot_left(),
                layout.plot_bottom(),
                style.axis_line_width,
                style.axis_line_color,
            ),
        );
        // Horizontal baseline.
        frame.push_line(
            CanvasLayerKind::Axis,
            LinePrimitive::new(
                layout.plot_left(),
                layout.plot_bottom(),
                layout.grid_right(),
                layout.plot_bottom(),
                style.axis_line_width,
                style.axis_line_color,
            ),
        );
    }
}
