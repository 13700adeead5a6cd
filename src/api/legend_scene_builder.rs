use crate::core::layout::LEFT_PADDING;
use crate::core::{LabelRegistry, LegendEntry};
use crate::render::{
    CanvasLayerKind, LayeredRenderFrame, RectPrimitive, Renderer, TextHAlign, TextPrimitive,
};

use super::{ChartEngine, RenderStyle};
use super::layout_helpers::{estimate_label_text_width_px, text_top_for_baseline};

/// Distance of the canvas legend swatch row from the canvas bottom.
const CANVAS_LEGEND_BOTTOM_INSET_PX: f64 = 30.0;
/// Offset from a canvas legend slot's left edge to its label.
const CANVAS_LEGEND_TEXT_OFFSET_PX: f64 = 24.0;
/// Baseline inset of canvas legend labels from the canvas bottom.
const CANVAS_LEGEND_TEXT_BASELINE_INSET_PX: f64 = 17.0;

/// Vertical padding above the first flow legend row.
const FLOW_LEGEND_TOP_PADDING_PX: f64 = 16.0;
/// Height of one flow legend row.
const FLOW_LEGEND_ROW_HEIGHT_PX: f64 = 20.0;
/// Horizontal gap between adjacent flow legend items.
const FLOW_LEGEND_ITEM_GAP_PX: f64 = 16.0;
/// Gap between a flow legend swatch and its label.
const FLOW_LEGEND_SWATCH_TEXT_GAP_PX: f64 = 6.0;

#[derive(Debug, Clone, Copy)]
pub(super) struct CanvasLegendContext {
    pub(super) canvas_height: f64,
}

/// One positioned flow legend item.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct FlowLegendItem {
    pub(super) entry: LegendEntry,
    pub(super) x: f64,
    pub(super) row: usize,
}

/// Wrapped, centered flow legend rows plus the band height they need
/// below the canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub(super) struct FlowLegendPlan {
    pub(super) items: Vec<FlowLegendItem>,
    pub(super) band_height: f64,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct FlowLegendContext<'a> {
    pub(super) canvas_height: f64,
    pub(super) plan: &'a FlowLegendPlan,
}

/// Lays out the flow legend: items flow left to right at fixed slots,
/// wrap when the next item would overflow the canvas width, and every
/// row is centered horizontally.
pub(super) fn plan_flow_legend(
    registry: &LabelRegistry,
    canvas_width: f64,
    style: RenderStyle,
) -> FlowLegendPlan {
    if registry.is_empty() {
        return FlowLegendPlan::default();
    }

    let item_width = |entry: &LegendEntry| {
        style.flow_legend_swatch_size_px
            + FLOW_LEGEND_SWATCH_TEXT_GAP_PX
            + estimate_label_text_width_px(&entry.label, style.flow_legend_font_size_px)
    };

    // Greedy wrap into (start index, end index, row width) spans. A row
    // always holds at least one item, even when that item overflows.
    let entries = registry.entries();
    let mut rows: Vec<(usize, usize, f64)> = Vec::new();
    let mut row_start = 0;
    let mut row_width = 0.0_f64;
    for (index, entry) in entries.iter().enumerate() {
        let width = item_width(entry);
        if index == row_start {
            row_width = width;
            continue;
        }
        let extended = row_width + FLOW_LEGEND_ITEM_GAP_PX + width;
        if extended > canvas_width {
            rows.push((row_start, index, row_width));
            row_start = index;
            row_width = width;
        } else {
            row_width = extended;
        }
    }
    rows.push((row_start, entries.len(), row_width));

    let mut items = Vec::with_capacity(entries.len());
    for (row, &(start, end, width)) in rows.iter().enumerate() {
        let mut x = (canvas_width - width) / 2.0;
        for entry in &entries[start..end] {
            items.push(FlowLegendItem {
                entry: entry.clone(),
                x,
                row,
            });
            x += item_width(entry) + FLOW_LEGEND_ITEM_GAP_PX;
        }
    }

    FlowLegendPlan {
        items,
        band_height: FLOW_LEGEND_TOP_PADDING_PX + rows.len() as f64 * FLOW_LEGEND_ROW_HEIGHT_PX,
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Appends the in-canvas legend derived from the first column only.
    pub(super) fn append_canvas_legend_scene(
        &self,
        frame: &mut LayeredRenderFrame,
        ctx: CanvasLegendContext,
    ) {
        let style = self.core.presentation.render_style;
        let Some(first_column) = self.core.model.columns.first() else {
            return;
        };

        for (slot, point) in first_column.values.iter().enumerate() {
            let x = LEFT_PADDING + slot as f64 * style.canvas_legend_slot_width_px;
            frame.push_rect(
                CanvasLayerKind::Legend,
                RectPrimitive::new(
                    x,
                    ctx.canvas_height - CANVAS_LEGEND_BOTTOM_INSET_PX,
                    style.canvas_legend_swatch_size_px,
                    style.canvas_legend_swatch_size_px,
                    point.color,
                )
                .with_corner_radius(style.canvas_legend_swatch_corner_radius),
            );
            if !point.label.is_empty() {
                frame.push_text(
                    CanvasLayerKind::Legend,
                    TextPrimitive::new(
                        point.label.clone(),
                        x + CANVAS_LEGEND_TEXT_OFFSET_PX,
                        text_top_for_baseline(
                            ctx.canvas_height - CANVAS_LEGEND_TEXT_BASELINE_INSET_PX,
                            style.canvas_legend_font_size_px,
                        ),
                        style.canvas_legend_font_size_px,
                        style.canvas_legend_label_color,
                        TextHAlign::Left,
                    ),
                );
            }
        }
    }

    /// Appends the flow legend band below the canvas.
    pub(super) fn append_flow_legend_scene(
        &self,
        frame: &mut LayeredRenderFrame,
        ctx: FlowLegendContext<'_>,
    ) {
        let style = self.core.presentation.render_style;
        for item in &ctx.plan.items {
            let row_top = ctx.canvas_height
                + FLOW_LEGEND_TOP_PADDING_PX
                + item.row as f64 * FLOW_LEGEND_ROW_HEIGHT_PX;
            frame.push_rect(
                CanvasLayerKind::Legend,
                RectPrimitive::new(
                    item.x,
                    row_top + (FLOW_LEGEND_ROW_HEIGHT_PX - style.flow_legend_swatch_size_px) / 2.0,
                    style.flow_legend_swatch_size_px,
                    style.flow_legend_swatch_size_px,
                    item.entry.color,
                )
                .with_corner_radius(style.flow_legend_swatch_corner_radius),
            );
            if !item.entry.label.is_empty() {
                frame.push_text(
                    CanvasLayerKind::Legend,
                    TextPrimitive::new(
                        item.entry.label.clone(),
                        item.x + style.flow_legend_swatch_size_px + FLOW_LEGEND_SWATCH_TEXT_GAP_PX,
                        row_top + (FLOW_LEGEND_ROW_HEIGHT_PX - style.flow_legend_font_size_px) / 2.0,
                        style.flow_legend_font_size_px,
                        style.flow_legend_label_color,
                        TextHAlign::Left,
                    ),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Column, SeriesPoint};

    fn registry_of(labels: &[&str]) -> LabelRegistry {
        let column = Column::new(
            "Jan",
            labels
                .iter()
                .map(|label| SeriesPoint::new(*label, 1.0, Color::BLACK))
                .collect(),
        );
        LabelRegistry::from_columns(std::slice::from_ref(&column))
    }

    #[test]
    fn empty_registry_needs_no_band() {
        let plan = plan_flow_legend(&registry_of(&[]), 800.0, RenderStyle::default());
        assert!(plan.items.is_empty());
        assert!((plan.band_height - 0.0).abs() < 1e-12);
    }

    #[test]
    fn single_row_is_centered() {
        let plan = plan_flow_legend(&registry_of(&["A", "B"]), 800.0, RenderStyle::default());
        assert_eq!(plan.items.len(), 2);
        assert!(plan.items.iter().all(|item| item.row == 0));
        // One row of padding plus row height.
        assert!((plan.band_height - 36.0).abs() < 1e-12);

        let style = RenderStyle::default();
        let first = &plan.items[0];
        let last = &plan.items[1];
        let row_width = last.x
            + style.flow_legend_swatch_size_px
            + FLOW_LEGEND_SWATCH_TEXT_GAP_PX
            + estimate_label_text_width_px(&last.entry.label, style.flow_legend_font_size_px)
            - first.x;
        let left_margin = first.x;
        let right_margin = 800.0 - (first.x + row_width);
        assert!((left_margin - right_margin).abs() < 1e-9);
    }

    #[test]
    fn items_wrap_when_the_canvas_is_narrow() {
        let plan = plan_flow_legend(
            &registry_of(&["Alpha", "Beta", "Gamma", "Delta"]),
            120.0,
            RenderStyle::default(),
        );
        let max_row = plan.items.iter().map(|item| item.row).max().unwrap_or(0);
        assert!(max_row > 0);
        assert!(plan.band_height > 36.0);
    }

    #[test]
    fn an_overlong_item_still_gets_a_row() {
        let plan = plan_flow_legend(
            &registry_of(&["An exceptionally long legend label"]),
            40.0,
            RenderStyle::default(),
        );
        assert_eq!(plan.items.len(), 1);
        assert_eq!(plan.items[0].row, 0);
    }
}
