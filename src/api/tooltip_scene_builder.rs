use crate::render::{
    CanvasLayerKind, FontWeight, LayeredRenderFrame, RectPrimitive, Renderer, TextHAlign,
    TextPrimitive,
};

use super::ChartEngine;
use super::label_text_formatter::format_value;

/// Fixed tooltip panel size.
pub(super) const TOOLTIP_WIDTH_PX: f64 = 120.0;
pub(super) const TOOLTIP_HEIGHT_PX: f64 = 40.0;
/// Panel offset left of the anchor; half the panel width, so the panel
/// is centered on the hovered column.
pub(super) const TOOLTIP_OFFSET_X_PX: f64 = 60.0;
/// Panel offset above the anchor (the hovered segment's top edge).
pub(super) const TOOLTIP_OFFSET_Y_PX: f64 = 50.0;
const TOOLTIP_PADDING_PX: f64 = 6.0;
const TOOLTIP_LINE_ADVANCE_PX: f64 = 14.0;

impl<R: Renderer> ChartEngine<R> {
    /// Appends the hover tooltip: a fixed-size panel above the hovered
    /// segment with the label and a `{value} in {month}` detail line.
    ///
    /// No hover, no primitives. The panel may extend past the canvas
    /// near the edges; it is not clamped.
    pub(super) fn append_tooltip_scene(&self, frame: &mut LayeredRenderFrame) {
        let Some(entry) = self.core.model.hover.entry() else {
            return;
        };
        let style = self.core.presentation.render_style;

        let panel_x = entry.anchor_x - TOOLTIP_OFFSET_X_PX;
        let panel_y = entry.anchor_y - TOOLTIP_OFFSET_Y_PX;
        frame.push_rect(
            CanvasLayerKind::Tooltip,
            RectPrimitive::new(
                panel_x,
                panel_y,
                TOOLTIP_WIDTH_PX,
                TOOLTIP_HEIGHT_PX,
                style.tooltip_background,
            )
            .with_corner_radius(style.tooltip_corner_radius)
            .with_shadow(style.tooltip_shadow),
        );

        if !entry.label.is_empty() {
            frame.push_text(
                CanvasLayerKind::Tooltip,
                TextPrimitive::new(
                    entry.label.clone(),
                    entry.anchor_x,
                    panel_y + TOOLTIP_PADDING_PX,
                    style.tooltip_font_size_px,
                    style.tooltip_text_color,
                    TextHAlign::Center,
                )
                .with_weight(FontWeight::Bold),
            );
        }
        frame.push_text(
            CanvasLayerKind::Tooltip,
            TextPrimitive::new(
                format!("{} in {}", format_value(entry.value), entry.month),
                entry.anchor_x,
                panel_y + TOOLTIP_PADDING_PX + TOOLTIP_LINE_ADVANCE_PX,
                style.tooltip_font_size_px,
                style.tooltip_text_color,
                TextHAlign::Center,
            ),
        );
    }
}
