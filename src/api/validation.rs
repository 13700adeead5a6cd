use crate::error::{ChartError, ChartResult};

use super::RenderStyle;

pub(super) fn validate_render_style(style: RenderStyle) -> ChartResult<RenderStyle> {
    style
        .background
        .validate()
        .map_err(restyle("background"))?;
    style
        .grid_line_color
        .validate()
        .map_err(restyle("grid_line_color"))?;
    style
        .axis_line_color
        .validate()
        .map_err(restyle("axis_line_color"))?;
    style
        .tick_label_color
        .validate()
        .map_err(restyle("tick_label_color"))?;
    style
        .total_label_color
        .validate()
        .map_err(restyle("total_label_color"))?;
    style
        .month_label_color
        .validate()
        .map_err(restyle("month_label_color"))?;
    style
        .canvas_legend_label_color
        .validate()
        .map_err(restyle("canvas_legend_label_color"))?;
    style
        .flow_legend_label_color
        .validate()
        .map_err(restyle("flow_legend_label_color"))?;
    style
        .tooltip_background
        .validate()
        .map_err(restyle("tooltip_background"))?;
    style
        .tooltip_text_color
        .validate()
        .map_err(restyle("tooltip_text_color"))?;
    if let Some(shadow) = style.segment_shadow {
        shadow.validate().map_err(restyle("segment_shadow"))?;
    }
    if let Some(shadow) = style.tooltip_shadow {
        shadow.validate().map_err(restyle("tooltip_shadow"))?;
    }

    for (name, value) in [
        ("grid_line_width", style.grid_line_width),
        ("axis_line_width", style.axis_line_width),
        ("tick_label_font_size_px", style.tick_label_font_size_px),
        ("total_label_font_size_px", style.total_label_font_size_px),
        ("month_label_font_size_px", style.month_label_font_size_px),
        (
            "canvas_legend_swatch_size_px",
            style.canvas_legend_swatch_size_px,
        ),
        (
            "canvas_legend_slot_width_px",
            style.canvas_legend_slot_width_px,
        ),
        (
            "canvas_legend_font_size_px",
            style.canvas_legend_font_size_px,
        ),
        (
            "flow_legend_swatch_size_px",
            style.flow_legend_swatch_size_px,
        ),
        ("flow_legend_font_size_px", style.flow_legend_font_size_px),
        ("tooltip_font_size_px", style.tooltip_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidStyle(format!(
                "{name} must be finite and > 0, got {value}"
            )));
        }
    }

    for (name, value) in [
        ("segment_corner_radius", style.segment_corner_radius),
        (
            "canvas_legend_swatch_corner_radius",
            style.canvas_legend_swatch_corner_radius,
        ),
        (
            "flow_legend_swatch_corner_radius",
            style.flow_legend_swatch_corner_radius,
        ),
        ("tooltip_corner_radius", style.tooltip_corner_radius),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidStyle(format!(
                "{name} must be finite and >= 0, got {value}"
            )));
        }
    }

    Ok(style)
}

fn restyle(field: &'static str) -> impl Fn(ChartError) -> ChartError {
    move |err| ChartError::InvalidStyle(format!("{field}: {err}"))
}
