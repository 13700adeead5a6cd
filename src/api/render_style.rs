use crate::render::{Color, LineStrokeStyle, ShadowStyle};

/// Style contract for the current render frame.
///
/// Defaults reproduce the reference palette: dashed `#e5e7eb` gridlines,
/// `#333` axes, muted `#888` tick labels and a dark `#333` tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    /// Canvas clear color; hosts apply this to their backend.
    pub background: Color,

    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub grid_line_style: LineStrokeStyle,
    pub axis_line_color: Color,
    pub axis_line_width: f64,
    pub tick_label_color: Color,
    pub tick_label_font_size_px: f64,

    pub segment_corner_radius: f64,
    pub segment_shadow: Option<ShadowStyle>,
    pub total_label_color: Color,
    pub total_label_font_size_px: f64,
    pub month_label_color: Color,
    pub month_label_font_size_px: f64,

    pub canvas_legend_swatch_size_px: f64,
    pub canvas_legend_swatch_corner_radius: f64,
    pub canvas_legend_slot_width_px: f64,
    pub canvas_legend_label_color: Color,
    pub canvas_legend_font_size_px: f64,

    pub flow_legend_swatch_size_px: f64,
    pub flow_legend_swatch_corner_radius: f64,
    pub flow_legend_label_color: Color,
    pub flow_legend_font_size_px: f64,

    pub tooltip_background: Color,
    pub tooltip_text_color: Color,
    pub tooltip_font_size_px: f64,
    pub tooltip_corner_radius: f64,
    pub tooltip_shadow: Option<ShadowStyle>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Color::WHITE,

            grid_line_color: Color::from_rgb8(0xe5, 0xe7, 0xeb),
            grid_line_width: 1.0,
            grid_line_style: LineStrokeStyle::Dashed,
            axis_line_color: Color::from_rgb8(0x33, 0x33, 0x33),
            axis_line_width: 1.5,
            tick_label_color: Color::from_rgb8(0x88, 0x88, 0x88),
            tick_label_font_size_px: 12.0,

            segment_corner_radius: 4.0,
            segment_shadow: Some(ShadowStyle::new(
                0.0,
                1.0,
                2.0,
                Color::from_rgb8(0xe0, 0xe7, 0xef),
            )),
            total_label_color: Color::from_rgb8(0x22, 0x22, 0x22),
            total_label_font_size_px: 12.0,
            month_label_color: Color::from_rgb8(0x33, 0x33, 0x33),
            month_label_font_size_px: 13.0,

            canvas_legend_swatch_size_px: 16.0,
            canvas_legend_swatch_corner_radius: 3.0,
            canvas_legend_slot_width_px: 120.0,
            canvas_legend_label_color: Color::from_rgb8(0x33, 0x33, 0x33),
            canvas_legend_font_size_px: 13.0,

            flow_legend_swatch_size_px: 12.0,
            flow_legend_swatch_corner_radius: 3.0,
            flow_legend_label_color: Color::from_rgb8(0x33, 0x33, 0x33),
            flow_legend_font_size_px: 13.0,

            tooltip_background: Color::from_rgb8(0x33, 0x33, 0x33),
            tooltip_text_color: Color::WHITE,
            tooltip_font_size_px: 12.0,
            tooltip_corner_radius: 6.0,
            tooltip_shadow: Some(ShadowStyle::new(0.0, 2.0, 6.0, Color::rgba(0.0, 0.0, 0.0, 0.2))),
        }
    }
}
