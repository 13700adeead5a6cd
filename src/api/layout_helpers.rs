/// Deterministic, backend-independent estimate of rendered text width.
///
/// Used by the flow legend to plan row wrapping without consulting a
/// font backend.
pub(super) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

/// Converts a text baseline position into the top edge expected by
/// `TextPrimitive`, approximating the ascent with the font size.
pub(super) fn text_top_for_baseline(baseline_y: f64, font_size_px: f64) -> f64 {
    baseline_y - font_size_px
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_estimate_never_collapses_below_font_size() {
        assert!((estimate_label_text_width_px("", 13.0) - 13.0).abs() < 1e-12);
        assert!(estimate_label_text_width_px("Product A", 13.0) > 13.0);
    }

    #[test]
    fn width_estimate_grows_with_text_length() {
        let short = estimate_label_text_width_px("A", 13.0);
        let long = estimate_label_text_width_px("A very long label", 13.0);
        assert!(long > short);
    }

    #[test]
    fn baseline_conversion_subtracts_font_size() {
        assert!((text_top_for_baseline(344.0, 12.0) - 332.0).abs() < 1e-12);
    }
}
