use super::RenderStyle;

/// Runtime presentation state grouped separately from the core model.
pub(super) struct ChartPresentationState {
    pub(super) render_style: RenderStyle,
}

impl Default for ChartPresentationState {
    fn default() -> Self {
        Self {
            render_style: RenderStyle::default(),
        }
    }
}
