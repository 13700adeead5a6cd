use crate::core::{Column, Viewport};
use crate::interaction::HoverState;

/// Core chart domain state grouped behind the public facade.
///
/// Everything a render pass derives from lives here: the requested
/// viewport, the optional scale override, the columns and the hover
/// state. Layout, scale and geometry are recomputed from this state on
/// every pass instead of being cached.
pub(super) struct ChartModel {
    pub(super) viewport: Viewport,
    pub(super) max_value: Option<f64>,
    pub(super) columns: Vec<Column>,
    pub(super) hover: HoverState,
}

impl ChartModel {
    #[must_use]
    pub(super) fn new(viewport: Viewport, max_value: Option<f64>) -> Self {
        Self {
            viewport,
            max_value,
            columns: Vec::new(),
            hover: HoverState::default(),
        }
    }
}
