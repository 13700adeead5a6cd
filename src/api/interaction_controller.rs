use tracing::trace;

use crate::core::SegmentClick;
use crate::interaction::HoverEntry;
use crate::render::Renderer;

use super::{ChartEngine, chart_runtime::SegmentClickHandler};

impl<R: Renderer> ChartEngine<R> {
    /// The segment currently under the pointer, if any.
    #[must_use]
    pub fn hover_entry(&self) -> Option<&HoverEntry> {
        self.core.model.hover.entry()
    }

    /// Handles pointer movement in canvas coordinates.
    ///
    /// Entering a segment records it as hovered, moving within the same
    /// segment changes nothing, and moving onto empty canvas clears the
    /// hover.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        match self.resolve_segment_hit(x, y) {
            Some(hit) => {
                let geometry = hit.geometry;
                if self
                    .core
                    .model
                    .hover
                    .targets_same_segment(geometry.column_index, geometry.segment_index)
                {
                    return;
                }
                if let Some(entry) = self.hover_entry_for_hit(hit) {
                    trace!(
                        column_index = entry.column_index,
                        segment_index = entry.segment_index,
                        label = %entry.label,
                        "segment hover enter"
                    );
                    self.core.model.hover.on_segment_enter(entry);
                }
            }
            None => {
                if self.core.model.hover.is_active() {
                    trace!("segment hover cleared");
                }
                self.core.model.hover.on_pointer_leave();
            }
        }
    }

    /// Marks the pointer as outside the canvas; always clears the hover.
    pub fn pointer_leave(&mut self) {
        self.core.model.hover.on_pointer_leave();
    }

    /// Handles a click in canvas coordinates.
    ///
    /// When a segment is hit and a handler is installed, the handler is
    /// invoked exactly once with that segment's payload. Clicks on empty
    /// canvas do nothing, and the hover state is left untouched either
    /// way.
    pub fn pointer_click(&mut self, x: f64, y: f64) {
        let payload = self
            .resolve_segment_hit(x, y)
            .and_then(|hit| self.click_payload_for_hit(hit));
        let Some(payload) = payload else {
            return;
        };
        trace!(label = %payload.label, month = %payload.month, "segment click");
        if let Some(handler) = self.core.runtime.on_segment_click.as_mut() {
            handler(payload);
        }
    }

    /// Installs the segment click callback, replacing any previous one.
    pub fn set_on_segment_click(&mut self, handler: impl FnMut(SegmentClick) + 'static) {
        self.core.runtime.on_segment_click = Some(Box::new(handler) as SegmentClickHandler);
    }

    pub fn clear_on_segment_click(&mut self) {
        self.core.runtime.on_segment_click = None;
    }
}
