use serde::{Deserialize, Serialize};

/// Everything the tooltip needs about the segment under the pointer.
///
/// The label, month and value are copied at hover time so the tooltip
/// stays self-contained even if the data set is swapped mid-hover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverEntry {
    pub column_index: usize,
    pub segment_index: usize,
    pub label: String,
    pub month: String,
    pub value: f64,
    /// Horizontal center of the hovered column.
    pub anchor_x: f64,
    /// Top edge of the hovered segment.
    pub anchor_y: f64,
}

impl HoverEntry {
    #[must_use]
    pub fn targets(&self, column_index: usize, segment_index: usize) -> bool {
        self.column_index == column_index && self.segment_index == segment_index
    }
}

/// Hover state driving the tooltip.
///
/// At most one segment is hovered at a time. The state is scoped to a
/// single pointer interaction: leaving the canvas or moving off every
/// segment clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    entry: Option<HoverEntry>,
}

impl HoverState {
    #[must_use]
    pub fn entry(&self) -> Option<&HoverEntry> {
        self.entry.as_ref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.entry.is_some()
    }

    #[must_use]
    pub fn targets_same_segment(&self, column_index: usize, segment_index: usize) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|entry| entry.targets(column_index, segment_index))
    }

    pub fn on_segment_enter(&mut self, entry: HoverEntry) {
        self.entry = Some(entry);
    }

    /// Unconditionally clears the hover, whether or not one is active.
    pub fn on_pointer_leave(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(column_index: usize, segment_index: usize) -> HoverEntry {
        HoverEntry {
            column_index,
            segment_index,
            label: "Product A".to_owned(),
            month: "Jan".to_owned(),
            value: 10.0,
            anchor_x: 90.0,
            anchor_y: 240.0,
        }
    }

    #[test]
    fn enter_then_leave_round_trip() {
        let mut state = HoverState::default();
        assert!(!state.is_active());

        state.on_segment_enter(entry(0, 1));
        assert!(state.is_active());
        assert!(state.targets_same_segment(0, 1));
        assert!(!state.targets_same_segment(1, 1));

        state.on_pointer_leave();
        assert!(!state.is_active());
        assert_eq!(state.entry(), None);
    }

    #[test]
    fn leave_on_idle_state_is_a_no_op() {
        let mut state = HoverState::default();
        state.on_pointer_leave();
        assert!(!state.is_active());
    }

    #[test]
    fn entering_another_segment_replaces_the_entry() {
        let mut state = HoverState::default();
        state.on_segment_enter(entry(0, 0));
        state.on_segment_enter(entry(2, 1));
        assert!(state.targets_same_segment(2, 1));
        assert!(!state.targets_same_segment(0, 0));
    }
}
