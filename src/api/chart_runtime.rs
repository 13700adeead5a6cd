use crate::core::SegmentClick;

/// Host callback invoked once per resolved segment click.
pub type SegmentClickHandler = Box<dyn FnMut(SegmentClick)>;

/// Runtime orchestration state grouped separately from model and
/// presentation.
#[derive(Default)]
pub(super) struct ChartRuntimeState {
    pub(super) on_segment_click: Option<SegmentClickHandler>,
}
