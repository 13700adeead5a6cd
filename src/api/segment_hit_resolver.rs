use crate::core::{ChartLayout, SegmentClick, SegmentGeometry, project_columns};
use crate::interaction::HoverEntry;
use crate::render::Renderer;

use super::ChartEngine;

/// Segment located under a pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct SegmentHit {
    pub(super) geometry: SegmentGeometry,
}

impl<R: Renderer> ChartEngine<R> {
    pub(super) fn derived_layout(&self) -> ChartLayout {
        ChartLayout::new(self.core.model.viewport, self.core.model.columns.len())
    }

    /// Finds the segment under `(x, y)`, if any.
    ///
    /// The same projection that feeds the scene builder is used here, so
    /// hit regions always agree with the painted rectangles. Within a
    /// column the topmost painted segment wins on shared edges, hence
    /// the reverse iteration.
    pub(super) fn resolve_segment_hit(&self, x: f64, y: f64) -> Option<SegmentHit> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }

        let geometry = project_columns(
            &self.core.model.columns,
            self.derived_scale(),
            self.derived_layout(),
        );
        for column in &geometry {
            for segment in column.segments.iter().rev() {
                if segment.contains(x, y) {
                    return Some(SegmentHit {
                        geometry: *segment,
                    });
                }
            }
        }
        None
    }

    pub(super) fn hover_entry_for_hit(&self, hit: SegmentHit) -> Option<HoverEntry> {
        let column = self.core.model.columns.get(hit.geometry.column_index)?;
        let point = column.values.get(hit.geometry.segment_index)?;
        Some(HoverEntry {
            column_index: hit.geometry.column_index,
            segment_index: hit.geometry.segment_index,
            label: point.label.clone(),
            month: column.month.clone(),
            value: point.value,
            anchor_x: hit.geometry.anchor_x,
            anchor_y: hit.geometry.anchor_y,
        })
    }

    pub(super) fn click_payload_for_hit(&self, hit: SegmentHit) -> Option<SegmentClick> {
        let column = self.core.model.columns.get(hit.geometry.column_index)?;
        let point = column.values.get(hit.geometry.segment_index)?;
        Some(SegmentClick {
            label: point.label.clone(),
            value: point.value,
            month: column.month.clone(),
        })
    }
}
