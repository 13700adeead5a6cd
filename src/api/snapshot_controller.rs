use crate::core::{LegendEntry, layout::TICK_COUNT};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, EngineSnapshot};

impl<R: Renderer> ChartEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let scale = self.derived_scale();
        let columns = &self.core.model.columns;
        let canvas_legend: Vec<LegendEntry> = columns
            .first()
            .map(|column| {
                column
                    .values
                    .iter()
                    .map(|point| LegendEntry {
                        label: point.label.clone(),
                        color: point.color,
                    })
                    .collect()
            })
            .unwrap_or_default();
        let flow_legend = self.legend_entries();
        let legends_diverge = canvas_legend != flow_legend;
        EngineSnapshot {
            viewport: self.core.model.viewport,
            frame_viewport: self.frame_viewport(),
            effective_max_value: scale.effective_max(),
            tick_values: scale.tick_values(TICK_COUNT),
            column_months: columns.iter().map(|column| column.month.clone()).collect(),
            column_totals: self.column_totals(),
            hover: self.core.model.hover.entry().cloned(),
            canvas_legend,
            flow_legend,
            legends_diverge,
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        let snapshot = self.snapshot();
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
