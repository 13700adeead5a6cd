use serde::{Deserialize, Serialize};

use crate::core::{LegendEntry, Viewport};
use crate::interaction::HoverEntry;

/// Serializable deterministic state snapshot used by regression tests
/// and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Requested viewport.
    pub viewport: Viewport,
    /// Frame size actually produced: expanded canvas plus legend band.
    pub frame_viewport: Viewport,
    pub effective_max_value: f64,
    pub tick_values: Vec<f64>,
    pub column_months: Vec<String>,
    pub column_totals: Vec<f64>,
    pub hover: Option<HoverEntry>,
    /// Legend shown inside the canvas, derived from the first column.
    pub canvas_legend: Vec<LegendEntry>,
    /// Legend shown below the canvas, derived from all columns.
    pub flow_legend: Vec<LegendEntry>,
    /// True when the two legends disagree, which happens when later
    /// columns introduce labels or colors the first column lacks.
    pub legends_diverge: bool,
}
