use tracing::{debug, trace};

use crate::core::{Column, LabelRegistry, LegendEntry, ValueScale};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the full column set.
    ///
    /// An active hover is kept as-is: its tooltip copy stays valid and
    /// the next pointer event re-resolves against the new data.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        debug!(column_count = columns.len(), "set columns");
        self.core.model.columns = columns;
    }

    /// Appends one column at the end of the sequence.
    pub fn append_column(&mut self, column: Column) {
        self.core.model.columns.push(column);
        trace!(
            month = %self.core.model.columns[self.core.model.columns.len() - 1].month,
            column_count = self.core.model.columns.len(),
            "append column"
        );
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.core.model.columns
    }

    #[must_use]
    pub fn max_value_override(&self) -> Option<f64> {
        self.core.model.max_value
    }

    /// Replaces the explicit scale maximum; `None` re-enables the
    /// computed maximum.
    pub fn set_max_value(&mut self, max_value: Option<f64>) {
        debug!(?max_value, "set max value override");
        self.core.model.max_value = max_value;
    }

    /// The maximum the value axis currently resolves to.
    #[must_use]
    pub fn effective_max_value(&self) -> f64 {
        self.derived_scale().effective_max()
    }

    /// Stacked totals per column, in column order.
    #[must_use]
    pub fn column_totals(&self) -> Vec<f64> {
        self.core.model.columns.iter().map(Column::total).collect()
    }

    /// First-seen label/color pairs across every column, the source of
    /// the flow legend.
    #[must_use]
    pub fn label_registry(&self) -> LabelRegistry {
        LabelRegistry::from_columns(&self.core.model.columns)
    }

    /// De-duplicated legend rows for hosts that lay the legend out
    /// themselves instead of using the built-in flow band.
    #[must_use]
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        self.label_registry().entries()
    }

    pub(super) fn derived_scale(&self) -> ValueScale {
        ValueScale::resolve(&self.core.model.columns, self.core.model.max_value)
    }
}
