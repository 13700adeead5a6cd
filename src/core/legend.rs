use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::core::types::Column;

/// One legend row: a label and its swatch color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

/// De-duplicated registry of every segment label across all columns.
///
/// Entries keep first-seen order, and the first color observed for a
/// label wins; later occurrences of the same label never override it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelRegistry {
    colors: IndexMap<String, Color>,
}

impl LabelRegistry {
    #[must_use]
    pub fn from_columns(columns: &[Column]) -> Self {
        let mut colors = IndexMap::new();
        for column in columns {
            for point in &column.values {
                colors.entry(point.label.clone()).or_insert(point.color);
            }
        }
        Self { colors }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn color_of(&self, label: &str) -> Option<Color> {
        self.colors.get(label).copied()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    #[must_use]
    pub fn entries(&self) -> Vec<LegendEntry> {
        self.colors
            .iter()
            .map(|(label, color)| LegendEntry {
                label: label.clone(),
                color: *color,
            })
            .collect()
    }
}
