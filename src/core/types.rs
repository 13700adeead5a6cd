use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One labelled value inside a monthly column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
    pub color: Color,
}

impl SeriesPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64, color: Color) -> Self {
        Self {
            label: label.into(),
            value,
            color,
        }
    }

    /// Builds a point from a fixed-precision value, as delivered by
    /// accounting-style data feeds.
    pub fn from_decimal(label: impl Into<String>, value: Decimal, color: Color) -> ChartResult<Self> {
        let value = value
            .to_f64()
            .ok_or_else(|| ChartError::InvalidData("value cannot be represented as f64".into()))?;
        Ok(Self::new(label, value, color))
    }
}

/// One stacked column: a month label plus its segments in stacking order.
///
/// The first segment sits at the bottom of the stack, the last at the top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub month: String,
    pub values: Vec<SeriesPoint>,
}

impl Column {
    #[must_use]
    pub fn new(month: impl Into<String>, values: Vec<SeriesPoint>) -> Self {
        Self {
            month: month.into(),
            values,
        }
    }

    /// Builds a column labelled with the abbreviated month of `date`
    /// (e.g. `"Jan"`), for feeds keyed by calendar dates.
    #[must_use]
    pub fn for_month_of(date: NaiveDate, values: Vec<SeriesPoint>) -> Self {
        Self::new(date.format("%b").to_string(), values)
    }

    /// Sum of all segment values, including negative ones.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().map(|point| point.value).sum()
    }
}

/// Payload handed to the segment click callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentClick {
    pub label: String,
    pub value: f64,
    pub month: String,
}
