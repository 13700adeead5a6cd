use ordered_float::OrderedFloat;
use tracing::warn;

use crate::core::types::Column;

/// Vertical value scale shared by every column in a pass.
///
/// The scale maps segment values to fractions of the plot height. It is
/// anchored at zero: a value equal to the effective maximum fills the
/// plot exactly, and larger values overflow it without clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    effective_max: f64,
}

impl ValueScale {
    /// Resolves the effective maximum from an optional override and the
    /// column totals.
    ///
    /// An override is honored only when it is finite and positive;
    /// otherwise the largest stacked total wins. A degenerate result
    /// (no columns, or a non-finite or non-positive total) collapses
    /// the scale to zero and is logged rather than silently patched.
    #[must_use]
    pub fn resolve(columns: &[Column], max_value: Option<f64>) -> Self {
        if let Some(max) = max_value {
            if max.is_finite() && max > 0.0 {
                return Self { effective_max: max };
            }
            warn!(max, "ignoring degenerate max value override");
        }

        let computed = columns
            .iter()
            .map(|column| OrderedFloat(column.total()))
            .max()
            .map(OrderedFloat::into_inner);

        let effective_max = match computed {
            Some(total) if total.is_finite() => total,
            Some(total) => {
                warn!(total, "column totals produced a non-finite maximum");
                0.0
            }
            None => {
                warn!("no columns to derive a value scale from");
                0.0
            }
        };

        Self { effective_max }
    }

    #[must_use]
    pub fn effective_max(self) -> f64 {
        self.effective_max
    }

    /// Fraction of the plot height a value occupies.
    ///
    /// Not clamped: values above the maximum yield ratios above 1 and
    /// negative values yield negative ratios. The ratio is 0 whenever
    /// the maximum is non-positive or either operand is non-finite.
    #[must_use]
    pub fn height_ratio(self, value: f64) -> f64 {
        if !value.is_finite() || !self.effective_max.is_finite() || self.effective_max <= 0.0 {
            return 0.0;
        }
        value / self.effective_max
    }

    /// Tick values from the top of the axis down to zero.
    ///
    /// Returns `tick_count + 1` values; each is the rounded fraction
    /// `max * (tick_count - i) / tick_count`.
    #[must_use]
    pub fn tick_values(self, tick_count: usize) -> Vec<f64> {
        if tick_count == 0 {
            return vec![self.effective_max.round()];
        }
        (0..=tick_count)
            .map(|index| {
                let remaining = (tick_count - index) as f64;
                (self.effective_max * remaining / tick_count as f64).round()
            })
            .collect()
    }
}
