//! Fixed layout rules for the monthly column chart.
//!
//! All horizontal and vertical placement derives from the requested
//! viewport, the column count and the constants below. There is no
//! responsive re-flow: when the columns outgrow the viewport the
//! canvas widens instead, and hosts fall back to horizontal scrolling.

use crate::core::types::Viewport;

/// Width of every column, in pixels.
pub const COLUMN_WIDTH: f64 = 40.0;
/// Horizontal gap between adjacent columns.
pub const COLUMN_GAP: f64 = 30.0;
/// Distance from the canvas left edge to the plot area.
pub const LEFT_PADDING: f64 = 70.0;
/// Margin added on both sides when the canvas has to grow to fit.
pub const OUTER_MARGIN: f64 = 50.0;
/// Distance from the canvas top edge to the plot area.
pub const TOP_PADDING: f64 = 40.0;
/// Vertical band reserved outside the plot area. This is a flat
/// 100px reserve, not the sum of the top and bottom paddings.
pub const PLOT_VERTICAL_RESERVE: f64 = 100.0;
/// Number of tick intervals on the value axis.
pub const TICK_COUNT: usize = 5;
/// Inset of the grid and baseline right edge from the viewport.
pub const AXIS_RIGHT_INSET: f64 = 20.0;

/// Resolved layout for one chart pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    viewport: Viewport,
    column_count: usize,
}

impl ChartLayout {
    #[must_use]
    pub fn new(viewport: Viewport, column_count: usize) -> Self {
        Self {
            viewport,
            column_count,
        }
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn column_count(self) -> usize {
        self.column_count
    }

    /// Height of the plot area (viewport height minus the reserve).
    #[must_use]
    pub fn plot_height(self) -> f64 {
        f64::from(self.viewport.height) - PLOT_VERTICAL_RESERVE
    }

    #[must_use]
    pub fn plot_top(self) -> f64 {
        TOP_PADDING
    }

    /// Baseline of the plot area, where value zero sits.
    #[must_use]
    pub fn plot_bottom(self) -> f64 {
        self.plot_height() + TOP_PADDING
    }

    #[must_use]
    pub fn plot_left(self) -> f64 {
        LEFT_PADDING
    }

    /// Right edge of gridlines and the horizontal axis. Anchored to the
    /// requested viewport, not the expanded canvas.
    #[must_use]
    pub fn grid_right(self) -> f64 {
        f64::from(self.viewport.width) - AXIS_RIGHT_INSET
    }

    /// Left edge of the column at `index`.
    #[must_use]
    pub fn column_x(self, index: usize) -> f64 {
        LEFT_PADDING + index as f64 * (COLUMN_WIDTH + COLUMN_GAP)
    }

    /// Horizontal center of the column at `index`, used for labels and
    /// tooltip anchoring.
    #[must_use]
    pub fn column_center_x(self, index: usize) -> f64 {
        self.column_x(index) + COLUMN_WIDTH / 2.0
    }

    /// Vertical position of the tick at `index` (0 is the topmost tick).
    #[must_use]
    pub fn tick_y(self, index: usize) -> f64 {
        self.plot_height() * index as f64 / TICK_COUNT as f64 + TOP_PADDING
    }

    /// Canvas width: the requested width, or wider when the columns
    /// plus the outer margins need more room.
    #[must_use]
    pub fn canvas_width(self) -> f64 {
        let fitted =
            self.column_count as f64 * (COLUMN_WIDTH + COLUMN_GAP) + 2.0 * OUTER_MARGIN;
        f64::from(self.viewport.width).max(fitted)
    }
}
