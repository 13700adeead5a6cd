pub mod color;
pub mod layout;
pub mod legend;
pub mod scale;
pub mod stacked_series;
pub mod types;

pub use color::Color;
pub use layout::ChartLayout;
pub use legend::{LabelRegistry, LegendEntry};
pub use scale::ValueScale;
pub use stacked_series::{ColumnGeometry, SegmentGeometry, project_columns};
pub use types::{Column, SegmentClick, SeriesPoint, Viewport};
