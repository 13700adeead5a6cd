//! stackbar-rs: stacked monthly bar chart engine.
//!
//! This crate renders segmented monthly columns with a value axis, dual
//! legends, and segment-level hover and click interaction behind a
//! backend-agnostic rendering contract.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
