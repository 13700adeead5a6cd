mod axis_scene_builder;
mod bar_scene_builder;
mod chart_model;
mod chart_presentation;
mod chart_runtime;
mod data_controller;
mod engine;
mod engine_config;
mod engine_core;
mod engine_snapshot;
mod interaction_controller;
mod json_contract;
mod label_text_formatter;
mod layout_helpers;
mod legend_scene_builder;
mod render_frame_builder;
mod render_style;
mod segment_hit_resolver;
mod snapshot_controller;
mod tooltip_scene_builder;
mod validation;

pub use chart_runtime::SegmentClickHandler;
pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use render_style::RenderStyle;
