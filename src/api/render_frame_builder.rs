use crate::core::{ChartLayout, Viewport, project_columns};
use crate::render::{LayeredRenderFrame, RenderFrame, Renderer};

use super::ChartEngine;
use super::axis_scene_builder::AxisSceneContext;
use super::bar_scene_builder::BarSceneContext;
use super::legend_scene_builder::{CanvasLegendContext, FlowLegendContext, plan_flow_legend};

impl<R: Renderer> ChartEngine<R> {
    /// Materializes backend-agnostic primitives for one draw pass.
    ///
    /// Geometry computation stays deterministic and centralized in the
    /// API layer; renderer backends only execute drawing commands.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        self.build_layered_frame().flatten()
    }

    /// Builds the scene grouped by canvas layer.
    ///
    /// The frame viewport covers the expanded canvas plus the flow
    /// legend band; the requested viewport only anchors the layout.
    #[must_use]
    pub fn build_layered_frame(&self) -> LayeredRenderFrame {
        let layout = self.derived_layout();
        let scale = self.derived_scale();
        let style = self.core.presentation.render_style;
        let registry = self.label_registry();
        let flow_plan = plan_flow_legend(&registry, layout.canvas_width(), style);

        let mut frame =
            LayeredRenderFrame::canonical(frame_viewport_for(layout, flow_plan.band_height));

        let geometry = project_columns(&self.core.model.columns, scale, layout);
        let canvas_height = f64::from(self.core.model.viewport.height);

        self.append_axis_scene(&mut frame, AxisSceneContext { layout, scale });
        self.append_bar_scene(
            &mut frame,
            BarSceneContext {
                layout,
                geometry: &geometry,
            },
        );
        self.append_canvas_legend_scene(&mut frame, CanvasLegendContext { canvas_height });
        self.append_flow_legend_scene(
            &mut frame,
            FlowLegendContext {
                canvas_height,
                plan: &flow_plan,
            },
        );
        self.append_tooltip_scene(&mut frame);

        frame
    }

    /// Size of the frame the next render pass will produce: the
    /// expanded canvas width and the canvas height plus the flow legend
    /// band. Hosts use this to size scrollable drawing surfaces.
    #[must_use]
    pub fn frame_viewport(&self) -> Viewport {
        let layout = self.derived_layout();
        let plan = plan_flow_legend(
            &self.label_registry(),
            layout.canvas_width(),
            self.core.presentation.render_style,
        );
        frame_viewport_for(layout, plan.band_height)
    }
}

fn frame_viewport_for(layout: ChartLayout, flow_band_height: f64) -> Viewport {
    let width = layout.canvas_width().ceil() as u32;
    let height = (f64::from(layout.viewport().height) + flow_band_height).ceil() as u32;
    Viewport::new(width, height)
}
