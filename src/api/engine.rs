use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::validation::validate_render_style;
use super::{
    ChartEngineConfig, RenderStyle, chart_model::ChartModel,
    chart_presentation::ChartPresentationState, chart_runtime::ChartRuntimeState,
    engine_core::EngineCore,
};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the column data, the hover state and the click
/// callback, derives scene geometry per pass, and hands finished frames
/// to the renderer.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> std::fmt::Debug for ChartEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartEngine").finish_non_exhaustive()
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Creates a fully initialized engine for the configured viewport.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        if !config.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        Ok(Self {
            renderer,
            core: EngineCore {
                model: ChartModel::new(config.viewport, config.max_value),
                presentation: ChartPresentationState::default(),
                runtime: ChartRuntimeState::default(),
            },
        })
    }

    /// The requested viewport, before any horizontal canvas expansion.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.model.viewport
    }

    /// Updates the requested viewport used by layout and scene building.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.core.model.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.core.presentation.render_style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        self.core.presentation.render_style = validate_render_style(style)?;
        Ok(())
    }

    /// Builds the scene for the current state and paints it.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame();
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
