use crate::core::Viewport;

use super::{LinePrimitive, RectPrimitive, RenderFrame, TextPrimitive};

/// Logical canvas layers, in paint order.
///
/// Bars paint over gridlines and the axis frame, labels over bars, and
/// the tooltip over everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasLayerKind {
    Background,
    Grid,
    Axis,
    Series,
    Labels,
    Legend,
    Tooltip,
}

impl CanvasLayerKind {
    /// The canonical stacking order for the chart canvas.
    pub const CANONICAL_ORDER: [CanvasLayerKind; 7] = [
        CanvasLayerKind::Background,
        CanvasLayerKind::Grid,
        CanvasLayerKind::Axis,
        CanvasLayerKind::Series,
        CanvasLayerKind::Labels,
        CanvasLayerKind::Legend,
        CanvasLayerKind::Tooltip,
    ];
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

/// Scene grouped by canvas layer, built by the scene builders and
/// flattened into a `RenderFrame` before painting.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredRenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl LayeredRenderFrame {
    /// An empty frame with every canonical layer present, in order.
    #[must_use]
    pub fn canonical(viewport: Viewport) -> Self {
        let layers = CanvasLayerKind::CANONICAL_ORDER
            .into_iter()
            .map(|kind| LayerPrimitives {
                kind,
                lines: Vec::new(),
                rects: Vec::new(),
                texts: Vec::new(),
            })
            .collect();
        Self { viewport, layers }
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.push(line);
        }
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.rects.push(rect);
        }
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    /// Collapses the layers into a flat frame, preserving layer order
    /// within each primitive kind.
    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            frame.lines.extend(layer.lines.iter().copied());
            frame.rects.extend(layer.rects.iter().copied());
            frame.texts.extend(layer.texts.iter().cloned());
        }
        frame
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }
}
