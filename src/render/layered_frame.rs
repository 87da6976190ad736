use crate::core::Viewport;

use super::{LayerKind, LinePrimitive, RectPrimitive, RenderFrame, TextPrimitive};

/// Primitives of one surface group, in coordinates local to `translate`.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: LayerKind,
    pub translate: (f64, f64),
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn new(kind: LayerKind, translate: (f64, f64)) -> Self {
        Self {
            kind,
            translate,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}

/// Sampled drawing surface: one entry per persistent group.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredRenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl LayeredRenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: Vec::new(),
        }
    }

    pub fn push_layer(&mut self, layer: LayerPrimitives) {
        self.layers.push(layer);
    }

    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.rects.len()).sum()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.texts.len()).sum()
    }

    /// Resolves layer translations into one absolute-coordinate frame.
    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            let (dx, dy) = layer.translate;
            frame
                .lines
                .extend(layer.lines.iter().map(|line| line.translated(dx, dy)));
            frame
                .rects
                .extend(layer.rects.iter().map(|rect| rect.clone().translated(dx, dy)));
            frame
                .texts
                .extend(layer.texts.iter().map(|text| text.clone().translated(dx, dy)));
        }
        frame
    }

    #[must_use]
    pub fn flatten_layers(&self, include_layers: &[LayerKind]) -> RenderFrame {
        let filtered = Self {
            viewport: self.viewport,
            layers: self
                .layers
                .iter()
                .filter(|layer| include_layers.contains(&layer.kind))
                .cloned()
                .collect(),
        };
        filtered.flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::{LayerPrimitives, LayeredRenderFrame};
    use crate::core::Viewport;
    use crate::render::{
        Color, LayerKind, LinePrimitive, Paint, RectPrimitive, TextHAlign, TextPrimitive,
    };

    #[test]
    fn flatten_applies_layer_translation_in_layer_order() {
        let mut layered = LayeredRenderFrame::new(Viewport::new(100.0, 50.0));

        let mut bars = LayerPrimitives::new(LayerKind::Bars, (10.0, 5.0));
        bars.rects
            .push(RectPrimitive::new(1.0, 2.0, 3.0, 4.0, Paint::default()));
        layered.push_layer(bars);

        let mut axis = LayerPrimitives::new(LayerKind::XAxis, (10.0, 40.0));
        axis.lines.push(LinePrimitive::new(
            0.0,
            0.0,
            5.0,
            0.0,
            1.0,
            Color::BLACK,
        ));
        axis.texts.push(TextPrimitive::new(
            "A",
            2.5,
            9.0,
            10.0,
            Color::BLACK,
            TextHAlign::Center,
        ));
        layered.push_layer(axis);

        let flattened = layered.flatten();
        assert_eq!(flattened.rects[0].x, 11.0);
        assert_eq!(flattened.rects[0].y, 7.0);
        assert_eq!(flattened.lines[0].y1, 40.0);
        assert_eq!(flattened.texts[0].x, 12.5);

        let axis_only = layered.flatten_layers(&[LayerKind::XAxis]);
        assert!(axis_only.rects.is_empty());
        assert_eq!(axis_only.lines.len(), 1);
    }
}
