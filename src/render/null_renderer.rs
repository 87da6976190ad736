use crate::error::ChartResult;
use crate::render::{LayeredRenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates the flattened frame so tests catch geometry a raster
/// backend would refuse.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_layer_count: usize,
    pub last_rect_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &LayeredRenderFrame) -> ChartResult<()> {
        frame.flatten().validate()?;
        self.frames_rendered += 1;
        self.last_layer_count = frame.layers.len();
        self.last_rect_count = frame.rect_count();
        self.last_line_count = frame.line_count();
        self.last_text_count = frame.text_count();
        Ok(())
    }
}
