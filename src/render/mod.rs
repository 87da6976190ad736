mod axis;
mod frame;
mod layer_stack;
mod layered_frame;
mod null_renderer;
mod primitives;
mod surface;
mod svg_renderer;

pub use axis::{
    AxisGroup, AxisOrient, AxisSpec, AxisTick, AxisTickSpec, TICK_FONT_SIZE_PX, TICK_PADDING_PX,
    TICK_SIZE_PX,
};
pub use frame::RenderFrame;
pub use layer_stack::LayerKind;
pub use layered_frame::{LayerPrimitives, LayeredRenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, Paint, RectPrimitive, TextHAlign, TextPrimitive};
pub use surface::{BarGeometry, BarNode, Surface, TITLE_FONT_SIZE_PX, TitleNode};
pub use svg_renderer::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a sampled, deterministic `LayeredRenderFrame` so drawing
/// code stays isolated from chart configuration, data joins and transitions.
pub trait Renderer {
    fn render(&mut self, frame: &LayeredRenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
