use tracing::debug;

use crate::core::{Margins, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{LayeredRenderFrame, Renderer, Surface};

/// Render target identified by a string id.
///
/// Owns at most one drawing surface, created by the first render and reused
/// by every later one, and the clock that transitions are scheduled against.
/// The clock only moves when the host calls `advance` or `settle`.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    id: String,
    now_ms: f64,
    surface: Option<Surface>,
}

impl Container {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            now_ms: 0.0,
            surface: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Moves the clock forward and drops transitions that have finished.
    ///
    /// Negative or non-finite steps leave the clock unchanged.
    pub fn advance(&mut self, elapsed_ms: f64) {
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.now_ms += elapsed_ms;
        }
        let now_ms = self.now_ms;
        if let Some(surface) = self.surface.as_mut() {
            surface.prune(now_ms);
        }
    }

    /// Advances the clock to the end of every running transition.
    pub fn settle(&mut self) {
        let Some(surface) = self.surface.as_ref() else {
            return;
        };
        let remaining = surface.settle_time_ms(self.now_ms) - self.now_ms;
        self.advance(remaining);
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.surface
            .as_ref()
            .is_none_or(|surface| surface.is_settled(self.now_ms))
    }

    #[must_use]
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Existing surface, or a new one when this is the first render.
    pub(crate) fn surface_or_create(&mut self, viewport: Viewport, margins: Margins) -> &mut Surface {
        let id = &self.id;
        self.surface.get_or_insert_with(|| {
            debug!(
                container = %id,
                width = viewport.width,
                height = viewport.height,
                "create drawing surface"
            );
            Surface::new(viewport, margins)
        })
    }

    /// Samples the surface at the current clock.
    pub fn frame(&self) -> ChartResult<LayeredRenderFrame> {
        self.surface
            .as_ref()
            .map(|surface| surface.frame_at(self.now_ms))
            .ok_or_else(|| ChartError::SurfaceMissing {
                container: self.id.clone(),
            })
    }

    pub fn draw<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        let frame = self.frame()?;
        renderer.render(&frame)
    }
}

#[cfg(test)]
mod tests {
    use super::Container;
    use crate::core::{Margins, Viewport};
    use crate::error::ChartError;
    use crate::render::NullRenderer;

    #[test]
    fn drawing_before_any_render_reports_missing_surface() {
        let container = Container::new("vis");
        let mut renderer = NullRenderer::default();
        let err = container.draw(&mut renderer).expect_err("no surface yet");
        assert!(matches!(err, ChartError::SurfaceMissing { container } if container == "vis"));
        assert!(container.is_settled());
    }

    #[test]
    fn surface_is_created_once() {
        let mut container = Container::new("vis");
        container.surface_or_create(Viewport::new(300.0, 200.0), Margins::default());
        container.surface_or_create(Viewport::new(999.0, 999.0), Margins::default());
        let surface = container.surface().expect("surface");
        assert_eq!(surface.viewport(), Viewport::new(300.0, 200.0));
    }

    #[test]
    fn clock_ignores_negative_steps() {
        let mut container = Container::new("vis");
        container.advance(250.0);
        container.advance(-100.0);
        container.advance(f64::NAN);
        assert_eq!(container.now_ms(), 250.0);
    }
}
