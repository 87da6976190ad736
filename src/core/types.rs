use serde::{Deserialize, Serialize};

/// Outer size of a drawing surface in pixels.
///
/// Sizes are plain floats because chart configuration is never validated;
/// backends that need a positive integer raster check `is_valid` themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Space reserved around the plot area for axes and titles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(0.0, 50.0, 70.0, 50.0)
    }
}

/// Drawing area left for data symbols once margins are removed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InnerArea {
    pub width: f64,
    pub height: f64,
}

impl InnerArea {
    #[must_use]
    pub fn from_outer(viewport: Viewport, margins: Margins) -> Self {
        Self {
            width: viewport.width - margins.left - margins.right,
            height: viewport.height - margins.bottom - margins.top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{InnerArea, Margins, Viewport};

    #[test]
    fn inner_area_subtracts_default_margins() {
        let inner = InnerArea::from_outer(Viewport::new(1000.0, 600.0), Margins::default());
        assert_eq!(inner.width, 880.0);
        assert_eq!(inner.height, 550.0);
    }

    #[test]
    fn viewport_rejects_non_positive_sizes() {
        assert!(Viewport::new(10.0, 10.0).is_valid());
        assert!(!Viewport::new(0.0, 10.0).is_valid());
        assert!(!Viewport::new(10.0, f64::NAN).is_valid());
    }
}
