use serde::{Deserialize, Serialize};

use crate::core::{Margins, Viewport};
use crate::error::ChartResult;

pub const DEFAULT_WIDTH: f64 = 1000.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;
pub const DEFAULT_FILL_COLOR: &str = "purple";
pub const DEFAULT_X_VAR: &str = "x";
pub const DEFAULT_Y_VAR: &str = "y";
pub const DEFAULT_X_AXIS_LABEL: &str = "X Axis Label";
pub const DEFAULT_Y_AXIS_LABEL: &str = "Y Axis Label";

/// Bar chart configuration.
///
/// Every field is optional in JSON and falls back to its default, so a host
/// can persist only what it changed. Values are never validated: a field
/// name that matches no record yields degenerate geometry at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margins,
    pub fill_color: String,
    pub x_var: String,
    pub y_var: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin: Margins::default(),
            fill_color: DEFAULT_FILL_COLOR.to_owned(),
            x_var: DEFAULT_X_VAR.to_owned(),
            y_var: DEFAULT_Y_VAR.to_owned(),
            x_axis_label: DEFAULT_X_AXIS_LABEL.to_owned(),
            y_axis_label: DEFAULT_Y_AXIS_LABEL.to_owned(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_fields(mut self, x_var: impl Into<String>, y_var: impl Into<String>) -> Self {
        self.x_var = x_var.into();
        self.y_var = y_var.into();
        self
    }

    #[must_use]
    pub fn with_axis_labels(
        mut self,
        x_axis_label: impl Into<String>,
        y_axis_label: impl Into<String>,
    ) -> Self {
        self.x_axis_label = x_axis_label.into();
        self.y_axis_label = y_axis_label.into();
        self
    }

    #[must_use]
    pub fn with_fill_color(mut self, fill_color: impl Into<String>) -> Self {
        self.fill_color = fill_color.into();
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
