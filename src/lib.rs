//! scrolly-chart: a retained-mode bar chart driven by a scrolling narrative.
//!
//! `BarChart` renders records into a `Container`, animating bars, axes and
//! titles between successive renders. `Orchestrator` binds one chart to a
//! narrative and recolors it whenever a new section becomes active. Sampled
//! frames are drawn by any `Renderer` (null, SVG, or Cairo behind the
//! `cairo-backend` feature).

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{BarChart, ChartConfig, Container, Orchestrator};
pub use error::{ChartError, ChartResult};
