mod bar_chart;
mod chart_config;
mod container;
mod orchestrator;

pub use bar_chart::{
    BAR_STAGGER_MS, BAR_TRANSITION_MS, BarChart, X_AXIS_TRANSITION_MS, X_TITLE_OFFSET_PX,
    Y_AXIS_TRANSITION_MS, Y_TITLE_OFFSET_PX,
};
pub use chart_config::{
    ChartConfig, DEFAULT_FILL_COLOR, DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_X_AXIS_LABEL,
    DEFAULT_X_VAR, DEFAULT_Y_AXIS_LABEL, DEFAULT_Y_VAR,
};
pub use container::Container;
pub use orchestrator::{
    FALLBACK_SECTION_COLOR, Orchestrator, OrchestratorState, SECTION_PALETTE, section_fill_color,
};
