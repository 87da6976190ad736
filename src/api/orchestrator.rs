use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Record;
use crate::interaction::{DEFAULT_CHART_REGION_ID, SectionListener};

use super::{BarChart, ChartConfig, Container};

/// Fill color per narrative section; indices past the end use `FALLBACK_SECTION_COLOR`.
pub const SECTION_PALETTE: [&str; 4] = ["blue", "red", "orange", "black"];
pub const FALLBACK_SECTION_COLOR: &str = "black";

#[must_use]
pub fn section_fill_color(index: usize) -> &'static str {
    SECTION_PALETTE
        .get(index)
        .copied()
        .unwrap_or(FALLBACK_SECTION_COLOR)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrchestratorState {
    Uninitialized,
    Rendered,
}

/// Binds one bar chart to a scrolling narrative.
///
/// Owns the chart, its data and the container it draws into.
#[derive(Debug, Clone, PartialEq)]
pub struct Orchestrator {
    chart: BarChart,
    data: Vec<Record>,
    container: Container,
    state: OrchestratorState,
}

impl Orchestrator {
    #[must_use]
    pub fn new(chart: BarChart, data: Vec<Record>, container: Container) -> Self {
        Self {
            chart,
            data,
            container,
            state: OrchestratorState::Uninitialized,
        }
    }

    /// Two-bar sample page: `Left Bar` 11 and `Right Bar` 34.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(
            BarChart::from_config(Self::demo_config()),
            Self::demo_data(),
            Container::new(DEFAULT_CHART_REGION_ID),
        )
    }

    #[must_use]
    pub fn demo_config() -> ChartConfig {
        ChartConfig::default()
            .with_fields("name", "value")
            .with_axis_labels("Bar", "Arbitrary Value")
    }

    #[must_use]
    pub fn demo_data() -> Vec<Record> {
        vec![
            Record::new().with("name", "Left Bar").with("value", 11),
            Record::new().with("name", "Right Bar").with("value", 34),
        ]
    }

    /// Initial render.
    pub fn start(&mut self) {
        self.chart.render(&mut self.container, &self.data);
        self.state = OrchestratorState::Rendered;
    }

    #[must_use]
    pub fn state(&self) -> OrchestratorState {
        self.state
    }

    #[must_use]
    pub fn chart(&self) -> &BarChart {
        &self.chart
    }

    #[must_use]
    pub fn data(&self) -> &[Record] {
        &self.data
    }

    #[must_use]
    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut Container {
        &mut self.container
    }
}

impl SectionListener for Orchestrator {
    fn on_active_section(&mut self, index: usize) {
        let fill_color = section_fill_color(index);
        debug!(index, fill_color, "active section");
        self.chart.set_fill_color(fill_color);
        self.chart.render(&mut self.container, &self.data);
        self.state = OrchestratorState::Rendered;
    }
}
