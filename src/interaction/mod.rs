use serde::{Deserialize, Serialize};
use tracing::trace;

pub const DEFAULT_CONTAINER_ID: &str = "graphic";
pub const DEFAULT_STEP_CLASS: &str = "step";
pub const DEFAULT_CHART_REGION_ID: &str = "vis";

/// Event emitted by a narrative driver when the reader's position changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NarrativeEvent {
    /// Section `index` (0-based, document order) became the active one.
    Active { index: usize },
}

/// Receiver of narrative events.
pub trait SectionListener {
    fn on_active_section(&mut self, index: usize);

    fn on_narrative_event(&mut self, event: NarrativeEvent) {
        match event {
            NarrativeEvent::Active { index } => self.on_active_section(index),
        }
    }
}

/// Where a narrative driver looks for its sections and where the chart lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeBinding {
    pub container_id: String,
    pub step_class: String,
    pub chart_region_id: String,
}

impl Default for NarrativeBinding {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_owned(),
            step_class: DEFAULT_STEP_CLASS.to_owned(),
            chart_region_id: DEFAULT_CHART_REGION_ID.to_owned(),
        }
    }
}

/// Deterministic stand-in for a scroll-position driver.
///
/// Emits `Active` only when the index changes, and drops indices past the
/// number of bound steps, the same way a driver watching real sections
/// would.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedNarrative {
    binding: NarrativeBinding,
    step_count: usize,
    current: Option<usize>,
}

impl ScriptedNarrative {
    #[must_use]
    pub fn new(binding: NarrativeBinding, step_count: usize) -> Self {
        Self {
            binding,
            step_count,
            current: None,
        }
    }

    #[must_use]
    pub fn binding(&self) -> &NarrativeBinding {
        &self.binding
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Index of the active section, if any event has fired yet.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Moves the reader to `index`; returns the event delivered, if any.
    pub fn scroll_to<L: SectionListener + ?Sized>(
        &mut self,
        index: usize,
        listener: &mut L,
    ) -> Option<NarrativeEvent> {
        if index >= self.step_count {
            trace!(index, step_count = self.step_count, "section index out of range");
            return None;
        }
        if self.current == Some(index) {
            return None;
        }
        self.current = Some(index);
        let event = NarrativeEvent::Active { index };
        listener.on_narrative_event(event);
        Some(event)
    }

    /// Scrolls through `indices` in order and returns the delivered events.
    pub fn replay<L, I>(&mut self, indices: I, listener: &mut L) -> Vec<NarrativeEvent>
    where
        L: SectionListener + ?Sized,
        I: IntoIterator<Item = usize>,
    {
        indices
            .into_iter()
            .filter_map(|index| self.scroll_to(index, listener))
            .collect()
    }
}
