use smallvec::SmallVec;

use crate::core::{Animated, BandScale, LinearScale, SiFormat, Transition};

use super::{Color, LayerKind, LayerPrimitives, LinePrimitive, TextHAlign, TextPrimitive};

pub const TICK_SIZE_PX: f64 = 6.0;
pub const TICK_PADDING_PX: f64 = 3.0;
pub const TICK_FONT_SIZE_PX: f64 = 10.0;

const AXIS_STROKE_WIDTH: f64 = 1.0;

/// Side of the plot an axis is drawn on; ticks point away from the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

/// One tick requested by an axis generator.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTickSpec {
    pub key: String,
    pub label: String,
    pub position: f64,
}

/// Target state of an axis computed from a scale.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub orient: AxisOrient,
    pub ticks: SmallVec<[AxisTickSpec; 12]>,
    pub extent: (f64, f64),
}

impl AxisSpec {
    /// Bottom axis with one tick per category at the band centre.
    #[must_use]
    pub fn bottom_from_band(scale: &BandScale) -> Self {
        let ticks = scale
            .domain()
            .into_iter()
            .filter_map(|category| {
                scale.center(category).map(|position| AxisTickSpec {
                    key: category.to_owned(),
                    label: category.to_owned(),
                    position,
                })
            })
            .collect();
        Self {
            orient: AxisOrient::Bottom,
            ticks,
            extent: ordered(scale.range()),
        }
    }

    /// Left axis with "nice" ticks labelled in SI notation.
    #[must_use]
    pub fn left_from_linear(scale: LinearScale, tick_count: usize, format: SiFormat) -> Self {
        let ticks = scale
            .ticks(tick_count)
            .into_iter()
            .map(|value| AxisTickSpec {
                key: value.to_string(),
                label: format.format(value),
                position: scale.map(value),
            })
            .collect();
        Self {
            orient: AxisOrient::Left,
            ticks,
            extent: ordered(scale.range()),
        }
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|tick| tick.label.as_str()).collect()
    }
}

fn ordered((start, end): (f64, f64)) -> (f64, f64) {
    if end < start { (end, start) } else { (start, end) }
}

/// Retained tick of an axis group.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    key: String,
    label: String,
    position: Animated<f64>,
    opacity: Animated<f64>,
    exiting: bool,
}

impl AxisTick {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn position_at(&self, now_ms: f64) -> f64 {
        self.position.value_at(now_ms)
    }

    #[must_use]
    pub fn opacity_at(&self, now_ms: f64) -> f64 {
        self.opacity.value_at(now_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    #[must_use]
    pub fn end_ms(&self) -> f64 {
        self.position.end_ms().max(self.opacity.end_ms())
    }
}

/// Axis group of a drawing surface.
///
/// Ticks are matched by key across updates: persisting ticks slide to their
/// new position, new ticks fade in, removed ticks fade out and are pruned
/// once invisible.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisGroup {
    orient: AxisOrient,
    translate: (f64, f64),
    ticks: Vec<AxisTick>,
    extent_start: Animated<f64>,
    extent_end: Animated<f64>,
    drawn: bool,
}

impl AxisGroup {
    #[must_use]
    pub fn new(orient: AxisOrient) -> Self {
        Self {
            orient,
            translate: (0.0, 0.0),
            ticks: Vec::new(),
            extent_start: Animated::settled(0.0),
            extent_end: Animated::settled(0.0),
            drawn: false,
        }
    }

    #[must_use]
    pub fn orient(&self) -> AxisOrient {
        self.orient
    }

    #[must_use]
    pub fn translate(&self) -> (f64, f64) {
        self.translate
    }

    pub fn set_translate(&mut self, translate: (f64, f64)) {
        self.translate = translate;
    }

    /// Ticks currently in the group, including ones fading out.
    #[must_use]
    pub fn ticks(&self) -> &[AxisTick] {
        &self.ticks
    }

    /// Labels of ticks that are not on their way out.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.ticks
            .iter()
            .filter(|tick| !tick.exiting)
            .map(AxisTick::label)
            .collect()
    }

    pub fn update(&mut self, spec: &AxisSpec, now_ms: f64, transition: Transition) {
        self.prune(now_ms);

        let mut previous = std::mem::take(&mut self.ticks);
        let mut next = Vec::with_capacity(spec.ticks.len() + previous.len());
        for tick_spec in &spec.ticks {
            let existing = previous
                .iter()
                .position(|tick| tick.key == tick_spec.key)
                .map(|index| previous.remove(index));
            let tick = match existing {
                Some(mut tick) => {
                    tick.label.clone_from(&tick_spec.label);
                    tick.exiting = false;
                    tick.position.retarget(tick_spec.position, now_ms, transition);
                    tick.opacity.retarget(1.0, now_ms, transition);
                    tick
                }
                None => {
                    let mut opacity = Animated::settled(0.0);
                    opacity.retarget(1.0, now_ms, transition);
                    AxisTick {
                        key: tick_spec.key.clone(),
                        label: tick_spec.label.clone(),
                        position: Animated::settled(tick_spec.position),
                        opacity,
                        exiting: false,
                    }
                }
            };
            next.push(tick);
        }

        for mut stale in previous {
            if !stale.exiting {
                stale.exiting = true;
                stale.opacity.retarget(0.0, now_ms, transition);
            }
            next.push(stale);
        }

        if self.drawn {
            self.extent_start.retarget(spec.extent.0, now_ms, transition);
            self.extent_end.retarget(spec.extent.1, now_ms, transition);
        } else {
            self.extent_start.set(spec.extent.0);
            self.extent_end.set(spec.extent.1);
            self.drawn = true;
        }
        self.ticks = next;
    }

    #[must_use]
    pub fn extent_end_ms(&self) -> f64 {
        self.extent_start.end_ms().max(self.extent_end.end_ms())
    }

    /// Removes ticks whose fade-out has completed.
    pub fn prune(&mut self, now_ms: f64) {
        self.ticks
            .retain(|tick| !(tick.exiting && tick.opacity.is_settled(now_ms)));
        for tick in &mut self.ticks {
            tick.position.prune(now_ms);
            tick.opacity.prune(now_ms);
        }
    }

    #[must_use]
    pub fn is_settled(&self, now_ms: f64) -> bool {
        self.extent_start.is_settled(now_ms)
            && self.extent_end.is_settled(now_ms)
            && self
                .ticks
                .iter()
                .all(|tick| {
                    !tick.exiting
                        && tick.position.is_settled(now_ms)
                        && tick.opacity.is_settled(now_ms)
                })
    }

    #[must_use]
    pub fn primitives_at(&self, kind: LayerKind, now_ms: f64) -> LayerPrimitives {
        let mut layer = LayerPrimitives::new(kind, self.translate);
        if !self.drawn {
            return layer;
        }

        let start = self.extent_start.value_at(now_ms);
        let end = self.extent_end.value_at(now_ms);
        let outer = match self.orient {
            AxisOrient::Bottom => TICK_SIZE_PX,
            AxisOrient::Left => -TICK_SIZE_PX,
        };
        let domain_path = match self.orient {
            AxisOrient::Bottom => [
                (start, outer, start, 0.0),
                (start, 0.0, end, 0.0),
                (end, 0.0, end, outer),
            ],
            AxisOrient::Left => [
                (outer, start, 0.0, start),
                (0.0, start, 0.0, end),
                (0.0, end, outer, end),
            ],
        };
        for (x1, y1, x2, y2) in domain_path {
            push_line(&mut layer, x1, y1, x2, y2, Color::BLACK);
        }

        for tick in &self.ticks {
            let position = tick.position_at(now_ms);
            if !position.is_finite() {
                continue;
            }
            let color = Color::BLACK.with_alpha(tick.opacity_at(now_ms));
            let label_offset = TICK_SIZE_PX.max(0.0) + TICK_PADDING_PX;
            match self.orient {
                AxisOrient::Bottom => {
                    push_line(&mut layer, position, 0.0, position, TICK_SIZE_PX, color);
                    layer.texts.push(TextPrimitive::new(
                        tick.label.clone(),
                        position,
                        label_offset + 0.71 * TICK_FONT_SIZE_PX,
                        TICK_FONT_SIZE_PX,
                        color,
                        TextHAlign::Center,
                    ));
                }
                AxisOrient::Left => {
                    push_line(&mut layer, 0.0, position, -TICK_SIZE_PX, position, color);
                    layer.texts.push(TextPrimitive::new(
                        tick.label.clone(),
                        -label_offset,
                        position + 0.32 * TICK_FONT_SIZE_PX,
                        TICK_FONT_SIZE_PX,
                        color,
                        TextHAlign::Right,
                    ));
                }
            }
        }
        layer
    }
}

fn push_line(layer: &mut LayerPrimitives, x1: f64, y1: f64, x2: f64, y2: f64, color: Color) {
    if [x1, y1, x2, y2].iter().all(|value| value.is_finite()) {
        layer
            .lines
            .push(LinePrimitive::new(x1, y1, x2, y2, AXIS_STROKE_WIDTH, color));
    }
}
