use crate::core::{Animated, JoinKey, Margins, Transition, Viewport};

use super::{
    AxisGroup, AxisOrient, Color, LayerKind, LayerPrimitives, LayeredRenderFrame, Paint,
    RectPrimitive, TextHAlign, TextPrimitive,
};

pub const TITLE_FONT_SIZE_PX: f64 = 14.0;

/// Target geometry and paint of one bar, in bar-group coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Paint,
}

/// Retained bar bound to one record.
#[derive(Debug, Clone, PartialEq)]
pub struct BarNode {
    key: JoinKey,
    x: Animated<f64>,
    y: Animated<f64>,
    width: Animated<f64>,
    height: Animated<f64>,
    fill: Animated<Paint>,
}

impl BarNode {
    /// New bar resting at `geometry` with no transition.
    #[must_use]
    pub fn new(key: JoinKey, geometry: BarGeometry) -> Self {
        Self {
            key,
            x: Animated::settled(geometry.x),
            y: Animated::settled(geometry.y),
            width: Animated::settled(geometry.width),
            height: Animated::settled(geometry.height),
            fill: Animated::settled(geometry.fill),
        }
    }

    #[must_use]
    pub fn key(&self) -> &JoinKey {
        &self.key
    }

    /// Geometry the bar is heading towards.
    #[must_use]
    pub fn target(&self) -> BarGeometry {
        BarGeometry {
            x: *self.x.target(),
            y: *self.y.target(),
            width: *self.width.target(),
            height: *self.height.target(),
            fill: self.fill.target().clone(),
        }
    }

    #[must_use]
    pub fn geometry_at(&self, now_ms: f64) -> BarGeometry {
        BarGeometry {
            x: self.x.value_at(now_ms),
            y: self.y.value_at(now_ms),
            width: self.width.value_at(now_ms),
            height: self.height.value_at(now_ms),
            fill: self.fill.value_at(now_ms),
        }
    }

    /// Time at which every attribute starts moving towards the current target.
    #[must_use]
    pub fn transition_start_ms(&self) -> f64 {
        self.height.start_ms()
    }

    pub fn transition_to(&mut self, geometry: BarGeometry, now_ms: f64, transition: Transition) {
        self.x.retarget(geometry.x, now_ms, transition);
        self.y.retarget(geometry.y, now_ms, transition);
        self.width.retarget(geometry.width, now_ms, transition);
        self.height.retarget(geometry.height, now_ms, transition);
        self.fill.retarget(geometry.fill, now_ms, transition);
    }

    #[must_use]
    pub fn is_settled(&self, now_ms: f64) -> bool {
        self.x.is_settled(now_ms)
            && self.y.is_settled(now_ms)
            && self.width.is_settled(now_ms)
            && self.height.is_settled(now_ms)
            && self.fill.is_settled(now_ms)
    }

    fn target_end_ms(&self) -> f64 {
        [
            self.x.end_ms(),
            self.y.end_ms(),
            self.width.end_ms(),
            self.height.end_ms(),
            self.fill.end_ms(),
        ]
        .into_iter()
        .fold(f64::NEG_INFINITY, f64::max)
    }

    fn prune(&mut self, now_ms: f64) {
        self.x.prune(now_ms);
        self.y.prune(now_ms);
        self.width.prune(now_ms);
        self.height.prune(now_ms);
        self.fill.prune(now_ms);
    }
}

/// Axis title text node.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleNode {
    text: String,
    position: (f64, f64),
    rotation_deg: f64,
}

impl TitleNode {
    #[must_use]
    pub fn new(rotation_deg: f64) -> Self {
        Self {
            text: String::new(),
            position: (0.0, 0.0),
            rotation_deg,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    #[must_use]
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    pub fn set_position(&mut self, position: (f64, f64)) {
        self.position = position;
    }

    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text = text.to_owned();
        }
    }

    fn primitives(&self, kind: LayerKind) -> LayerPrimitives {
        let mut layer = LayerPrimitives::new(kind, (0.0, 0.0));
        if !self.text.is_empty() {
            layer.texts.push(
                TextPrimitive::new(
                    self.text.clone(),
                    self.position.0,
                    self.position.1,
                    TITLE_FONT_SIZE_PX,
                    Color::BLACK,
                    TextHAlign::Center,
                )
                .with_rotation(self.rotation_deg)
                .with_class(kind.class()),
            );
        }
        layer
    }
}

/// Drawing surface of one container.
///
/// Holds exactly one of each persistent group. The outer size and the bar
/// group offset are fixed when the surface is created; axes and titles are
/// repositioned on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    viewport: Viewport,
    bar_group_translate: (f64, f64),
    bars: Vec<BarNode>,
    x_axis: AxisGroup,
    y_axis: AxisGroup,
    x_title: TitleNode,
    y_title: TitleNode,
}

impl Surface {
    #[must_use]
    pub fn new(viewport: Viewport, margins: Margins) -> Self {
        Self {
            viewport,
            bar_group_translate: (margins.left, margins.top),
            bars: Vec::new(),
            x_axis: AxisGroup::new(AxisOrient::Bottom),
            y_axis: AxisGroup::new(AxisOrient::Left),
            x_title: TitleNode::new(0.0),
            y_title: TitleNode::new(-90.0),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn bar_group_translate(&self) -> (f64, f64) {
        self.bar_group_translate
    }

    /// Persistent groups in paint order.
    #[must_use]
    pub fn groups(&self) -> [LayerKind; 5] {
        LayerKind::CANONICAL_ORDER
    }

    #[must_use]
    pub fn bars(&self) -> &[BarNode] {
        &self.bars
    }

    pub(crate) fn take_bars(&mut self) -> Vec<BarNode> {
        std::mem::take(&mut self.bars)
    }

    pub(crate) fn replace_bars(&mut self, bars: Vec<BarNode>) {
        self.bars = bars;
    }

    #[must_use]
    pub fn x_axis(&self) -> &AxisGroup {
        &self.x_axis
    }

    pub fn x_axis_mut(&mut self) -> &mut AxisGroup {
        &mut self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self) -> &AxisGroup {
        &self.y_axis
    }

    pub fn y_axis_mut(&mut self) -> &mut AxisGroup {
        &mut self.y_axis
    }

    #[must_use]
    pub fn x_title(&self) -> &TitleNode {
        &self.x_title
    }

    pub fn x_title_mut(&mut self) -> &mut TitleNode {
        &mut self.x_title
    }

    #[must_use]
    pub fn y_title(&self) -> &TitleNode {
        &self.y_title
    }

    pub fn y_title_mut(&mut self) -> &mut TitleNode {
        &mut self.y_title
    }

    /// `true` once every running transition has reached its target.
    #[must_use]
    pub fn is_settled(&self, now_ms: f64) -> bool {
        self.bars.iter().all(|bar| bar.is_settled(now_ms))
            && self.x_axis.is_settled(now_ms)
            && self.y_axis.is_settled(now_ms)
    }

    /// Latest time at which any running transition completes.
    #[must_use]
    pub fn settle_time_ms(&self, now_ms: f64) -> f64 {
        let bar_end = self
            .bars
            .iter()
            .map(|bar| bar.target_end_ms())
            .fold(now_ms, f64::max);
        let axis_end = self
            .x_axis
            .ticks()
            .iter()
            .chain(self.y_axis.ticks())
            .map(|tick| tick.end_ms())
            .fold(now_ms, f64::max);
        bar_end
            .max(axis_end)
            .max(self.x_axis.extent_end_ms())
            .max(self.y_axis.extent_end_ms())
    }

    pub fn prune(&mut self, now_ms: f64) {
        for bar in &mut self.bars {
            bar.prune(now_ms);
        }
        self.x_axis.prune(now_ms);
        self.y_axis.prune(now_ms);
    }

    #[must_use]
    pub fn frame_at(&self, now_ms: f64) -> LayeredRenderFrame {
        let mut frame = LayeredRenderFrame::new(self.viewport);

        let mut bars = LayerPrimitives::new(LayerKind::Bars, self.bar_group_translate);
        bars.rects.extend(self.bars.iter().map(|bar| {
            let geometry = bar.geometry_at(now_ms);
            RectPrimitive::new(
                geometry.x,
                geometry.y,
                geometry.width,
                geometry.height,
                geometry.fill,
            )
            .with_class("bar")
        }));
        frame.push_layer(bars);
        frame.push_layer(self.x_axis.primitives_at(LayerKind::XAxis, now_ms));
        frame.push_layer(self.y_axis.primitives_at(LayerKind::YAxis, now_ms));
        frame.push_layer(self.x_title.primitives(LayerKind::XTitle));
        frame.push_layer(self.y_title.primitives(LayerKind::YTitle));
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::{BarGeometry, BarNode, Surface};
    use crate::core::{JoinKey, Margins, Transition, Viewport};
    use crate::render::{LayerKind, Paint};

    fn geometry(height: f64, fill: &str) -> BarGeometry {
        BarGeometry {
            x: 10.0,
            y: 100.0 - height,
            width: 20.0,
            height,
            fill: Paint::from_css(fill),
        }
    }

    #[test]
    fn frame_contains_every_group_once_even_when_empty() {
        let surface = Surface::new(Viewport::new(200.0, 100.0), Margins::default());
        let frame = surface.frame_at(0.0);
        let kinds: Vec<LayerKind> = frame.layers.iter().map(|layer| layer.kind).collect();
        assert_eq!(kinds, LayerKind::CANONICAL_ORDER.to_vec());
        assert_eq!(frame.layer(LayerKind::Bars).map(|layer| layer.translate), Some((70.0, 0.0)));
    }

    #[test]
    fn bar_transition_reports_settle_time() {
        let mut bar = BarNode::new(JoinKey::new("A", 0), geometry(0.0, "black"));
        bar.transition_to(geometry(80.0, "blue"), 0.0, Transition::new(1500.0).with_delay(50.0));
        assert_eq!(bar.transition_start_ms(), 50.0);
        assert_eq!(bar.geometry_at(50.0).height, 0.0);
        assert_eq!(bar.geometry_at(1550.0), geometry(80.0, "blue"));
        assert!(bar.is_settled(1550.0));

        let mut surface = Surface::new(Viewport::new(200.0, 100.0), Margins::default());
        surface.replace_bars(vec![bar]);
        assert_eq!(surface.settle_time_ms(0.0), 1550.0);
    }
}
