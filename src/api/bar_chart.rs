use ordered_float::OrderedFloat;
use tracing::{debug, trace, warn};

use crate::core::{
    BandScale, DEFAULT_BAND_PADDING, DEFAULT_TICK_COUNT, InnerArea, JoinKey, LinearScale, Margins,
    Record, SiFormat, Transition, join_keys, plan_join,
};
use crate::render::{AxisSpec, BarGeometry, BarNode, Paint, Surface};

use super::{ChartConfig, Container};

pub const BAR_TRANSITION_MS: f64 = 1500.0;
pub const BAR_STAGGER_MS: f64 = 50.0;
pub const X_AXIS_TRANSITION_MS: f64 = 500.0;
pub const Y_AXIS_TRANSITION_MS: f64 = 1500.0;
pub const X_TITLE_OFFSET_PX: f64 = 40.0;
pub const Y_TITLE_OFFSET_PX: f64 = 40.0;

/// Reusable bar chart.
///
/// Holds configuration only; the drawn state lives in the `Container` it
/// renders into, so one chart can drive several containers. Setters return
/// `&mut Self` for chaining.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarChart {
    config: ChartConfig,
}

impl BarChart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: ChartConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ChartConfig) -> &mut Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.config.width
    }

    pub fn set_width(&mut self, width: f64) -> &mut Self {
        self.config.width = width;
        self
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.config.height
    }

    pub fn set_height(&mut self, height: f64) -> &mut Self {
        self.config.height = height;
        self
    }

    #[must_use]
    pub fn margin(&self) -> Margins {
        self.config.margin
    }

    pub fn set_margin(&mut self, margin: Margins) -> &mut Self {
        self.config.margin = margin;
        self
    }

    #[must_use]
    pub fn fill_color(&self) -> &str {
        &self.config.fill_color
    }

    pub fn set_fill_color(&mut self, fill_color: impl Into<String>) -> &mut Self {
        self.config.fill_color = fill_color.into();
        self
    }

    #[must_use]
    pub fn x_var(&self) -> &str {
        &self.config.x_var
    }

    pub fn set_x_var(&mut self, x_var: impl Into<String>) -> &mut Self {
        self.config.x_var = x_var.into();
        self
    }

    #[must_use]
    pub fn y_var(&self) -> &str {
        &self.config.y_var
    }

    pub fn set_y_var(&mut self, y_var: impl Into<String>) -> &mut Self {
        self.config.y_var = y_var.into();
        self
    }

    #[must_use]
    pub fn x_axis_label(&self) -> &str {
        &self.config.x_axis_label
    }

    pub fn set_x_axis_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.config.x_axis_label = label.into();
        self
    }

    #[must_use]
    pub fn y_axis_label(&self) -> &str {
        &self.config.y_axis_label
    }

    pub fn set_y_axis_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.config.y_axis_label = label.into();
        self
    }

    /// Band scale for the x categories of `data`, in first-occurrence order.
    #[must_use]
    pub fn x_scale(&self, data: &[Record]) -> BandScale {
        let inner = self.inner_area();
        BandScale::new(
            data.iter().map(|record| record.category(&self.config.x_var)),
            (0.0, inner.width),
            DEFAULT_BAND_PADDING,
        )
    }

    /// Linear scale from zero to the largest numeric y value of `data`.
    ///
    /// NaN values are ignored; with no numeric value at all the upper bound
    /// is NaN and so is every mapped position.
    #[must_use]
    pub fn y_scale(&self, data: &[Record]) -> LinearScale {
        let inner = self.inner_area();
        let max = data
            .iter()
            .map(|record| record.number(&self.config.y_var))
            .filter(|value| !value.is_nan())
            .map(OrderedFloat)
            .max()
            .map_or(f64::NAN, OrderedFloat::into_inner);
        LinearScale::new((0.0, max), (inner.height, 0.0))
    }

    #[must_use]
    pub fn inner_area(&self) -> InnerArea {
        InnerArea::from_outer(self.config.viewport(), self.config.margin)
    }

    /// Draws or updates the chart in `container` for `data`.
    ///
    /// The first call creates the container's surface; later calls reuse it
    /// and transition bars, axes and titles from their current state. Never
    /// fails: fields missing from the records produce NaN geometry.
    pub fn render(&self, container: &mut Container, data: &[Record]) {
        let now_ms = container.now_ms();
        let inner = self.inner_area();
        let margin = self.config.margin;
        let x_scale = self.x_scale(data);
        let y_scale = self.y_scale(data);
        if y_scale.domain().1.is_nan() && !data.is_empty() {
            warn!(
                container = %container.id(),
                y_var = %self.config.y_var,
                "no numeric y values; bar geometry is undefined"
            );
        }
        debug!(
            container = %container.id(),
            records = data.len(),
            categories = x_scale.domain().len(),
            y_max = y_scale.domain().1,
            now_ms,
            "render bar chart"
        );

        let surface = container.surface_or_create(self.config.viewport(), margin);

        let x_axis = surface.x_axis_mut();
        x_axis.set_translate((margin.left, margin.top + inner.height));
        x_axis.update(
            &AxisSpec::bottom_from_band(&x_scale),
            now_ms,
            Transition::new(X_AXIS_TRANSITION_MS),
        );
        let y_axis = surface.y_axis_mut();
        y_axis.set_translate((margin.left, margin.top));
        y_axis.update(
            &AxisSpec::left_from_linear(y_scale, DEFAULT_TICK_COUNT, SiFormat::default()),
            now_ms,
            Transition::new(Y_AXIS_TRANSITION_MS),
        );

        let x_title = surface.x_title_mut();
        x_title.set_position((
            margin.left + inner.width / 2.0,
            inner.height + margin.top + X_TITLE_OFFSET_PX,
        ));
        x_title.set_text(&self.config.x_axis_label);
        let y_title = surface.y_title_mut();
        y_title.set_position((
            margin.left - Y_TITLE_OFFSET_PX,
            margin.top + inner.height / 2.0,
        ));
        y_title.set_text(&self.config.y_axis_label);

        self.join_bars(surface, data, &x_scale, y_scale, inner, now_ms);
    }

    fn join_bars(
        &self,
        surface: &mut Surface,
        data: &[Record],
        x_scale: &BandScale,
        y_scale: LinearScale,
        inner: InnerArea,
        now_ms: f64,
    ) {
        let keys = join_keys(data, &self.config.x_var);
        let mut existing: Vec<Option<BarNode>> =
            surface.take_bars().into_iter().map(Some).collect();
        let existing_keys: Vec<JoinKey> = existing
            .iter()
            .flatten()
            .map(|bar| bar.key().clone())
            .collect();
        let plan = plan_join(&existing_keys, &keys);
        trace!(
            enter = plan.enter.len(),
            update = plan.update.len(),
            exit = plan.exit.len(),
            "bar join"
        );

        let bandwidth = x_scale.bandwidth();
        let band_x = |key: &JoinKey| x_scale.position(&key.category).unwrap_or(f64::NAN);

        let mut joined: Vec<Option<BarNode>> = (0..data.len()).map(|_| None).collect();
        for &(data_index, element_index) in &plan.update {
            joined[data_index] = existing[element_index].take();
        }
        for &data_index in &plan.enter {
            let key = &keys[data_index];
            joined[data_index] = Some(BarNode::new(
                key.clone(),
                BarGeometry {
                    x: band_x(key),
                    y: inner.height,
                    width: bandwidth,
                    height: 0.0,
                    fill: Paint::default(),
                },
            ));
        }

        let fill = Paint::from_css(&self.config.fill_color);
        let mut bars = Vec::with_capacity(data.len());
        for (index, (record, bar)) in data.iter().zip(joined).enumerate() {
            let Some(mut bar) = bar else {
                continue;
            };
            let y = y_scale.map(record.number(&self.config.y_var));
            let target = BarGeometry {
                x: band_x(bar.key()),
                y,
                width: bandwidth,
                height: inner.height - y,
                fill: fill.clone(),
            };
            let transition =
                Transition::new(BAR_TRANSITION_MS).with_delay(BAR_STAGGER_MS * index as f64);
            bar.transition_to(target, now_ms, transition);
            bars.push(bar);
        }
        surface.replace_bars(bars);
    }
}
