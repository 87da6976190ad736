//! Time-bounded attribute interpolation.
//!
//! Time is explicit: every query takes the container clock in milliseconds,
//! so sampling is deterministic and independent of any frame scheduler.

/// Easing curve applied to normalized transition time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    CubicInOut,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                let t2 = t * t;
                let t3 = t2 * t;
                4.0 * if t < 0.5 { t3 } else { 3.0 * (t - t2) + t3 - 0.75 }
            }
        }
    }
}

/// Duration, delay and easing of one scheduled transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
}

impl Transition {
    /// Takes effect on the next sample.
    pub const IMMEDIATE: Self = Self::new(0.0);

    #[must_use]
    pub const fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            delay_ms: 0.0,
            easing: Easing::CubicInOut,
        }
    }

    #[must_use]
    pub const fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Values that can be blended between two endpoints.
pub trait Interpolate: Clone {
    /// Value at eased progress `t` in `[0, 1]`.
    fn interpolate(&self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        if t >= 1.0 {
            return *to;
        }
        self + (to - self) * t
    }
}

/// An attribute value that may be mid-transition.
///
/// Retargeting while a previous transition is still pending keeps the
/// previous one running until the new one starts; the new one then begins
/// from wherever the previous one had reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Animated<T> {
    from: T,
    to: T,
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
    superseded: Option<Box<Animated<T>>>,
}

impl<T: Interpolate> Animated<T> {
    /// A value at rest.
    #[must_use]
    pub fn settled(value: T) -> Self {
        Self {
            from: value.clone(),
            to: value,
            start_ms: f64::NEG_INFINITY,
            duration_ms: 0.0,
            easing: Easing::Linear,
            superseded: None,
        }
    }

    /// Final value of the current transition.
    #[must_use]
    pub fn target(&self) -> &T {
        &self.to
    }

    /// Time at which the current transition begins interpolating.
    #[must_use]
    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    /// Time at which the current transition reaches its target.
    #[must_use]
    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }

    #[must_use]
    pub fn is_settled(&self, now_ms: f64) -> bool {
        now_ms >= self.end_ms()
    }

    #[must_use]
    pub fn value_at(&self, now_ms: f64) -> T {
        if now_ms < self.start_ms {
            return match &self.superseded {
                Some(previous) => previous.value_at(now_ms),
                None => self.from.clone(),
            };
        }
        if self.duration_ms <= 0.0 || now_ms >= self.end_ms() {
            return self.to.clone();
        }
        let progress = (now_ms - self.start_ms) / self.duration_ms;
        self.from.interpolate(&self.to, self.easing.apply(progress))
    }

    /// Schedules a transition to `to` starting at `now_ms + delay`.
    pub fn retarget(&mut self, to: T, now_ms: f64, transition: Transition) {
        self.prune(now_ms);
        let start_ms = now_ms + transition.delay_ms.max(0.0);
        let from = self.value_at(start_ms);
        let previous = std::mem::replace(
            self,
            Self {
                from,
                to,
                start_ms,
                duration_ms: transition.duration_ms.max(0.0),
                easing: transition.easing,
                superseded: None,
            },
        );
        if now_ms < start_ms {
            self.superseded = previous
                .active_before(start_ms)
                .filter(|predecessor| !predecessor.is_settled(now_ms))
                .map(Box::new);
        }
    }

    /// First link of the history that starts interpolating before `start_ms`.
    ///
    /// Links starting at or after `start_ms` are never sampled once a
    /// transition starting at `start_ms` replaces them.
    fn active_before(self, start_ms: f64) -> Option<Self> {
        let mut link = self;
        while link.start_ms >= start_ms {
            link = *link.superseded?;
        }
        Some(link)
    }

    #[cfg(test)]
    fn history_depth(&self) -> usize {
        self.superseded
            .as_ref()
            .map_or(0, |previous| 1 + previous.history_depth())
    }

    /// Replaces the value with no transition.
    pub fn set(&mut self, value: T) {
        *self = Self::settled(value);
    }

    /// Drops history that can no longer influence sampling at or after `now_ms`.
    pub fn prune(&mut self, now_ms: f64) {
        if now_ms >= self.start_ms {
            self.superseded = None;
        } else if let Some(previous) = self.superseded.as_mut() {
            previous.prune(now_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Animated, Easing, Transition};

    #[test]
    fn cubic_in_out_is_symmetric_around_midpoint() {
        let easing = Easing::CubicInOut;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(0.5), 0.5);
        assert_eq!(easing.apply(1.0), 1.0);
        let early = easing.apply(0.25);
        let late = easing.apply(0.75);
        assert!((early + late - 1.0).abs() <= 1e-12);
        assert!(early < 0.25);
    }

    #[test]
    fn delayed_transition_holds_then_interpolates() {
        let mut height = Animated::settled(0.0);
        height.retarget(
            100.0,
            0.0,
            Transition::new(1000.0)
                .with_delay(50.0)
                .with_easing(Easing::Linear),
        );
        assert_eq!(height.value_at(25.0), 0.0);
        assert_eq!(height.value_at(550.0), 50.0);
        assert_eq!(height.value_at(1050.0), 100.0);
        assert!(height.is_settled(1050.0));
        assert!(!height.is_settled(1049.0));
    }

    #[test]
    fn later_transition_supersedes_earlier_one() {
        let linear = |duration| Transition::new(duration).with_easing(Easing::Linear);
        let mut x = Animated::settled(0.0);
        x.retarget(100.0, 0.0, linear(1000.0));
        x.retarget(0.0, 500.0, linear(1000.0));
        assert_eq!(*x.target(), 0.0);
        assert_eq!(x.value_at(500.0), 50.0);
        assert_eq!(x.value_at(1000.0), 25.0);
        assert_eq!(x.value_at(1500.0), 0.0);
    }

    #[test]
    fn previous_transition_keeps_running_during_new_delay() {
        let mut y = Animated::settled(0.0);
        y.retarget(
            100.0,
            0.0,
            Transition::new(100.0).with_easing(Easing::Linear),
        );
        y.retarget(
            0.0,
            20.0,
            Transition::new(100.0)
                .with_delay(40.0)
                .with_easing(Easing::Linear),
        );
        assert_eq!(y.value_at(40.0), 40.0);
        assert_eq!(y.value_at(60.0), 60.0);
        assert_eq!(y.value_at(110.0), 30.0);
        y.prune(60.0);
        assert_eq!(y.value_at(110.0), 30.0);
    }

    #[test]
    fn retargeting_at_a_fixed_time_keeps_history_bounded() {
        let delayed = Transition::new(1500.0).with_delay(50.0);
        let mut height = Animated::settled(0.0);
        for step in 0..50 {
            height.retarget(f64::from(step), 0.0, delayed);
            assert!(height.history_depth() <= 1, "depth at step {step}");
        }
        assert_eq!(height.history_depth(), 0);
        assert_eq!(height.value_at(25.0), 0.0);
        assert_eq!(*height.target(), 49.0);
    }

    #[test]
    fn predecessor_started_earlier_survives_a_later_retarget() {
        let linear = Transition::new(100.0).with_easing(Easing::Linear);
        let mut y = Animated::settled(0.0);
        y.retarget(100.0, 0.0, linear.with_delay(10.0));
        y.retarget(50.0, 0.0, linear.with_delay(40.0));
        y.retarget(80.0, 0.0, linear.with_delay(40.0));
        assert_eq!(y.history_depth(), 1);
        assert_eq!(y.value_at(30.0), 20.0);
        assert_eq!(*y.target(), 80.0);
    }
}
