use smallvec::SmallVec;

/// Default number of ticks requested from a linear scale by an axis.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Tick values for one axis; a dozen covers every "nice" step at the default count.
pub type TickValues = SmallVec<[f64; 12]>;

/// Continuous mapping from a numeric domain to a numeric range.
///
/// No clamping and no validation: a degenerate domain maps every finite value
/// to the range start and NaN inputs map to NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = if span == 0.0 {
            (value - self.domain_start) / f64::INFINITY
        } else {
            (value - self.domain_start) / span
        };
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        let normalized = if span == 0.0 {
            (pixel - self.range_start) / f64::INFINITY
        } else {
            (pixel - self.range_start) / span
        };
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Evenly spaced "nice" values covering the domain.
    ///
    /// The step is a power of ten times 1, 2 or 5 chosen so that roughly
    /// `count` ticks fit. Empty when the domain is degenerate or not finite.
    #[must_use]
    pub fn ticks(self, count: usize) -> TickValues {
        let lo = self.domain_start.min(self.domain_end);
        let hi = self.domain_start.max(self.domain_end);
        let span = hi - lo;
        if count == 0 || !span.is_finite() || span <= 0.0 {
            return TickValues::new();
        }

        let step = tick_step(span, count);
        if !step.is_finite() || step <= 0.0 {
            return TickValues::new();
        }

        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        let mut ticks = TickValues::new();
        if step >= 1.0 {
            for index in first..=last {
                ticks.push(index as f64 * step);
            }
        } else {
            // Dividing by the inverse step keeps values like 0.3 exact.
            let inverse = (1.0 / step).round();
            for index in first..=last {
                ticks.push(index as f64 / inverse);
            }
        }
        ticks
    }
}

fn tick_step(span: f64, count: usize) -> f64 {
    let target = count as f64;
    let mut step = 10_f64.powf((span / target).log10().floor());
    let error = target / span * step;
    if error <= 0.15 {
        step *= 10.0;
    } else if error <= 0.35 {
        step *= 5.0;
    } else if error <= 0.75 {
        step *= 2.0;
    }
    step
}
