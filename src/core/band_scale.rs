use indexmap::IndexSet;

/// Fraction of each step left empty between and around bars.
pub const DEFAULT_BAND_PADDING: f64 = 0.2;

/// Ordinal scale that divides a pixel range into equal bands, one per
/// distinct category.
///
/// The domain keeps first-occurrence order. Outer padding equals inner
/// padding, so the first band starts `padding * step` into the range.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: IndexSet<String>,
    range_start: f64,
    range_end: f64,
    padding: f64,
}

impl BandScale {
    #[must_use]
    pub fn new<I, S>(categories: I, range: (f64, f64), padding: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domain: categories.into_iter().map(Into::into).collect(),
            range_start: range.0,
            range_end: range.1,
            padding,
        }
    }

    #[must_use]
    pub fn domain(&self) -> Vec<&str> {
        self.domain.iter().map(String::as_str).collect()
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Distance between the starts of two adjacent bands.
    #[must_use]
    pub fn step(&self) -> f64 {
        let (start, stop) = self.ordered_range();
        let slots = self.domain.len() as f64 - self.padding + 2.0 * self.padding;
        (stop - start) / slots
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Start of the band for `category`, or `None` when it is not in the domain.
    #[must_use]
    pub fn position(&self, category: &str) -> Option<f64> {
        let index = self.domain.get_index_of(category)?;
        let (start, _) = self.ordered_range();
        let step = self.step();
        let offset = if self.is_reversed() {
            self.domain.len() - 1 - index
        } else {
            index
        };
        Some(start + step * self.padding + step * offset as f64)
    }

    /// Centre of the band for `category`; where axis ticks sit.
    #[must_use]
    pub fn center(&self, category: &str) -> Option<f64> {
        self.position(category)
            .map(|position| position + self.bandwidth() / 2.0)
    }

    fn is_reversed(&self) -> bool {
        self.range_end < self.range_start
    }

    fn ordered_range(&self) -> (f64, f64) {
        if self.is_reversed() {
            (self.range_end, self.range_start)
        } else {
            (self.range_start, self.range_end)
        }
    }
}
