use serde::{Deserialize, Serialize};

/// Persistent groups of a drawing surface, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    Bars,
    XAxis,
    YAxis,
    XTitle,
    YTitle,
}

impl LayerKind {
    pub const CANONICAL_ORDER: [Self; 5] = [
        Self::Bars,
        Self::XAxis,
        Self::YAxis,
        Self::XTitle,
        Self::YTitle,
    ];

    /// Class attribute carried into SVG output.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Bars => "symbol-g",
            Self::XAxis => "xaxis axis",
            Self::YAxis => "yaxis axis",
            Self::XTitle => "xtitle title",
            Self::YTitle => "title ytitle",
        }
    }
}
