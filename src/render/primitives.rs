use crate::core::Interpolate;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("blue", [0, 0, 255]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("yellow", [255, 255, 0]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("silver", [192, 192, 192]),
    ("maroon", [128, 0, 0]),
    ("olive", [128, 128, 0]),
    ("lime", [0, 255, 0]),
    ("aqua", [0, 255, 255]),
    ("cyan", [0, 255, 255]),
    ("teal", [0, 128, 128]),
    ("navy", [0, 0, 128]),
    ("fuchsia", [255, 0, 255]),
    ("magenta", [255, 0, 255]),
    ("steelblue", [70, 130, 180]),
    ("tomato", [255, 99, 71]),
    ("gold", [255, 215, 0]),
    ("pink", [255, 192, 203]),
    ("brown", [165, 42, 42]),
];

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Parses a CSS named color, `#rgb` or `#rrggbb`.
    #[must_use]
    pub fn from_css(css: &str) -> Option<Self> {
        let css = css.trim();
        if let Some(hex) = css.strip_prefix('#') {
            return parse_hex(hex);
        }
        NAMED_COLORS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(css))
            .map(|(_, [red, green, blue])| Self::from_rgb8(*red, *green, *blue))
    }

    /// `#rrggbb`, ignoring alpha.
    #[must_use]
    pub fn to_hex(self) -> String {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digit = |index: usize, width: usize| u8::from_str_radix(hex.get(index..index + width)?, 16).ok();
    match hex.len() {
        3 => {
            let expand = |index| digit(index, 1).map(|value| value * 17);
            Some(Color::from_rgb8(expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Some(Color::from_rgb8(digit(0, 2)?, digit(2, 2)?, digit(4, 2)?)),
        _ => None,
    }
}

impl Interpolate for Color {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        Self::rgba(
            self.red.interpolate(&to.red, t),
            self.green.interpolate(&to.green, t),
            self.blue.interpolate(&to.blue, t),
            self.alpha.interpolate(&to.alpha, t),
        )
    }
}

/// Fill paint: either a parsed color or a CSS string this crate cannot parse.
///
/// Unparsed paints are passed through to backends verbatim and switch
/// discretely at the end of a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Rgb(Color),
    Css(String),
}

impl Paint {
    #[must_use]
    pub fn from_css(css: &str) -> Self {
        Color::from_css(css).map_or_else(|| Self::Css(css.to_owned()), Self::Rgb)
    }

    /// CSS text for SVG output.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Rgb(color) => color.to_hex(),
            Self::Css(css) => css.clone(),
        }
    }

    /// Resolved color for raster backends; unknown CSS falls back to black.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Self::Rgb(color) => *color,
            Self::Css(_) => Color::BLACK,
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::Rgb(Color::BLACK)
    }
}

impl Interpolate for Paint {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        match (self, to) {
            (Self::Rgb(from), Self::Rgb(target)) => Self::Rgb(from.interpolate(target, t)),
            _ if t >= 1.0 => to.clone(),
            _ => self.clone(),
        }
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    #[must_use]
    pub fn translated(mut self, dx: f64, dy: f64) -> Self {
        self.x1 += dx;
        self.x2 += dx;
        self.y1 += dy;
        self.y2 += dy;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one filled rectangle in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Paint,
    pub class: &'static str,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, fill: Paint) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
            class: "",
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }

    #[must_use]
    pub fn translated(mut self, dx: f64, dy: f64) -> Self {
        self.x += dx;
        self.y += dy;
        self
    }

    /// Non-finite geometry is legal in the scene (misconfigured fields) but
    /// cannot be rasterized.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|value| value.is_finite())
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
///
/// `y` is the baseline. A non-zero `rotation_deg` rotates the label
/// clockwise about `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub rotation_deg: f64,
    pub class: &'static str,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            rotation_deg: 0.0,
            class: "",
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }

    #[must_use]
    pub fn translated(mut self, dx: f64, dy: f64) -> Self {
        self.x += dx;
        self.y += dy;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Paint};
    use crate::core::Interpolate;

    #[test]
    fn parses_named_and_hex_colors() {
        assert_eq!(Color::from_css("blue"), Some(Color::rgb(0.0, 0.0, 1.0)));
        assert_eq!(Color::from_css("Orange").map(Color::to_hex).as_deref(), Some("#ffa500"));
        assert_eq!(Color::from_css("#f00"), Some(Color::rgb(1.0, 0.0, 0.0)));
        assert_eq!(Color::from_css("#800080"), Color::from_css("purple"));
        assert_eq!(Color::from_css("not-a-color"), None);
        assert_eq!(Color::from_css("#12"), None);
    }

    #[test]
    fn rgb_paints_blend_and_unknown_css_switches_at_end() {
        let black = Paint::from_css("black");
        let blue = Paint::from_css("blue");
        assert_eq!(black.interpolate(&blue, 0.5).to_css(), "#000080");

        let custom = Paint::from_css("var(--accent)");
        assert_eq!(black.interpolate(&custom, 0.99), black);
        assert_eq!(black.interpolate(&custom, 1.0), custom);
        assert_eq!(custom.color(), Color::BLACK);
    }
}
