const SI_SYMBOLS: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "\u{b5}", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// SI-prefixed number format with a fixed count of significant digits.
///
/// With two digits: `0 -> "0.0"`, `5 -> "5.0"`, `34 -> "34"`,
/// `1500 -> "1.5k"`, `0.5 -> "500m"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiFormat {
    significant_digits: u8,
}

impl Default for SiFormat {
    fn default() -> Self {
        Self::new(2)
    }
}

impl SiFormat {
    #[must_use]
    pub const fn new(significant_digits: u8) -> Self {
        Self { significant_digits }
    }

    #[must_use]
    pub fn significant_digits(self) -> u8 {
        self.significant_digits
    }

    #[must_use]
    pub fn format(self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_owned();
        }
        if value.is_infinite() {
            return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
        }

        let digits = i32::from(self.significant_digits);
        let magnitude = value.abs();
        let exponent = si_exponent(magnitude, digits);
        let scaled = magnitude / 10_f64.powi(exponent);
        let body = format_significant(scaled, digits);
        let symbol = SI_SYMBOLS[((exponent / 3) + 8) as usize];

        let negative = value < 0.0 && body.bytes().any(|byte| matches!(byte, b'1'..=b'9'));
        let sign = if negative { "-" } else { "" };
        format!("{sign}{body}{symbol}")
    }
}

/// Power of 1000 (as a power of ten) used for the prefix, after rounding to
/// the requested digits so that 999 becomes `1.0k` rather than `999`.
fn si_exponent(magnitude: f64, digits: i32) -> i32 {
    if magnitude == 0.0 {
        return 0;
    }
    let rounded = round_to(magnitude, decimals_for(magnitude, digits));
    let order = 1 + (1e-12 + rounded.log10()).floor() as i32;
    (((order - 1) as f64 / 3.0).floor() as i32 * 3).clamp(-24, 24)
}

fn format_significant(value: f64, digits: i32) -> String {
    let rounded = round_to(value, decimals_for(value, digits));
    let decimals = decimals_for(rounded * (1.0 + 1e-15), digits).clamp(0, 20) as usize;
    format!("{rounded:.decimals$}")
}

fn decimals_for(value: f64, digits: i32) -> i32 {
    if value == 0.0 {
        digits - 1
    } else {
        digits - value.log10().ceil() as i32
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    if decimals == 0 {
        value.round()
    } else {
        let factor = 10_f64.powi(decimals);
        (value * factor).round() / factor
    }
}
