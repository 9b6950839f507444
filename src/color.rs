//! WCAG 2.0 contrast evaluation
//!
//! Relative luminance and contrast ratio follow
//! <https://www.w3.org/TR/WCAG20/#relativeluminancedef> and
//! <https://www.w3.org/TR/WCAG20/#contrast-ratiodef>.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Minimum ratio for WCAG AA (normal text)
pub const AA_THRESHOLD: f64 = 4.5;

/// Minimum ratio for WCAG AAA (normal text)
pub const AAA_THRESHOLD: f64 = 7.0;

/// An sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse "#RRGGBB" or "RRGGBB"
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        // from_str_radix tolerates a leading '+', so validate the digits up front
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidFormat(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| Error::InvalidFormat(s.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn contrast_with(&self, other: Rgb) -> ContrastResult {
        ContrastResult::new(contrast_ratio(*self, other))
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// Serialized as `[r, g, b]`
impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.channels().serialize(serializer)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Gamma-expand a single sRGB channel to linear light
fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in [0.0, 1.0]
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Contrast ratio in [1.0, 21.0]; symmetric in its arguments
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = (la.max(lb), la.min(lb));
    (lighter + 0.05) / (darker + 0.05)
}

/// A contrast ratio together with its WCAG verdicts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastResult {
    pub ratio: f64,
    pub meets_aa: bool,
    pub meets_aaa: bool,
}

impl ContrastResult {
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio,
            meets_aa: ratio >= AA_THRESHOLD,
            meets_aaa: ratio >= AAA_THRESHOLD,
        }
    }
}

/// Pass/fail marker used in the text report
pub fn verdict_mark(pass: bool) -> &'static str {
    if pass {
        "✓"
    } else {
        "✗"
    }
}

impl fmt::Display for ContrastResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:5.2}:1  [AA: {}] [AAA: {}]",
            self.ratio,
            verdict_mark(self.meets_aa),
            verdict_mark(self.meets_aaa)
        )
    }
}
