//! HSL representation of sRGB colors.

use super::Rgb;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A color in hue/saturation/lightness form, rounded to whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, `0..360`.
    pub h: u16,
    /// Saturation in percent, `0..=100`.
    pub s: u8,
    /// Lightness in percent, `0..=100`.
    pub l: u8,
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

/// Formats as `"H°, S%, L%"`.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°, {}%, {}%", self.h, self.s, self.l)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb)
    }
}

/// Convert RGB to HSL using the min/max channel method.
///
/// Components are rounded to the nearest integer with halves rounding up.
/// A hue that rounds to 360° is reported as 0°.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let [r, g, b] = rgb.normalized();

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        // Achromatic
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };
        (h, s)
    };

    // All three values are non-negative, where `f64::round` matches
    // round-half-up.
    Hsl {
        h: ((h * 360.0).round() as u16) % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}
