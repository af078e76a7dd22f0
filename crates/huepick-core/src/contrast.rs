//! WCAG 2.x relative luminance and contrast ratio.

use crate::color::Rgb;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pure white, the light reference for contrast checks.
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Pure black, the dark reference for contrast checks.
pub const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Linearize one normalized sRGB channel.
fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color, in `[0, 1]`.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb.normalized().map(srgb_to_linear);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio between two luminances. Order does not matter.
fn ratio_of(l1: f64, l2: f64) -> f64 {
    let lighter = l1.max(l2);
    let darker = l1.min(l2);
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two colors, in `[1, 21]`.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    ratio_of(relative_luminance(a), relative_luminance(b))
}

/// A contrast ratio, displayed to one decimal place as `"R.R:1"`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ContrastRatio(pub f64);

impl ContrastRatio {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for ContrastRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}:1", self.0)
    }
}

/// Luminances of a color and a reference color, with their contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastPair {
    pub luminance: f64,
    pub reference_luminance: f64,
    pub ratio: ContrastRatio,
}

impl ContrastPair {
    pub fn against(color: Rgb, reference: Rgb) -> Self {
        let luminance = relative_luminance(color);
        let reference_luminance = relative_luminance(reference);
        Self {
            luminance,
            reference_luminance,
            ratio: ContrastRatio(ratio_of(luminance, reference_luminance)),
        }
    }

    pub fn against_white(color: Rgb) -> Self {
        Self::against(color, WHITE)
    }

    pub fn against_black(color: Rgb) -> Self {
        Self::against(color, BLACK)
    }
}
