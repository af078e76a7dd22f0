//! Derived representations of a single color.

use crate::color::{ColorError, Hsl, Rgb, hex_to_rgb, rgb_to_hsl};
use crate::contrast::ContrastPair;
use serde::{Deserialize, Serialize};

/// Everything the picker displays for one color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorReport {
    /// Canonical lowercase `#rrggbb`.
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    /// Contrast of the color against white.
    pub contrast_white: ContrastPair,
    /// Contrast of the color against black.
    pub contrast_black: ContrastPair,
}

impl ColorReport {
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
            hsl: rgb_to_hsl(rgb),
            contrast_white: ContrastPair::against_white(rgb),
            contrast_black: ContrastPair::against_black(rgb),
        }
    }

    /// Build a report from hex input, see [`hex_to_rgb`].
    pub fn parse(hex: &str) -> Result<Self, ColorError> {
        hex_to_rgb(hex).map(Self::from_rgb)
    }
}
