//! Color representations and conversions between them.
//!
//! Colors enter the picker as `#RRGGBB` strings and are converted to [`Rgb`]
//! and [`Hsl`] for display and contrast checks.

mod hsl;

pub use hsl::{Hsl, rgb_to_hsl};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors produced when parsing color input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid hex color: {0:?}")]
    InvalidFormat(String),
}

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` literal at compile time.
    ///
    /// Meant for constants: malformed input panics, which fails the build
    /// when evaluated in a `const`. Use [`hex_to_rgb`] for runtime input.
    pub const fn from_hex_literal(hex: &str) -> Self {
        let bytes = hex.as_bytes();
        assert!(bytes.len() == 7 && bytes[0] == b'#', "expected #rrggbb");
        Self {
            r: const_byte(bytes[1], bytes[2]),
            g: const_byte(bytes[3], bytes[4]),
            b: const_byte(bytes[5], bytes[6]),
        }
    }

    /// Channels normalized to `[0, 1]`.
    pub fn normalized(&self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// Canonical lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        rgb_to_hex(*self)
    }
}

const fn const_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit"),
    }
}

const fn const_byte(hi: u8, lo: u8) -> u8 {
    const_nibble(hi) << 4 | const_nibble(lo)
}

/// Formats as `"R, G, B"`, the way the picker displays and copies it.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}

/// Parse a hex color into its RGB channels.
///
/// Accepts an optional leading `#` followed by exactly six hexadecimal
/// digits in either case. Shorthand (`#RGB`), alpha (`#RRGGBBAA`) and
/// surrounding whitespace are rejected.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let invalid = || ColorError::InvalidFormat(hex.to_string());

    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
    if digits.len() != 6 {
        return Err(invalid());
    }

    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    };
    let byte = |hi: u8, lo: u8| -> Result<u8, ColorError> {
        let h = nibble(hi).ok_or_else(invalid)?;
        let l = nibble(lo).ok_or_else(invalid)?;
        Ok(h << 4 | l)
    };

    Ok(Rgb {
        r: byte(digits[0], digits[1])?,
        g: byte(digits[2], digits[3])?,
        b: byte(digits[4], digits[5])?,
    })
}

/// Format RGB channels as a lowercase `#rrggbb` string.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Validate `hex` and return its canonical lowercase `#rrggbb` form.
pub fn normalize_hex(hex: &str) -> Result<String, ColorError> {
    hex_to_rgb(hex).map(rgb_to_hex)
}
