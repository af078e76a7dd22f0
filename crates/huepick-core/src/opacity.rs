//! Opacity of the previewed color.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opacity as a whole percentage, `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Opacity(u8);

impl Opacity {
    pub const OPAQUE: Self = Self(100);
    pub const TRANSPARENT: Self = Self(0);

    /// Create an opacity, clamping values above 100.
    pub fn from_percent(percent: u8) -> Self {
        Self(percent.min(100))
    }

    pub fn percent(&self) -> u8 {
        self.0
    }

    /// Opacity as an alpha value in `[0, 1]`.
    pub fn alpha(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::OPAQUE
    }
}

impl From<u8> for Opacity {
    fn from(percent: u8) -> Self {
        Self::from_percent(percent)
    }
}

impl From<Opacity> for u8 {
    fn from(opacity: Opacity) -> Self {
        opacity.0
    }
}

/// Formats as `"N%"`.
impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_to_100() {
        assert_eq!(Opacity::from_percent(250).percent(), 100);
        assert_eq!(Opacity::from_percent(42).percent(), 42);
    }

    #[test]
    fn test_alpha() {
        assert_eq!(Opacity::OPAQUE.alpha(), 1.0);
        assert_eq!(Opacity::TRANSPARENT.alpha(), 0.0);
        assert_eq!(Opacity::from_percent(50).alpha(), 0.5);
    }

    #[test]
    fn test_display() {
        assert_eq!(Opacity::default().to_string(), "100%");
        assert_eq!(Opacity::from_percent(7).to_string(), "7%");
    }

    #[test]
    fn test_deserialize_clamps() {
        let opacity: Opacity = serde_json::from_str("180").unwrap();
        assert_eq!(opacity, Opacity::OPAQUE);
    }
}
