//! Picker configuration.

use crate::color::Rgb;
use crate::recent::{MAX_RECENT_COLORS, RECENT_COLORS_KEY};
use serde::{Deserialize, Serialize};

/// Color shown when the picker starts.
pub const DEFAULT_COLOR: &str = "#3498db";

/// [`DEFAULT_COLOR`] as RGB channels.
pub const DEFAULT_RGB: Rgb = Rgb::from_hex_literal(DEFAULT_COLOR);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Color displayed at startup. Not added to the history.
    pub default_color: String,
    /// Opacity percent at startup.
    pub default_opacity: u8,
    /// Number of recent colors to keep.
    pub recent_capacity: usize,
    /// Storage key for the recent-colors history.
    pub storage_key: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_COLOR.to_string(),
            default_opacity: 100,
            recent_capacity: MAX_RECENT_COLORS,
            storage_key: RECENT_COLORS_KEY.to_string(),
        }
    }
}

impl PickerConfig {
    /// Parse a config from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
