//! Huepick Core Library
//!
//! Platform-agnostic color math, recent-colors history and picker state
//! for the Huepick color picker.

pub mod color;
pub mod config;
pub mod contrast;
pub mod opacity;
pub mod picker;
pub mod recent;
pub mod report;
pub mod share;
pub mod storage;

pub use color::{ColorError, Hsl, Rgb, hex_to_rgb, normalize_hex, rgb_to_hex, rgb_to_hsl};
pub use config::PickerConfig;
pub use contrast::{BLACK, ContrastPair, ContrastRatio, WHITE, contrast_ratio, relative_luminance};
pub use opacity::Opacity;
pub use picker::{ColorPicker, PickerError};
pub use recent::{MAX_RECENT_COLORS, RECENT_COLORS_KEY, RecentColors, RecentColorsStore};
pub use report::ColorReport;
pub use share::{Clipboard, CopyTarget, Notice, ShareError, ShareSheet, share_text};
pub use storage::{KeyValueStore, MemoryStore, StorageError, StorageResult};
