//! Copying displayed values and sharing a color summary.
//!
//! The clipboard and the platform share sheet are external collaborators;
//! this module only formats the text and decides which one to use.

use crate::opacity::Opacity;
use crate::report::ColorReport;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Title passed to the share sheet.
pub const SHARE_TITLE: &str = "Color Picker";

/// Errors reported by clipboard and share backends.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),
    #[error("Clipboard write failed: {0}")]
    ClipboardWrite(String),
    #[error("Sharing failed: {0}")]
    Share(String),
    #[error("Sharing cancelled")]
    Cancelled,
}

/// Something that can receive text, like the system clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ShareError>;
}

/// A platform share sheet.
pub trait ShareSheet {
    fn share(&mut self, title: &str, text: &str) -> Result<(), ShareError>;
}

/// Outcome of a copy or share action, displayed as a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Copied,
    CopyFailed,
    Shared,
    InfoCopied,
}

impl Notice {
    pub fn is_success(&self) -> bool {
        !matches!(self, Notice::CopyFailed)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Notice::Copied => "Copied to clipboard!",
            Notice::CopyFailed => "Failed to copy",
            Notice::Shared => "Shared successfully!",
            Notice::InfoCopied => "Color info copied to clipboard!",
        })
    }
}

/// A displayed value that can be copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyTarget {
    Hex,
    Rgb,
    Hsl,
    Opacity,
    ContrastWhite,
    ContrastBlack,
}

impl CopyTarget {
    pub const ALL: [CopyTarget; 6] = [
        CopyTarget::Hex,
        CopyTarget::Rgb,
        CopyTarget::Hsl,
        CopyTarget::Opacity,
        CopyTarget::ContrastWhite,
        CopyTarget::ContrastBlack,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CopyTarget::Hex => "hex",
            CopyTarget::Rgb => "rgb",
            CopyTarget::Hsl => "hsl",
            CopyTarget::Opacity => "opacity",
            CopyTarget::ContrastWhite => "white",
            CopyTarget::ContrastBlack => "black",
        }
    }

    /// The text shown for this target.
    pub fn text(&self, report: &ColorReport, opacity: Opacity) -> String {
        match self {
            CopyTarget::Hex => report.hex.clone(),
            CopyTarget::Rgb => report.rgb.to_string(),
            CopyTarget::Hsl => report.hsl.to_string(),
            CopyTarget::Opacity => opacity.to_string(),
            CopyTarget::ContrastWhite => report.contrast_white.ratio.to_string(),
            CopyTarget::ContrastBlack => report.contrast_black.ratio.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown copy target: {0:?}")]
pub struct UnknownCopyTarget(pub String);

impl FromStr for CopyTarget {
    type Err = UnknownCopyTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        CopyTarget::ALL
            .into_iter()
            .find(|t| t.name() == lower)
            .ok_or_else(|| UnknownCopyTarget(s.to_string()))
    }
}

impl fmt::Display for CopyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The summary shared for a color.
pub fn share_text(report: &ColorReport, opacity: Opacity) -> String {
    format!(
        "Check out this color!\n\nHEX: {}\nRGB: {}\nHSL: {}\nOpacity: {}",
        report.hex, report.rgb, report.hsl, opacity
    )
}

/// Write `text` to the clipboard.
pub fn copy_to_clipboard(clipboard: &mut dyn Clipboard, text: &str) -> Notice {
    match clipboard.write_text(text) {
        Ok(()) => Notice::Copied,
        Err(e) => {
            log::error!("Failed to copy: {}", e);
            Notice::CopyFailed
        }
    }
}

/// Share a color summary, falling back to the clipboard.
///
/// The clipboard is used when no share sheet is available or sharing fails.
pub fn share_color(
    sheet: Option<&mut dyn ShareSheet>,
    clipboard: &mut dyn Clipboard,
    report: &ColorReport,
    opacity: Opacity,
) -> Notice {
    let text = share_text(report, opacity);

    if let Some(sheet) = sheet {
        match sheet.share(SHARE_TITLE, &text) {
            Ok(()) => return Notice::Shared,
            Err(e) => log::info!("Error sharing: {}", e),
        }
    }

    match copy_to_clipboard(clipboard, &text) {
        Notice::Copied => Notice::InfoCopied,
        other => other,
    }
}
