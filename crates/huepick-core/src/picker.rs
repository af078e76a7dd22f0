//! Color picker state: the current color, its opacity and the history.

use crate::color::ColorError;
use crate::config::{DEFAULT_COLOR, DEFAULT_RGB, PickerConfig};
use crate::opacity::Opacity;
use crate::recent::{RecentColors, RecentColorsStore};
use crate::report::ColorReport;
use crate::share::{Clipboard, CopyTarget, Notice, ShareSheet, copy_to_clipboard, share_color};
use crate::storage::{KeyValueStore, StorageError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickerError {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("Failed to save recent colors: {0}")]
    Storage(#[from] StorageError),
}

/// The state behind a color picker widget.
///
/// Selecting a color recomputes its [`ColorReport`] and records it in the
/// persisted history; invalid input leaves everything untouched.
pub struct ColorPicker<S: KeyValueStore> {
    report: ColorReport,
    opacity: Opacity,
    recent: RecentColorsStore<S>,
}

impl<S: KeyValueStore> ColorPicker<S> {
    /// Create a picker showing the configured default color.
    ///
    /// The history is loaded from `storage`. The default color is displayed
    /// but not added to the history.
    pub fn new(config: &PickerConfig, storage: Arc<S>) -> Self {
        let recent = RecentColorsStore::load(storage, config.storage_key.clone(), config.recent_capacity);
        let report = ColorReport::parse(&config.default_color).unwrap_or_else(|e| {
            log::warn!("{}; falling back to {}", e, DEFAULT_COLOR);
            ColorReport::from_rgb(DEFAULT_RGB)
        });

        Self {
            report,
            opacity: Opacity::from_percent(config.default_opacity),
            recent,
        }
    }

    /// Select a color and add it to the history.
    ///
    /// If persisting the history fails, the color is still selected and the
    /// in-memory history updated; the storage error is returned.
    pub fn select(&mut self, input: &str) -> Result<&ColorReport, PickerError> {
        self.report = ColorReport::parse(input)?;
        log::debug!("Selected {}", self.report.hex);
        self.recent.add(&self.report.hex)?;
        Ok(&self.report)
    }

    /// Display a color without touching the history, as when a recent
    /// swatch is clicked.
    pub fn recall(&mut self, input: &str) -> Result<&ColorReport, PickerError> {
        self.report = ColorReport::parse(input)?;
        Ok(&self.report)
    }

    /// Display the `index`-th recent color. Returns `Ok(None)` if there is
    /// no such entry.
    pub fn recall_recent(&mut self, index: usize) -> Result<Option<&ColorReport>, PickerError> {
        let Some(color) = self.recent.history().get(index).map(str::to_string) else {
            return Ok(None);
        };
        self.recall(&color).map(Some)
    }

    pub fn set_opacity(&mut self, percent: u8) -> Opacity {
        self.opacity = Opacity::from_percent(percent);
        self.opacity
    }

    pub fn report(&self) -> &ColorReport {
        &self.report
    }

    pub fn opacity(&self) -> Opacity {
        self.opacity
    }

    pub fn recent(&self) -> &RecentColors {
        self.recent.history()
    }

    /// Copy one displayed value to the clipboard.
    pub fn copy(&self, target: CopyTarget, clipboard: &mut dyn Clipboard) -> Notice {
        copy_to_clipboard(clipboard, &target.text(&self.report, self.opacity))
    }

    /// Share the current color, falling back to the clipboard.
    pub fn share(&self, sheet: Option<&mut dyn ShareSheet>, clipboard: &mut dyn Clipboard) -> Notice {
        share_color(sheet, clipboard, &self.report, self.opacity)
    }
}
