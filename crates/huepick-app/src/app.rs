//! Core application state and lifecycle.

use crate::clipboard::create_clipboard;
use crate::commands::{Command, CommandRegistry};
use huepick_core::storage::FileStore;
use huepick_core::{Clipboard, ColorPicker, KeyValueStore, PickerConfig, PickerError, StorageError};
use std::io::{self, BufRead, Write};
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Overrides the directory recent colors are stored in.
pub const DATA_DIR_ENV: &str = "HUEPICK_DATA_DIR";

/// Path to a JSON [`PickerConfig`] file.
pub const CONFIG_ENV: &str = "HUEPICK_CONFIG";

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub picker: PickerConfig,
    /// Storage directory; the platform data directory when `None`.
    pub storage_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Build the config from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var_os(name))
    }

    /// Build the config from variables looked up through `var`.
    pub fn from_vars(var: impl Fn(&str) -> Option<OsString>) -> Result<Self, AppError> {
        let picker = match var(CONFIG_ENV) {
            Some(path) => Self::load_picker_config(PathBuf::from(path))?,
            None => PickerConfig::default(),
        };

        Ok(Self {
            picker,
            storage_dir: var(DATA_DIR_ENV).map(PathBuf::from),
        })
    }

    fn load_picker_config(path: PathBuf) -> Result<PickerConfig, AppError> {
        let json = std::fs::read_to_string(&path)?;
        PickerConfig::from_json(&json).map_err(|e| AppError::Config {
            path,
            message: e.to_string(),
        })
    }

    fn open_store(&self) -> Result<FileStore, AppError> {
        let store = match &self.storage_dir {
            Some(dir) => FileStore::new(dir.clone())?,
            None => FileStore::default_location()?,
        };
        log::info!("Storing recent colors in {}", store.base_path().display());
        Ok(store)
    }
}

/// Whether the session should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The terminal front end: reads commands and renders the picker state.
pub struct App<S: KeyValueStore> {
    picker: ColorPicker<S>,
    clipboard: Box<dyn Clipboard>,
}

/// Type alias for the app with platform file storage.
pub type PlatformApp = App<FileStore>;

impl App<FileStore> {
    /// Run an interactive session on stdin/stdout until `quit` or EOF.
    pub fn run(config: AppConfig) -> Result<(), AppError> {
        let storage = Arc::new(config.open_store()?);
        let mut app = App::new(ColorPicker::new(&config.picker, storage), create_clipboard());

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        app.render(&mut stdout)?;
        write!(stdout, "{}", CommandRegistry::help_text())?;

        for line in stdin.lock().lines() {
            if app.handle_line(&line?, &mut stdout)? == Flow::Exit {
                break;
            }
        }

        log::info!("Exiting");
        Ok(())
    }
}

impl<S: KeyValueStore> App<S> {
    pub fn new(picker: ColorPicker<S>, clipboard: Box<dyn Clipboard>) -> Self {
        Self { picker, clipboard }
    }

    pub fn picker(&self) -> &ColorPicker<S> {
        &self.picker
    }

    /// Parse and execute one line of input.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command, out),
            Err(e) => {
                writeln!(out, "{}", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
        match command {
            Command::Select(input) => match self.picker.select(&input).map(|_| ()) {
                Ok(()) => self.render(out)?,
                Err(PickerError::Storage(e)) => {
                    log::error!("{}", e);
                    self.render(out)?;
                    writeln!(out, "Could not save recent colors")?;
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
            Command::Pick(n) => {
                let recalled = match n.checked_sub(1) {
                    Some(index) => self.picker.recall_recent(index).map(|r| r.is_some()),
                    None => Ok(false),
                };
                match recalled {
                    Ok(true) => self.render(out)?,
                    Ok(false) => writeln!(out, "No recent color #{}", n)?,
                    Err(e) => writeln!(out, "{}", e)?,
                }
            }
            Command::Opacity(percent) => {
                let opacity = self.picker.set_opacity(percent);
                writeln!(out, "Opacity  {}", opacity)?;
            }
            Command::Copy(target) => {
                let notice = self.picker.copy(target, self.clipboard.as_mut());
                writeln!(out, "{}", notice)?;
            }
            Command::Share => {
                // Terminals have no share sheet.
                let notice = self.picker.share(None, self.clipboard.as_mut());
                writeln!(out, "{}", notice)?;
            }
            Command::Show => self.render(out)?,
            Command::Recent => self.render_recent(out)?,
            Command::Help => write!(out, "{}", CommandRegistry::help_text())?,
            Command::Quit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    /// Write the current color's values.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        let report = self.picker.report();
        writeln!(out, "HEX      {}", report.hex)?;
        writeln!(out, "RGB      {}", report.rgb)?;
        writeln!(out, "HSL      {}", report.hsl)?;
        writeln!(out, "Opacity  {}", self.picker.opacity())?;
        writeln!(out, "On white {}", report.contrast_white.ratio)?;
        writeln!(out, "On black {}", report.contrast_black.ratio)?;
        self.render_recent(out)
    }

    fn render_recent(&self, out: &mut impl Write) -> io::Result<()> {
        let recent = self.picker.recent();
        if recent.is_empty() {
            return writeln!(out, "Recent   (none)");
        }
        let swatches: Vec<String> = recent
            .iter()
            .enumerate()
            .map(|(i, color)| format!("{}:{}", i + 1, color))
            .collect();
        writeln!(out, "Recent   {}", swatches.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huepick_core::storage::MemoryStore;
    use huepick_core::ShareError;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::tempdir;

    #[derive(Clone, Default)]
    struct SharedClipboard(Rc<RefCell<Option<String>>>);

    impl Clipboard for SharedClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ShareError> {
            *self.0.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    fn app() -> (App<MemoryStore>, SharedClipboard) {
        let clipboard = SharedClipboard::default();
        let picker = ColorPicker::new(&PickerConfig::default(), Arc::new(MemoryStore::new()));
        (App::new(picker, Box::new(clipboard.clone())), clipboard)
    }

    fn run(app: &mut App<MemoryStore>, line: &str) -> (Flow, String) {
        let mut out = Vec::new();
        let flow = app.handle_line(line, &mut out).unwrap();
        (flow, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_render_default_color() {
        let (mut app, _) = app();
        let (flow, out) = run(&mut app, "show");
        assert_eq!(flow, Flow::Continue);
        assert_eq!(
            out,
            "HEX      #3498db\n\
             RGB      52, 152, 219\n\
             HSL      204°, 70%, 53%\n\
             Opacity  100%\n\
             On white 3.2:1\n\
             On black 6.7:1\n\
             Recent   (none)\n"
        );
    }

    #[test]
    fn test_select_and_pick() {
        let (mut app, _) = app();
        run(&mut app, "#111111");
        let (_, out) = run(&mut app, "#222222");
        assert!(out.contains("Recent   1:#222222 2:#111111"));

        let (_, out) = run(&mut app, "pick 2");
        assert!(out.starts_with("HEX      #111111\n"));
        assert_eq!(app.picker().recent().colors(), ["#222222", "#111111"]);

        let (_, out) = run(&mut app, "pick 9");
        assert_eq!(out, "No recent color #9\n");
    }

    #[test]
    fn test_invalid_color_reports_error() {
        let (mut app, _) = app();
        let (_, out) = run(&mut app, "#ZZZZZZ");
        assert_eq!(out, "Invalid hex color: \"#ZZZZZZ\"\n");
        assert_eq!(app.picker().report().hex, "#3498db");
    }

    #[test]
    fn test_copy_and_share() {
        let (mut app, clipboard) = app();
        run(&mut app, "opacity 25");

        let (_, out) = run(&mut app, "copy hsl");
        assert_eq!(out, "Copied to clipboard!\n");
        assert_eq!(clipboard.0.borrow().as_deref(), Some("204°, 70%, 53%"));

        let (_, out) = run(&mut app, "share");
        assert_eq!(out, "Color info copied to clipboard!\n");
        assert!(clipboard.0.borrow().as_deref().unwrap().ends_with("Opacity: 25%"));
    }

    #[test]
    fn test_pick_zero_is_not_a_recent_color() {
        let (mut app, _) = app();
        run(&mut app, "#111111");

        let mut out = Vec::new();
        let flow = app.execute(Command::Pick(0), &mut out).unwrap();
        assert_eq!(flow, Flow::Continue);
        assert_eq!(String::from_utf8(out).unwrap(), "No recent color #0\n");
        assert_eq!(app.picker().report().hex, "#111111");
    }

    fn vars(
        entries: Vec<(&'static str, PathBuf)>,
    ) -> impl Fn(&str) -> Option<OsString> {
        move |name| {
            entries
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.clone().into_os_string())
        }
    }

    #[test]
    fn test_config_defaults_without_vars() {
        let config = AppConfig::from_vars(vars(vec![])).unwrap();
        assert_eq!(config.picker, PickerConfig::default());
        assert_eq!(config.storage_dir, None);
    }

    #[test]
    fn test_config_reads_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("huepick.json");
        std::fs::write(&path, r##"{"default_color": "#ff0000", "recent_capacity": 3}"##).unwrap();

        let config = AppConfig::from_vars(vars(vec![(CONFIG_ENV, path)])).unwrap();
        assert_eq!(config.picker.default_color, "#ff0000");
        assert_eq!(config.picker.recent_capacity, 3);
        assert_eq!(config.picker.storage_key, "recentColors");
    }

    #[test]
    fn test_config_malformed_json_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("huepick.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = AppConfig::from_vars(vars(vec![(CONFIG_ENV, path.clone())]));
        match result {
            Err(AppError::Config { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_config_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let result = AppConfig::from_vars(vars(vec![(CONFIG_ENV, path)]));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_data_dir_var_sets_storage_dir() {
        let dir = tempdir().unwrap();
        let data_dir = dir.path().join("data");

        let config = AppConfig::from_vars(vars(vec![(DATA_DIR_ENV, data_dir.clone())])).unwrap();
        assert_eq!(config.storage_dir.as_deref(), Some(data_dir.as_path()));

        let store = config.open_store().unwrap();
        assert_eq!(store.base_path(), data_dir.as_path());
        assert!(data_dir.is_dir());
    }

    #[test]
    fn test_storage_dir_persists_history() {
        let dir = tempdir().unwrap();
        let config = AppConfig {
            storage_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        let storage = Arc::new(config.open_store().unwrap());
        let mut picker = ColorPicker::new(&config.picker, storage);
        picker.select("#111111").unwrap();

        let reopened = Arc::new(config.open_store().unwrap());
        let picker = ColorPicker::new(&config.picker, reopened);
        assert_eq!(picker.recent().colors(), ["#111111"]);
        assert!(dir.path().join("recentColors.json").exists());
    }

    #[test]
    fn test_unknown_command_and_quit() {
        let (mut app, _) = app();
        let (flow, out) = run(&mut app, "paint");
        assert_eq!(flow, Flow::Continue);
        assert!(out.starts_with("Unknown command"));

        let (flow, _) = run(&mut app, "quit");
        assert_eq!(flow, Flow::Exit);
    }
}
