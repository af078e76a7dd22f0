//! Huepick Application
//!
//! A terminal front end for the Huepick color picker: reads commands,
//! renders the current color and talks to the system clipboard.

mod app;
mod clipboard;
mod commands;

pub use app::{App, AppConfig, AppError, CONFIG_ENV, DATA_DIR_ENV, Flow, PlatformApp};
pub use clipboard::{NoClipboard, create_clipboard};
pub use commands::{Command, CommandError, CommandHelp, CommandRegistry};

#[cfg(feature = "native")]
pub use clipboard::SystemClipboard;
