//! Line commands understood by the terminal front end.

use huepick_core::CopyTarget;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0:?} (try `help`)")]
    Unknown(String),
    #[error("Missing argument for `{0}`")]
    MissingArgument(&'static str),
    #[error("Invalid argument for `{command}`: {value:?}")]
    InvalidArgument { command: &'static str, value: String },
}

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select a color and record it in the history.
    Select(String),
    /// Display the n-th recent color (1-based) without recording it.
    Pick(usize),
    Opacity(u8),
    Copy(CopyTarget),
    Share,
    Show,
    Recent,
    Help,
    Quit,
}

impl Command {
    /// The keyword a command is invoked with.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Select(_) => "select",
            Command::Pick(_) => "pick",
            Command::Opacity(_) => "opacity",
            Command::Copy(_) => "copy",
            Command::Share => "share",
            Command::Show => "show",
            Command::Recent => "recent",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }

    fn takes_argument(&self) -> bool {
        matches!(self, Command::Pick(_) | Command::Opacity(_) | Command::Copy(_))
    }
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parse one input line. Words beyond those a command takes are
    /// rejected rather than ignored.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Ok(Command::Show);
        };
        let arg = parts.next();

        let command = match head.to_ascii_lowercase().as_str() {
            "pick" => {
                let value = arg.ok_or(CommandError::MissingArgument("pick"))?;
                match value.parse::<usize>() {
                    Ok(n) if n > 0 => Command::Pick(n),
                    _ => {
                        return Err(CommandError::InvalidArgument {
                            command: "pick",
                            value: value.to_string(),
                        });
                    }
                }
            }
            "opacity" => {
                let value = arg.ok_or(CommandError::MissingArgument("opacity"))?;
                let percent = value
                    .trim_end_matches('%')
                    .parse::<u8>()
                    .ok()
                    .filter(|p| *p <= 100)
                    .ok_or_else(|| CommandError::InvalidArgument {
                        command: "opacity",
                        value: value.to_string(),
                    })?;
                Command::Opacity(percent)
            }
            "copy" => {
                let value = arg.ok_or(CommandError::MissingArgument("copy"))?;
                value
                    .parse::<CopyTarget>()
                    .map(Command::Copy)
                    .map_err(|_| CommandError::InvalidArgument {
                        command: "copy",
                        value: value.to_string(),
                    })?
            }
            "share" => Command::Share,
            "show" => Command::Show,
            "recent" => Command::Recent,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ if looks_like_color(head) => Command::Select(head.to_string()),
            _ => return Err(CommandError::Unknown(head.to_string())),
        };

        let extra = if command.takes_argument() { parts.next() } else { arg };
        if let Some(extra) = extra {
            return Err(CommandError::InvalidArgument {
                command: command.name(),
                value: extra.to_string(),
            });
        }
        Ok(command)
    }
}

/// Anything starting with `#` or made of hex digits is treated as a color,
/// so that malformed colors reach the picker and get a color error.
fn looks_like_color(word: &str) -> bool {
    word.starts_with('#') || word.chars().all(|c| c.is_ascii_hexdigit())
}

/// A command's usage line.
#[derive(Debug, Clone)]
pub struct CommandHelp {
    pub usage: &'static str,
    pub description: &'static str,
}

impl CommandHelp {
    pub const fn new(usage: &'static str, description: &'static str) -> Self {
        Self { usage, description }
    }
}

/// Registry of all commands.
pub struct CommandRegistry;

impl CommandRegistry {
    /// Get all registered commands.
    pub fn all() -> Vec<CommandHelp> {
        vec![
            CommandHelp::new("#rrggbb", "Select a color"),
            CommandHelp::new("pick <n>", "Show the n-th recent color"),
            CommandHelp::new("opacity <0-100>", "Set the opacity"),
            CommandHelp::new("copy <target>", "Copy hex, rgb, hsl, opacity, white or black"),
            CommandHelp::new("share", "Share the current color"),
            CommandHelp::new("show", "Show the current color"),
            CommandHelp::new("recent", "List recent colors"),
            CommandHelp::new("help", "Show this help"),
            CommandHelp::new("quit", "Exit"),
        ]
    }

    /// Format all commands for display.
    pub fn help_text() -> String {
        let mut text = String::from("Commands:\n");
        for command in Self::all() {
            text.push_str(&format!("  {:18} {}\n", command.usage, command.description));
        }
        text
    }
}
