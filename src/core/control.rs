//! Line-oriented control interface
//!
//! Parses the commands typed on the binary's stdin into messages for the
//! main screen, plus a few commands aimed at the picker itself.

use thiserror::Error;

use crate::domain::Orientation;
use crate::session::messages::Msg;

/// Commands accepted by a running instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlCommand {
    /// Forward a message to the main screen
    Screen(Msg),
    /// Press the shutter of the picker on screen
    Shoot,
    /// Back out of the picker on screen
    Dismiss,
    /// Print the presentation state
    Status,
    /// Quit the application
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command {0:?} (try: settings, select <row>, capture, shoot, dismiss, cancel, shown, rotate <orientation>, status, quit)")]
    UnknownCommand(String),
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid row {0:?}")]
    InvalidRow(String),
    #[error("unknown orientation {0:?}")]
    UnknownOrientation(String),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<ControlCommand>, ParseError> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let argument = words.next();

    let parsed = match command {
        "settings" | "toggle" => ControlCommand::Screen(Msg::toggle_settings_panel()),
        "open" => ControlCommand::Screen(Msg::open_settings_panel()),
        "close" => ControlCommand::Screen(Msg::close_settings_panel()),
        "select" => {
            let row = argument.ok_or(ParseError::MissingArgument("select"))?;
            let row = row
                .parse::<usize>()
                .map_err(|_| ParseError::InvalidRow(row.to_string()))?;
            ControlCommand::Screen(Msg::select_row(row))
        }
        "capture" | "camera" => ControlCommand::Screen(Msg::start_capture()),
        "cancel" => ControlCommand::Screen(Msg::cancel_capture()),
        "shown" => ControlCommand::Screen(Msg::screen_shown()),
        "rotate" => {
            let name = argument.ok_or(ParseError::MissingArgument("rotate"))?;
            let orientation = Orientation::from_name(name)
                .ok_or_else(|| ParseError::UnknownOrientation(name.to_string()))?;
            ControlCommand::Screen(Msg::orientation_changed(orientation))
        }
        "shoot" => ControlCommand::Shoot,
        "dismiss" => ControlCommand::Dismiss,
        "status" => ControlCommand::Status,
        "quit" | "exit" => ControlCommand::Quit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(Some(parsed))
}
