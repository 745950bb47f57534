use photokik_core::{Msg, PhotoId, Screen};

/// One parsed line of terminal input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Forward a message to the core.
    Msg(Msg),
    /// Pull a photo out of the trash, back into the kept set.
    Restore(PhotoId),
    /// Change and persist the swipe sensitivity (fraction of card width).
    Sensitivity(f32),
    Help,
    Quit,
    Unknown(String),
}

pub fn parse(line: &str) -> Command {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Command::Msg(Msg::NoOp);
    };
    let arg = words.next();

    match (head.to_ascii_lowercase().as_str(), arg) {
        ("keep" | "k", None) => Command::Msg(Msg::KeepPressed),
        ("kik" | "discard" | "d", None) => Command::Msg(Msg::KikPressed),
        // `swipe 180` is a drag release; bare `swipe` navigates to the screen.
        ("swipe", Some(dx)) => match dx.parse::<f32>() {
            Ok(dx) => Command::Msg(Msg::SwipeReleased { dx }),
            Err(_) => Command::Unknown(line.trim().to_string()),
        },
        ("swipe", None) => Command::Msg(Msg::ScreenSelected(Screen::Swipe)),
        ("gallery" | "g", None) => Command::Msg(Msg::ScreenSelected(Screen::Gallery)),
        ("trash" | "t", None) => Command::Msg(Msg::ScreenSelected(Screen::Trash)),
        ("settings", None) => Command::Msg(Msg::ScreenSelected(Screen::Settings)),
        ("refresh" | "r", None) => Command::Msg(Msg::RefreshRequested),
        ("empty", None) => Command::Msg(Msg::EmptyTrashClicked),
        ("restore", Some(id)) => match id.parse::<PhotoId>() {
            Ok(id) => Command::Restore(id),
            Err(_) => Command::Unknown(line.trim().to_string()),
        },
        ("sensitivity", Some(ratio)) => match ratio.parse::<f32>() {
            Ok(ratio) if ratio > 0.0 && ratio <= 1.0 => Command::Sensitivity(ratio),
            _ => Command::Unknown(line.trim().to_string()),
        },
        ("help" | "h" | "?", _) => Command::Help,
        ("quit" | "q" | "exit", _) => Command::Quit,
        _ => Command::Unknown(line.trim().to_string()),
    }
}
