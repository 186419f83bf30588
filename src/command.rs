use crate::game::Heading;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// A player request recognized from the keyboard
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('q') | KeyCode::Esc) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            _ => None,
        }
    }

    /// Return the command for a terminal event, if it is a key press that
    /// means anything
    pub(crate) fn from_event(event: &Event) -> Option<Command> {
        Command::from_key_event(event.as_key_press_event()?)
    }

    /// Return the heading a movement command asks for
    pub(crate) fn heading(self) -> Option<Heading> {
        match self {
            Command::Quit => None,
            Command::Up => Some(Heading::Up),
            Command::Down => Some(Heading::Down),
            Command::Left => Some(Heading::Left),
            Command::Right => Some(Heading::Right),
        }
    }
}

/// Reduce the events received since the last tick to at most one command.
/// Quitting wins over everything; otherwise the most recent movement does.
pub(crate) fn latest_command<I>(events: I) -> Option<Command>
where
    I: IntoIterator<Item = Event>,
{
    let mut latest = None;
    for cmd in events.into_iter().filter_map(|ev| Command::from_event(&ev)) {
        if cmd == Command::Quit {
            return Some(Command::Quit);
        }
        latest = Some(cmd);
    }
    latest
}
